// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parsing and expansion shared by the three contract attributes.

use proc_macro2::{Span, TokenStream};
use quote::{quote, ToTokens};
use syn::{parse::Parser, parse_quote, punctuated::Punctuated, Expr, ItemFn, ReturnType, Token, Type};

/// Which check an attribute inserts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Clause {
    Requires,
    Ensures,
    Maintains,
}

impl Clause {
    fn name(self) -> &'static str {
        match self {
            Clause::Requires => "requires",
            Clause::Ensures => "ensures",
            Clause::Maintains => "maintains",
        }
    }
}

/// Parsed `(condition [, message])`.
struct ContractAttrs {
    condition: Expr,
    message: TokenStream,
}

impl ContractAttrs {
    fn parse(clause: Clause, attr: TokenStream) -> syn::Result<Self> {
        let parser = Punctuated::<Expr, Token![,]>::parse_terminated;
        let mut args = parser.parse2(attr)?.into_iter();

        let condition = args.next().ok_or_else(|| {
            syn::Error::new(
                Span::call_site(),
                format!("#[{}] expects a condition", clause.name()),
            )
        })?;

        let message = match args.next() {
            Some(message) => message.into_token_stream(),
            None => {
                let text = condition.to_token_stream().to_string();
                quote!(#text)
            }
        };

        if let Some(extra) = args.next() {
            return Err(syn::Error::new_spanned(
                extra,
                format!("#[{}] takes a condition and an optional message", clause.name()),
            ));
        }

        Ok(ContractAttrs { condition, message })
    }
}

/// Last path segment is `Result`, which also admits aliases like `io::Result`.
fn returns_result(ty: &Type) -> bool {
    match ty {
        Type::Path(path) => path
            .path
            .segments
            .last()
            .map_or(false, |segment| segment.ident == "Result"),
        Type::Paren(inner) => returns_result(&inner.elem),
        Type::Group(inner) => returns_result(&inner.elem),
        _ => false,
    }
}

/// Reject signatures the closure rewrite cannot handle; yields the return type.
fn validate(clause: Clause, func: &ItemFn) -> syn::Result<&Type> {
    if let Some(asyncness) = &func.sig.asyncness {
        return Err(syn::Error::new_spanned(
            asyncness,
            format!("#[{}] does not support `async fn`", clause.name()),
        ));
    }
    match &func.sig.output {
        ReturnType::Type(_, ty) if returns_result(ty) => Ok(&**ty),
        ReturnType::Type(_, ty) => Err(syn::Error::new_spanned(
            ty,
            format!(
                "#[{}] requires a `Result<_, E>` return type with `E: From<ContractViolation>`",
                clause.name()
            ),
        )),
        ReturnType::Default => Err(syn::Error::new_spanned(
            &func.sig.ident,
            format!(
                "#[{}] requires a `Result<_, E>` return type, found `()`",
                clause.name()
            ),
        )),
    }
}

/// Rewrite `func` so its body runs between the checks of `clause`.
pub(crate) fn expand(clause: Clause, attr: TokenStream, item: TokenStream) -> syn::Result<TokenStream> {
    let mut func: ItemFn = syn::parse2(item)?;
    let attrs = ContractAttrs::parse(clause, attr)?;
    let output = validate(clause, &func)?.clone();

    let ContractAttrs { condition, message } = attrs;
    let block = &func.block;

    let body = match clause {
        Clause::Requires => quote! {
            ::dbc::REQUIRE.check_msg(#condition, #message)?;
            #block
        },
        Clause::Ensures | Clause::Maintains => {
            let entry = (clause == Clause::Maintains).then(|| {
                quote! { ::dbc::INVARIANT.check_msg(#condition, #message)?; }
            });
            let exit = if clause == Clause::Ensures {
                quote! {
                    #[allow(unused_variables)]
                    let ret = &__dbc_ret;
                    ::dbc::ENSURE.check_msg(#condition, #message)?;
                }
            } else {
                quote! { ::dbc::INVARIANT.check_msg(#condition, #message)?; }
            };
            quote! {
                #entry
                #[allow(clippy::redundant_closure_call)]
                let __dbc_ret = (|| -> #output #block)()?;
                {
                    #exit
                }
                ::core::result::Result::Ok(__dbc_ret)
            }
        }
    };

    func.block = parse_quote!({ #body });
    Ok(func.into_token_stream())
}

pub(crate) fn process(
    clause: Clause,
    attr: proc_macro::TokenStream,
    item: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    match expand(clause, attr.into(), item.into()) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

//! Parse an AST from a `syn::parse::ParseBuffer`.

use syn::parse::Parse;
use syn::parse::ParseBuffer;
use syn::punctuated::Punctuated;
use syn::Error;

use super::ast::*;
use super::diagnostic::*;
use super::kw;

pub fn parse_schema(source: &str, dgns: &mut Vec<Diagnostic>) -> Result<ASchema, ()> {
    match syn::parse_str(source) {
        Ok(schema) => Ok(schema),
        Err(error) => {
            dgns.push(Diagnostic::ParseError { error });
            Err(())
        }
    }
}

impl Parse for ASchema {
    fn parse(input: &ParseBuffer) -> Result<Self, Error> {
        let mut defs = vec![];
        while !input.is_empty() {
            defs.push(input.parse()?);
        }
        Ok(ASchema { defs })
    }
}

impl Parse for ADef {
    fn parse(input: &ParseBuffer) -> Result<Self, Error> {
        let lookahead = input.lookahead1();
        if lookahead.peek(syn::Token![type]) {
            Ok(ADef::Type {
                kw: input.parse()?,
                name: input.parse()?,
                eq: input.parse()?,
                ty: input.parse()?,
                semi: input.parse()?,
            })
        } else if lookahead.peek(kw::enumeration) {
            let body;
            Ok(ADef::Enumeration {
                kw: input.parse()?,
                name: input.parse()?,
                brace: syn::braced!(body in input),
                items: Punctuated::parse_terminated(&body)?,
            })
        } else if lookahead.peek(kw::select) {
            let body;
            Ok(ADef::Select {
                kw: input.parse()?,
                name: input.parse()?,
                brace: syn::braced!(body in input),
                alternatives: Punctuated::parse_terminated(&body)?,
            })
        } else if lookahead.peek(kw::entity) {
            let body;
            Ok(ADef::Entity {
                kw: input.parse()?,
                name: input.parse()?,
                supertypes: if input.peek(syn::Token![:]) {
                    Some((input.parse()?, Punctuated::parse_separated_nonempty(input)?))
                } else {
                    None
                },
                brace: syn::braced!(body in input),
                attrs: Punctuated::parse_terminated(&body)?,
            })
        } else {
            Err(lookahead.error())
        }
    }
}

impl Parse for AAttr {
    fn parse(input: &ParseBuffer) -> Result<Self, Error> {
        Ok(Self {
            name: input.parse()?,
            colon: input.parse()?,
            ty: input.parse()?,
        })
    }
}

impl Parse for ATy {
    fn parse(input: &ParseBuffer) -> Result<Self, Error> {
        if Self::peek_aggr(input) {
            let item_input;
            Ok(ATy::Aggr {
                kind: input.parse()?,
                bracket: syn::bracketed!(item_input in input),
                item: Box::new(item_input.parse()?),
            })
        } else {
            Ok(ATy::Name {
                name: input.parse()?,
            })
        }
    }
}

impl ATy {
    fn peek_aggr(input: &ParseBuffer) -> bool {
        [
            input.peek(kw::list),
            input.peek(kw::set),
            input.peek(kw::bag),
            input.peek(kw::array),
        ]
        .iter()
        .any(|b| *b)
            && input.peek2(syn::token::Bracket)
    }
}

impl Parse for AAggrKind {
    fn parse(input: &ParseBuffer) -> Result<Self, Error> {
        let la = input.lookahead1();
        Ok(if la.peek(kw::list) {
            AAggrKind::List(input.parse()?)
        } else if la.peek(kw::set) {
            AAggrKind::Set(input.parse()?)
        } else if la.peek(kw::bag) {
            AAggrKind::Bag(input.parse()?)
        } else if la.peek(kw::array) {
            AAggrKind::Array(input.parse()?)
        } else {
            Err(la.error())?
        })
    }
}

impl Parse for AName {
    fn parse(input: &ParseBuffer) -> Result<Self, Error> {
        // Parsing TokenTree instead of Ident to accept Rust keywords as names
        let token_tree: proc_macro2::TokenTree = input.parse()?;
        match token_tree {
            proc_macro2::TokenTree::Ident(token) => Ok(AName { token }),
            _ => Err(Error::new(token_tree.span(), "expected name")),
        }
    }
}

//! Abstract Syntax Tree (AST), obtained by parsing the schema description syntax.

use syn::punctuated::Punctuated;

use super::kw;

/// AST of a schema description as a whole.
#[derive(Debug)]
pub struct ASchema {
    pub defs: Vec<ADef>,
}

/// AST of a definition, e.g., `type IfcLabel = string;` or `select IfcValue { [...] }`.
#[derive(Debug)]
pub enum ADef {
    /// AST of, e.g., `type IfcPositiveLengthMeasure = IfcLengthMeasure;`.
    Type {
        kw: syn::Token![type],
        name: AName,
        eq: syn::Token![=],
        ty: ATy,
        semi: syn::Token![;],
    },
    /// AST of, e.g., `enumeration IfcWallTypeEnum { MOVABLE, PARAPET }`.
    Enumeration {
        kw: kw::enumeration,
        name: AName,
        brace: syn::token::Brace,
        items: Punctuated<AName, syn::Token![,]>,
    },
    /// AST of, e.g., `select IfcActorSelect { IfcOrganization, IfcPerson }`.
    Select {
        kw: kw::select,
        name: AName,
        brace: syn::token::Brace,
        alternatives: Punctuated<AName, syn::Token![,]>,
    },
    /// AST of, e.g., `entity IfcWall : IfcElement { PredefinedType: IfcWallTypeEnum }`.
    Entity {
        kw: kw::entity,
        name: AName,
        supertypes: Option<(syn::Token![:], Punctuated<AName, syn::Token![,]>)>,
        brace: syn::token::Brace,
        attrs: Punctuated<AAttr, syn::Token![,]>,
    },
}

/// AST of, e.g., `Name: IfcLabel`.
#[derive(Debug)]
pub struct AAttr {
    pub name: AName,
    pub colon: syn::Token![:],
    pub ty: ATy,
}

/// AST of, e.g., `real`, `IfcLabel` or `list[list[IfcLengthMeasure]]`.
#[derive(Debug)]
pub enum ATy {
    Name {
        name: AName,
    },
    Aggr {
        kind: AAggrKind,
        bracket: syn::token::Bracket,
        item: Box<ATy>,
    },
}

#[derive(Debug)]
pub enum AAggrKind {
    List(kw::list),
    Set(kw::set),
    Bag(kw::bag),
    Array(kw::array),
}

/// AST of a name of a definition, attribute or enumeration item.
#[derive(Debug)]
pub struct AName {
    pub token: proc_macro2::Ident,
}

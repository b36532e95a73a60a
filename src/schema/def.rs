//! Resolved schema: definitions with every type name bound to what it denotes.

use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

use proc_macro2::Span;

use crate::value::PayloadKind;

/// Name as written in the schema description. Names compare case-insensitively.
#[derive(Debug, Clone)]
pub struct Name {
    pub ident: proc_macro2::Ident,
}

impl Name {
    pub fn span(self: &Self) -> Span {
        self.ident.span()
    }

    /// Key used for lookups, i.e., the upper-case name.
    pub fn key(self: &Self) -> String {
        self.ident.to_string().to_ascii_uppercase()
    }
}

impl Display for Name {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.ident)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    Integer,
    Real,
    Boolean,
    Logical,
    String,
    Binary,
}

impl Builtin {
    pub fn from_name(name: &str) -> Option<Builtin> {
        Some(match name {
            "integer" => Builtin::Integer,
            "real" => Builtin::Real,
            "boolean" => Builtin::Boolean,
            "logical" => Builtin::Logical,
            "string" => Builtin::String,
            "binary" => Builtin::Binary,
            _ => return None,
        })
    }

    pub fn payload_kind(self: Self) -> PayloadKind {
        match self {
            Builtin::Integer => PayloadKind::Integer,
            Builtin::Real => PayloadKind::Real,
            Builtin::Boolean => PayloadKind::Boolean,
            Builtin::Logical => PayloadKind::Logical,
            Builtin::String => PayloadKind::String,
            Builtin::Binary => PayloadKind::Binary,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggrKind {
    List,
    Set,
    Bag,
    Array,
}

/// Type of an attribute, defined type or aggregate item.
#[derive(Debug, Clone)]
pub enum Ty {
    Builtin(Builtin),
    Defined { name: Rc<Name> },
    Enumeration { name: Rc<Name> },
    Select { name: Rc<Name> },
    Entity { name: Rc<Name> },
    Aggregate { kind: AggrKind, item: Rc<Ty> },
    Err,
}

#[derive(Debug)]
pub struct TypeDef {
    pub name: Rc<Name>,
    pub ty: Rc<Ty>,
}

#[derive(Debug)]
pub struct EnumDef {
    pub name: Rc<Name>,
    pub items: Vec<Rc<Name>>,
}

#[derive(Debug)]
pub struct SelectDef {
    pub name: Rc<Name>,
    pub alternatives: Vec<Rc<Name>>,
}

#[derive(Debug)]
pub struct EntityDef {
    pub name: Rc<Name>,
    pub supertypes: Vec<Rc<Name>>,
    pub attrs: Vec<Rc<AttrDef>>,
}

#[derive(Debug)]
pub struct AttrDef {
    pub name: Rc<Name>,
    pub ty: Rc<Ty>,
}

/// Any named definition.
#[derive(Debug, Clone)]
pub enum Def {
    Type(Rc<TypeDef>),
    Enumeration(Rc<EnumDef>),
    Select(Rc<SelectDef>),
    Entity(Rc<EntityDef>),
}

impl Def {
    pub fn name(self: &Self) -> &Rc<Name> {
        match self {
            Def::Type(def) => &def.name,
            Def::Enumeration(def) => &def.name,
            Def::Select(def) => &def.name,
            Def::Entity(def) => &def.name,
        }
    }

    pub fn describe(self: &Self) -> &'static str {
        match self {
            Def::Type(_) => "defined type",
            Def::Enumeration(_) => "enumeration",
            Def::Select(_) => "select",
            Def::Entity(_) => "entity",
        }
    }
}

/// A schema whose names are all resolved, without duplicates or cycles.
#[derive(Debug, Default)]
pub struct Schema {
    pub types: Vec<Rc<TypeDef>>,
    pub enumerations: Vec<Rc<EnumDef>>,
    pub selects: Vec<Rc<SelectDef>>,
    pub entities: Vec<Rc<EntityDef>>,
    pub(crate) index: HashMap<String, Def>,
}

impl Schema {
    /// Definition named `name`, case-insensitively.
    pub fn lookup(self: &Self, name: &str) -> Option<&Def> {
        self.index.get(&name.to_ascii_uppercase())
    }

    pub fn entity(self: &Self, name: &str) -> Option<&Rc<EntityDef>> {
        match self.lookup(name)? {
            Def::Entity(def) => Some(def),
            _ => None,
        }
    }

    pub fn select(self: &Self, name: &str) -> Option<&Rc<SelectDef>> {
        match self.lookup(name)? {
            Def::Select(def) => Some(def),
            _ => None,
        }
    }

    /// Follows defined types until a type that is not a defined type.
    pub fn underlying(self: &Self, ty: &Rc<Ty>) -> Rc<Ty> {
        let mut current = ty.clone();
        // bounded, even though cycles are rejected when loading
        for _ in 0..=self.types.len() {
            let next = match current.as_ref() {
                Ty::Defined { name } => match self.lookup(&name.key()) {
                    Some(Def::Type(def)) => def.ty.clone(),
                    _ => return Rc::new(Ty::Err),
                },
                _ => return current,
            };
            current = next;
        }
        Rc::new(Ty::Err)
    }

    /// Attributes of `entity`, inherited ones first.
    /// An attribute redeclared by a subtype keeps its first position.
    pub fn attributes_of(self: &Self, entity: &EntityDef) -> Vec<Rc<AttrDef>> {
        let mut attrs: Vec<Rc<AttrDef>> = Vec::new();
        let mut visited = Vec::new();
        self.collect_attributes(entity, &mut attrs, &mut visited);
        attrs
    }

    fn collect_attributes(
        self: &Self,
        entity: &EntityDef,
        attrs: &mut Vec<Rc<AttrDef>>,
        visited: &mut Vec<String>,
    ) {
        let key = entity.name.key();
        if visited.contains(&key) {
            return;
        }
        visited.push(key);

        for supertype in entity.supertypes.iter() {
            if let Some(def) = self.entity(&supertype.key()) {
                self.collect_attributes(def, attrs, visited);
            }
        }
        for attr in entity.attrs.iter() {
            if !attrs.iter().any(|a| a.name.key() == attr.name.key()) {
                attrs.push(attr.clone());
            }
        }
    }

    /// Whether entity `entity` is `ancestor` or one of its subtypes.
    pub fn is_subtype_of(self: &Self, entity: &str, ancestor: &str) -> bool {
        let ancestor = ancestor.to_ascii_uppercase();
        let mut pending = vec![entity.to_ascii_uppercase()];
        let mut visited = Vec::new();
        while let Some(current) = pending.pop() {
            if current == ancestor {
                return true;
            }
            if visited.contains(&current) {
                continue;
            }
            if let Some(def) = self.entity(&current) {
                pending.extend(def.supertypes.iter().map(|s| s.key()));
            }
            visited.push(current);
        }
        false
    }
}

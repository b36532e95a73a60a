//! Generation of typed Rust wrappers from a `Schema`.
//!
//! The schema is first lowered into a plan (`G*` nodes below) holding the Rust names and types of
//! each accessor, then the plan is quoted into code.
//! For every enumeration a Rust enum implementing `Enumeration` is generated,
//! for every select a wrapper around `Select` with an `is_`/`get_`/`put_` triple per alternative,
//! and for every entity a wrapper around `Entity` with accessors for all its attributes,
//! inherited ones included.

use std::rc::Rc;

use genco::prelude::*;

use crate::schema::*;
use crate::select::AltCategory;
use crate::value::PayloadKind;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RustLang;

impl Lang for RustLang {
    type Config = ();
    type Format = ();
    type Item = ();
}

#[derive(Debug, Clone)]
pub struct GenOptions {
    /// Path of this crate, as seen by the generated code.
    pub runtime_crate: String,
}

impl Default for GenOptions {
    fn default() -> Self {
        GenOptions {
            runtime_crate: "sdai_typed".into(),
        }
    }
}

struct GFile {
    runtime_crate: String,
    enums: Vec<GEnum>,
    selects: Vec<GSelect>,
    entities: Vec<GEntity>,
}

struct GEnum {
    name: String,
    items: Vec<String>,
}

struct GSelect {
    name: String,
    alternatives: Vec<GAlternative>,
}

struct GAlternative {
    name: String,
    method: String,
    category: AltCategory,
    access: Access,
}

struct GEntity {
    name: String,
    attrs: Vec<GAttr>,
}

struct GAttr {
    name: String,
    method: String,
    access: Access,
}

/// How a value of some type is read and written.
#[derive(Debug, Clone)]
enum Access {
    Scalar { rust: &'static str, kind: String },
    Text { kind: String },
    Enumeration { rust: String },
    Entity { name: String },
    Select { name: String },
    Aggregate { marshaller: String, elem: String },
    Invalid,
}

pub fn gen_file(schema: &Schema, options: &GenOptions) -> Result<String, std::fmt::Error> {
    let file = build_plan(schema, options);
    let tokens: Tokens<RustLang> = quote!(#(&file));
    tokens.to_file_string()
}

fn build_plan(schema: &Schema, options: &GenOptions) -> GFile {
    GFile {
        runtime_crate: options.runtime_crate.clone(),
        enums: schema
            .enumerations
            .iter()
            .map(|def| GEnum {
                name: def.name.to_string(),
                items: def.items.iter().map(|item| item.to_string()).collect(),
            })
            .collect(),
        selects: schema
            .selects
            .iter()
            .map(|def| GSelect {
                name: def.name.to_string(),
                alternatives: def
                    .alternatives
                    .iter()
                    .flat_map(|alt| build_alternative(schema, alt))
                    .collect(),
            })
            .collect(),
        entities: schema
            .entities
            .iter()
            .map(|def| GEntity {
                name: def.name.to_string(),
                attrs: schema
                    .attributes_of(def)
                    .iter()
                    .map(|attr| GAttr {
                        name: attr.name.to_string(),
                        method: snake_case(&attr.name.to_string()),
                        access: access(schema, &attr.ty),
                    })
                    .collect(),
            })
            .collect(),
    }
}

fn build_alternative(schema: &Schema, alt: &Rc<Name>) -> Option<GAlternative> {
    let (category, access) = match schema.lookup(&alt.key())? {
        Def::Type(def) => (AltCategory::Value, access(schema, &def.ty)),
        Def::Enumeration(def) => (
            AltCategory::Value,
            Access::Enumeration {
                rust: def.name.to_string(),
            },
        ),
        Def::Select(def) => (
            AltCategory::Select,
            Access::Select {
                name: def.name.to_string(),
            },
        ),
        Def::Entity(def) => (
            AltCategory::Entity,
            Access::Entity {
                name: def.name.to_string(),
            },
        ),
    };
    Some(GAlternative {
        name: alt.to_string(),
        method: snake_case(&alt.to_string()),
        category,
        access,
    })
}

fn kind_path(kind: PayloadKind) -> String {
    format!("PayloadKind::{:?}", kind)
}

fn access(schema: &Schema, ty: &Rc<Ty>) -> Access {
    match schema.underlying(ty).as_ref() {
        Ty::Builtin(builtin) => match builtin {
            Builtin::Integer => Access::Scalar {
                rust: "i64",
                kind: kind_path(builtin.payload_kind()),
            },
            Builtin::Real => Access::Scalar {
                rust: "f64",
                kind: kind_path(builtin.payload_kind()),
            },
            Builtin::Boolean => Access::Scalar {
                rust: "bool",
                kind: kind_path(builtin.payload_kind()),
            },
            Builtin::Logical => Access::Enumeration {
                rust: "Logical".into(),
            },
            Builtin::String | Builtin::Binary => Access::Text {
                kind: kind_path(builtin.payload_kind()),
            },
        },
        Ty::Enumeration { name } => Access::Enumeration {
            rust: name.to_string(),
        },
        Ty::Entity { name } => Access::Entity {
            name: name.to_string(),
        },
        Ty::Select { name } => Access::Select {
            name: name.to_string(),
        },
        Ty::Aggregate { item, .. } => match marshaller(schema, item) {
            Some((marshaller, elem)) => Access::Aggregate { marshaller, elem },
            None => Access::Invalid,
        },
        Ty::Defined { .. } | Ty::Err => Access::Invalid,
    }
}

/// Expression building the marshaller of aggregates of `item`, and the Rust element type.
fn marshaller(schema: &Schema, item: &Rc<Ty>) -> Option<(String, String)> {
    Some(match access(schema, item) {
        Access::Scalar { rust, .. } => (
            format!("ScalarMarshaller::<{}>::new()", rust),
            rust.to_owned(),
        ),
        Access::Text { kind } => (
            format!("TextMarshaller::new({})", kind),
            "Rc<str>".to_owned(),
        ),
        Access::Enumeration { rust } => (format!("EnumMarshaller::<{}>::new()", rust), rust),
        Access::Entity { name } => (
            format!("InstanceMarshaller::new(Some({:?}))", name),
            "Instance".to_owned(),
        ),
        Access::Select { name } => (
            format!("SelectMarshaller::<{}<'s>>::new()", name),
            format!("{}<'s>", name),
        ),
        Access::Aggregate { marshaller, elem } => (
            format!("NestedMarshaller::new({})", marshaller),
            format!("Vec<{}>", elem),
        ),
        Access::Invalid => return None,
    })
}

/// `IfcLengthMeasure` to `ifc_length_measure`.
pub fn snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::new();
    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_lower = chars.get(i + 1).map_or(false, |n| n.is_ascii_lowercase());
            if prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_lower)
            {
                out.push('_');
            }
        }
        out.push(c.to_ascii_lowercase());
    }
    out
}

fn lit(s: &str) -> String {
    format!("{:?}", s)
}

impl FormatInto<RustLang> for &GFile {
    fn format_into(self, tokens: &mut Tokens<RustLang>) {
        let GFile {
            runtime_crate,
            enums,
            selects,
            entities,
        } = self;
        quote_in! { *tokens =>
            use std::ops::Deref;
            use std::rc::Rc;

            use #runtime_crate::prelude::*;

            #(for e in enums join (#<line>) => #e)

            #(for s in selects join (#<line>) => #s)

            #(for e in entities join (#<line>) => #e)
        }
    }
}

impl FormatInto<RustLang> for &GEnum {
    fn format_into(self, tokens: &mut Tokens<RustLang>) {
        let GEnum { name, items } = self;
        let names: Vec<String> = items.iter().map(|item| lit(item)).collect();
        let indices: Vec<(String, &String)> = items
            .iter()
            .enumerate()
            .map(|(index, item)| (index.to_string(), item))
            .collect();
        quote_in! { *tokens =>
            ##[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
            ##[allow(non_camel_case_types)]
            pub enum #name {
                #(for item in items join (#<push>) => #item,)
            }

            impl Enumeration for #name {
                const TABLE: EnumTable = EnumTable::new(&[#(for n in &names join (, ) => #n)]);

                fn from_index(index: usize) -> Option<Self> {
                    match index {
                        #(for (index, item) in &indices join (#<push>) => #index => Some(#name::#(*item)),)
                        _ => None,
                    }
                }

                fn index(self: Self) -> usize {
                    self as usize
                }
            }
        }
    }
}

impl FormatInto<RustLang> for &GSelect {
    fn format_into(self, tokens: &mut Tokens<RustLang>) {
        let GSelect { name, alternatives } = self;
        let select_name = lit(name);
        quote_in! { *tokens =>
            ##[derive(Debug, Clone)]
            pub struct #name<'s>(pub Select<'s>);

            impl<'s> #name<'s> {
                pub const TABLE: SelectTable = SelectTable {
                    name: #select_name,
                    alternatives: &[
                        #(for alt in alternatives join (#<push>) => #(&TableEntry(alt)),)
                    ],
                };

                pub fn new(store: &'s dyn Store, instance: Instance, attr: &str) -> Self {
                    #name(Select::new(store, instance, attr))
                }

                pub fn detached(store: &'s dyn Store, instance: Instance) -> Self {
                    #name(Select::detached(store, instance))
                }

                pub fn which(self: &Self) -> Option<&'static Alternative> {
                    self.0.which(&Self::TABLE)
                }

                #(for alt in alternatives join (#<line>) => #alt)
            }

            impl<'s> Deref for #name<'s> {
                type Target = Select<'s>;

                fn deref(&self) -> &Select<'s> {
                    &self.0
                }
            }

            impl<'s> SelectWrapper<'s> for #name<'s> {
                fn wrap(select: Select<'s>) -> Self {
                    #name(select)
                }

                fn select(self: &Self) -> &Select<'s> {
                    &self.0
                }
            }
        }
    }
}

struct TableEntry<'a>(&'a GAlternative);

impl FormatInto<RustLang> for &TableEntry<'_> {
    fn format_into(self, tokens: &mut Tokens<RustLang>) {
        let alt_name = lit(&self.0.name);
        let category = format!("AltCategory::{:?}", self.0.category);
        quote_in! { *tokens =>
            Alternative { name: #alt_name, category: #category }
        }
    }
}

impl FormatInto<RustLang> for &GAlternative {
    fn format_into(self, tokens: &mut Tokens<RustLang>) {
        let GAlternative {
            name,
            method,
            category,
            access,
        } = self;
        let alt_name = lit(name);
        let is = format!("is_{}", method);
        let get = format!("get_{}", method);
        let put = format!("put_{}", method);

        match category {
            AltCategory::Value => quote_in! { *tokens =>
                pub fn #is(self: &Self) -> bool {
                    self.0.is_type(Some(#(&alt_name)))
                }
            },
            AltCategory::Entity => quote_in! { *tokens =>
                pub fn #is(self: &Self) -> bool {
                    self.0.is_entity(#(&alt_name))
                }
            },
            AltCategory::Select => quote_in! { *tokens =>
                pub fn #is(self: &Self) -> bool {
                    self.0.is_nested(#(&alt_name))
                }
            },
        }
        tokens.line();

        match access {
            Access::Scalar { rust, kind } => quote_in! { *tokens =>
                pub fn #get(self: &Self) -> Option<#(*rust)> {
                    self.0.get_simple(Some(#(&alt_name)), #kind)
                }

                pub fn #put(self: &Self, value: #(*rust)) {
                    self.0.put_simple(#(&alt_name), #kind, value)
                }
            },
            Access::Text { kind } => quote_in! { *tokens =>
                pub fn #get(self: &Self) -> Option<Rc<str>> {
                    self.0.get_text(Some(#(&alt_name)), #kind)
                }

                pub fn #put(self: &Self, value: &str) {
                    self.0.put_text(#(&alt_name), #kind, value)
                }
            },
            Access::Enumeration { rust } => quote_in! { *tokens =>
                pub fn #get(self: &Self) -> Option<#rust> {
                    self.0.get_enum(Some(#(&alt_name)))
                }

                pub fn #put(self: &Self, value: #rust) {
                    self.0.put_enum(#(&alt_name), value)
                }
            },
            Access::Aggregate { marshaller, elem } => quote_in! { *tokens =>
                pub fn #get(self: &Self) -> Option<Vec<#elem>> {
                    self.0.get_aggregate_as(Some(#(&alt_name)), &#marshaller)
                }

                pub fn #put(self: &Self, value: &[#elem]) {
                    self.0.put_aggregate_from(#(&alt_name), &#marshaller, value)
                }
            },
            Access::Entity { name: entity } => quote_in! { *tokens =>
                pub fn #get(self: &Self) -> Option<#entity<'s>> {
                    self.0
                        .get_entity_instance(Some(#(&alt_name)))
                        .map(|instance| #entity(Entity::new(self.0.store(), instance)))
                }

                pub fn #put(self: &Self, value: impl Into<Instance>) -> Result<(), PutError> {
                    self.0.put_entity_instance(#(&alt_name), value.into())
                }
            },
            Access::Select { name: nested } => quote_in! { *tokens =>
                pub fn #get(self: &Self) -> #nested<'_> {
                    #nested(self.0.nested(#(&alt_name)))
                }

                pub fn #put(self: &Self) -> #nested<'_> {
                    #nested(self.0.nested(#(&alt_name)))
                }
            },
            Access::Invalid => (),
        }
    }
}

impl FormatInto<RustLang> for &GEntity {
    fn format_into(self, tokens: &mut Tokens<RustLang>) {
        let GEntity { name, attrs } = self;
        let entity_name = lit(name);
        quote_in! { *tokens =>
            ##[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
            pub struct #name<'s>(pub Entity<'s>);

            impl<'s> #name<'s> {
                pub const NAME: &'static str = #entity_name;

                pub fn create(store: &'s dyn Store) -> Self {
                    #name(Entity::new(store, store.create_instance(Self::NAME)))
                }

                pub fn cast(store: &'s dyn Store, instance: Instance) -> Self {
                    #name(Entity::cast(store, instance, Self::NAME))
                }

                #(for attr in attrs join (#<line>) => #attr)
            }

            impl<'s> Deref for #name<'s> {
                type Target = Entity<'s>;

                fn deref(&self) -> &Entity<'s> {
                    &self.0
                }
            }

            impl From<#name<'_>> for Instance {
                fn from(entity: #name<'_>) -> Self {
                    entity.0.instance()
                }
            }
        }
    }
}

impl FormatInto<RustLang> for &GAttr {
    fn format_into(self, tokens: &mut Tokens<RustLang>) {
        let GAttr {
            name,
            method,
            access,
        } = self;
        let attr_name = lit(name);
        let get = format!("get_{}", method);
        let put = format!("put_{}", method);

        match access {
            Access::Scalar { rust, kind } => quote_in! { *tokens =>
                pub fn #get(self: &Self) -> Option<#(*rust)> {
                    self.0.get_simple(#(&attr_name), #kind)
                }

                pub fn #put(self: &Self, value: #(*rust)) {
                    self.0.put_simple(#(&attr_name), #kind, value)
                }
            },
            Access::Text { kind } => quote_in! { *tokens =>
                pub fn #get(self: &Self) -> Option<Rc<str>> {
                    self.0.get_text(#(&attr_name), #kind)
                }

                pub fn #put(self: &Self, value: &str) {
                    self.0.put_text(#(&attr_name), #kind, value)
                }
            },
            Access::Enumeration { rust } => quote_in! { *tokens =>
                pub fn #get(self: &Self) -> Option<#rust> {
                    self.0.get_enum(#(&attr_name))
                }

                pub fn #put(self: &Self, value: #rust) {
                    self.0.put_enum(#(&attr_name), value)
                }
            },
            Access::Aggregate { marshaller, elem } => quote_in! { *tokens =>
                pub fn #get(self: &Self) -> Vec<#elem> {
                    self.0.get_list(#(&attr_name), &#marshaller)
                }

                pub fn #put(self: &Self, value: &[#elem]) {
                    self.0.put_list(#(&attr_name), &#marshaller, value);
                }
            },
            Access::Entity { name: entity } => quote_in! { *tokens =>
                pub fn #get(self: &Self) -> Option<#entity<'s>> {
                    self.0
                        .get_instance(#(&attr_name), Some(#entity::NAME))
                        .map(|instance| #entity(Entity::new(self.0.store(), instance)))
                }

                pub fn #put(self: &Self, value: impl Into<Instance>) -> Result<(), PutError> {
                    self.0.put_instance(#(&attr_name), #entity::NAME, value.into())
                }
            },
            Access::Select { name: select } => quote_in! { *tokens =>
                pub fn #get(self: &Self) -> #select<'s> {
                    #select(self.0.select(#(&attr_name)))
                }
            },
            Access::Invalid => (),
        }
    }
}

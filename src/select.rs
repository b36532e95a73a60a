//! Access to SELECT (union) typed values.
//!
//! A [`Select`] is bound either to an attribute of an instance (root binding),
//! or to an outer `Select` through one of its alternatives that is itself a union (nested binding).
//! A root binding fetches the value box of the attribute on first use and keeps it cached.
//! A nested binding has no state of its own: reads and writes go through the outer binding,
//! and the type path of the written boxes is prefixed with the alternatives it is reached through.
//!
//! The cache of a root binding is **not** invalidated if the attribute is written by other means
//! (e.g., through another `Select` or directly through the store).
//! Call [`Select::refresh`] to drop it.

use std::cell::RefCell;
use std::fmt::{Debug, Formatter};
use std::rc::Rc;

use tracing::{debug, warn};

use crate::aggr::Marshaller;
use crate::enumeration::*;
use crate::error::PutError;
use crate::simple::Simple;
use crate::store::*;
use crate::value::*;

#[derive(Clone)]
pub struct Select<'s> {
    store: &'s dyn Store,
    binding: Binding<'s>,
}

#[derive(Clone)]
enum Binding<'s> {
    Root {
        instance: Instance,
        attr: Option<Rc<str>>,
        cache: RefCell<Option<ValueBox>>,
    },
    Nested {
        outer: &'s Select<'s>,
        via: Rc<str>,
    },
}

/// How an alternative of a union is recognized
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum AltCategory {
    /// By the type path of the value
    Value,
    /// By the entity type of the referenced instance
    Entity,
    /// By a type path going through a nested union
    Select,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alternative {
    pub name: &'static str,
    pub category: AltCategory,
}

/// Static description of the alternatives of a union.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectTable {
    pub name: &'static str,
    pub alternatives: &'static [Alternative],
}

/// A typed wrapper around a [`Select`], such as the ones produced by the generator.
pub trait SelectWrapper<'s>: Sized {
    fn wrap(select: Select<'s>) -> Self;
    fn select(self: &Self) -> &Select<'s>;
}

impl<'s> SelectWrapper<'s> for Select<'s> {
    fn wrap(select: Select<'s>) -> Self {
        select
    }

    fn select(self: &Self) -> &Select<'s> {
        self
    }
}

impl<'s> Select<'s> {
    /// Binds to the attribute `attr` of `instance`.
    pub fn new(store: &'s dyn Store, instance: Instance, attr: &str) -> Select<'s> {
        Select {
            store,
            binding: Binding::Root {
                instance,
                attr: Some(attr.into()),
                cache: RefCell::new(None),
            },
        }
    }

    /// Binds to no attribute, so that the value is only kept in the cache.
    /// Used to build union values to be put into aggregates owned by `instance`.
    pub fn detached(store: &'s dyn Store, instance: Instance) -> Select<'s> {
        Select {
            store,
            binding: Binding::Root {
                instance,
                attr: None,
                cache: RefCell::new(None),
            },
        }
    }

    /// Binds to an already fetched value box, e.g., a member of an aggregate.
    pub fn with_value_box(
        store: &'s dyn Store,
        instance: Instance,
        value_box: ValueBox,
    ) -> Select<'s> {
        Select {
            store,
            binding: Binding::Root {
                instance,
                attr: None,
                cache: RefCell::new(Some(value_box)),
            },
        }
    }

    /// Binds to the alternative `via` of this union, which is itself a union.
    pub fn nested<'a>(self: &'a Select<'s>, via: &str) -> Select<'a> {
        Select {
            store: self.store,
            binding: Binding::Nested {
                outer: self,
                via: via.to_ascii_uppercase().into(),
            },
        }
    }

    pub fn store(self: &Self) -> &'s dyn Store {
        self.store
    }

    /// Instance owning the value (inherited from the outer binding, if nested).
    pub fn instance(self: &Self) -> Instance {
        match &self.binding {
            Binding::Root { instance, .. } => *instance,
            Binding::Nested { outer, .. } => outer.instance(),
        }
    }

    pub fn attr(self: &Self) -> Option<&str> {
        match &self.binding {
            Binding::Root { attr, .. } => attr.as_ref().map(|a| a.as_ref()),
            Binding::Nested { outer, .. } => outer.attr(),
        }
    }

    pub fn is_nested_binding(self: &Self) -> bool {
        matches!(self.binding, Binding::Nested { .. })
    }

    /// Resolves the value box of this binding, fetching it from the store if not cached.
    pub fn value_box(self: &Self) -> Option<ValueBox> {
        self.with_box(|b| Some(b.clone()))
    }

    /// Full type path of the current value.
    pub fn type_path(self: &Self) -> Option<TypePath> {
        self.with_box(|b| Some(b.type_path().clone()))
    }

    /// Drops the cached value box, so that the next read fetches it again.
    pub fn refresh(self: &Self) {
        match &self.binding {
            Binding::Root { cache, .. } => *cache.borrow_mut() = None,
            Binding::Nested { outer, .. } => outer.refresh(),
        }
    }

    fn with_box<R>(self: &Self, f: impl FnOnce(&ValueBox) -> Option<R>) -> Option<R> {
        match &self.binding {
            Binding::Nested { outer, .. } => outer.with_box(f),
            Binding::Root {
                instance,
                attr,
                cache,
            } => {
                if cache.borrow().is_none() {
                    if let Some(attr) = attr {
                        if !instance.is_null() {
                            let fetched = self
                                .store
                                .attr_value(*instance, attr, PayloadKind::Box)
                                .and_then(Value::into_box);
                            match &fetched {
                                Some(b) => debug!(
                                    %instance,
                                    attr = %attr,
                                    path = %b.type_path(),
                                    "select value fetched"
                                ),
                                None => debug!(%instance, attr = %attr, "select attribute unset"),
                            }
                            *cache.borrow_mut() = fetched;
                        }
                    }
                }
                cache.borrow().as_ref().and_then(f)
            }
        }
    }

    fn set_box(self: &Self, mut value_box: ValueBox) {
        match &self.binding {
            Binding::Nested { outer, via } => {
                let mut path = value_box.type_path().clone();
                path.push_front(via);
                value_box.set_type_path(path);
                outer.set_box(value_box)
            }
            Binding::Root {
                instance,
                attr,
                cache,
            } => {
                if let Some(attr) = attr {
                    if !instance.is_null() {
                        debug!(
                            %instance,
                            attr = %attr,
                            path = %value_box.type_path(),
                            "select value written"
                        );
                        self.store.put_attr_value(
                            *instance,
                            attr,
                            Value::Boxed(Box::new(value_box.clone())),
                        );
                    }
                }
                *cache.borrow_mut() = Some(value_box);
            }
        }
    }

    /// Type path of the alternatives this binding is reached through.
    fn prefix(self: &Self) -> TypePath {
        match &self.binding {
            Binding::Root { .. } => TypePath::new(),
            Binding::Nested { outer, via } => {
                let mut path = outer.prefix();
                path.push(via);
                path
            }
        }
    }

    fn expected_path(self: &Self, name: &str) -> TypePath {
        let mut path = self.prefix();
        path.push(name);
        path
    }

    fn path_matches(self: &Self, value_box: &ValueBox, name: Option<&str>) -> bool {
        match name {
            None => true,
            Some(name) => *value_box.type_path() == self.expected_path(name),
        }
    }

    fn put_value(self: &Self, name: &str, value: Value) {
        self.set_box(ValueBox::typed(TypePath::leaf(name), value))
    }

    /// Whether the value has type `name` (any type if `None`) at this level.
    pub fn is_type(self: &Self, name: Option<&str>) -> bool {
        self.with_box(|b| Some(self.path_matches(b, name)))
            .unwrap_or(false)
    }

    /// Whether the value is an instance of entity type `entity`.
    pub fn is_entity(self: &Self, entity: &str) -> bool {
        self.get_entity_instance(Some(entity)).is_some()
    }

    /// Whether the value is held by the alternative `via`, which is a nested union.
    /// Entity references put through `via` have the path of `via` itself.
    pub fn is_nested(self: &Self, via: &str) -> bool {
        self.with_box(|b| Some(b.type_path().starts_with(&self.expected_path(via))))
            .unwrap_or(false)
    }

    pub fn get_simple<T: Simple>(self: &Self, name: Option<&str>, kind: PayloadKind) -> Option<T> {
        self.with_box(|b| {
            if self.path_matches(b, name) {
                b.get(kind).and_then(|v| T::from_value(&v))
            } else {
                None
            }
        })
    }

    pub fn put_simple<T: Simple>(self: &Self, name: &str, kind: PayloadKind, value: T) {
        let value = value.into_value();
        let value = value.coerce(kind).unwrap_or(value);
        self.put_value(name, value)
    }

    pub fn get_text(self: &Self, name: Option<&str>, kind: PayloadKind) -> Option<Rc<str>> {
        self.with_box(|b| {
            if self.path_matches(b, name) {
                b.get(kind).and_then(|v| v.as_text().cloned())
            } else {
                None
            }
        })
    }

    pub fn put_text(self: &Self, name: &str, kind: PayloadKind, text: &str) {
        let value = match kind {
            PayloadKind::Binary => Value::Binary(text.into()),
            _ => Value::String(text.into()),
        };
        self.put_value(name, value)
    }

    /// Index in `table` of the enumeration name held, `None` if unset or not in the table.
    pub fn get_enumeration(
        self: &Self,
        name: Option<&str>,
        kind: PayloadKind,
        table: &EnumTable,
    ) -> Option<usize> {
        self.with_box(|b| {
            if self.path_matches(b, name) {
                b.get(kind)
                    .and_then(|v| v.as_name().and_then(|n| table.index_of(n)))
            } else {
                None
            }
        })
    }

    /// Puts the name at `index` of `table`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range for `table`.
    pub fn put_enumeration(
        self: &Self,
        name: &str,
        kind: PayloadKind,
        table: &EnumTable,
        index: usize,
    ) {
        self.put_value(name, Value::enumeration(kind, table.name_of(index)))
    }

    pub fn get_enum<E: Enumeration>(self: &Self, name: Option<&str>) -> Option<E> {
        self.get_enumeration(name, E::KIND, &E::TABLE)
            .and_then(E::from_index)
    }

    pub fn put_enum<E: Enumeration>(self: &Self, name: &str, value: E) {
        self.put_enumeration(name, E::KIND, &E::TABLE, value.index())
    }

    /// Referenced instance, if it is of entity type `entity` (any type if `None`).
    pub fn get_entity_instance(self: &Self, entity: Option<&str>) -> Option<Instance> {
        self.with_box(|b| {
            let instance = b.get(PayloadKind::Instance)?.as_instance()?;
            if instance.is_null() {
                return None;
            }
            match entity {
                Some(entity) if !self.store.is_kind_of(instance, entity) => None,
                _ => Some(instance),
            }
        })
    }

    /// Puts a reference to `instance`, which must be of entity type `entity` or null.
    pub fn put_entity_instance(self: &Self, entity: &str, instance: Instance) -> Result<(), PutError> {
        if !instance.is_null() && !self.store.is_kind_of(instance, entity) {
            let actual = self.store.entity_name(instance);
            warn!(%instance, expected = entity, "rejected instance of the wrong entity type");
            return Err(PutError::KindMismatch {
                expected: entity.into(),
                instance,
                actual,
            });
        }
        self.set_box(ValueBox::new(Value::Instance(instance)));
        Ok(())
    }

    pub fn get_aggregate(self: &Self, name: Option<&str>) -> Option<Aggregate> {
        self.with_box(|b| {
            if self.path_matches(b, name) {
                b.get(PayloadKind::Aggregate)
                    .and_then(|v| v.as_aggregate())
                    .filter(|a| !a.is_null())
            } else {
                None
            }
        })
    }

    pub fn put_aggregate(self: &Self, name: &str, aggregate: Aggregate) {
        self.put_value(name, Value::Aggregate(aggregate))
    }

    /// Reads an aggregate alternative into a typed sequence.
    pub fn get_aggregate_as<M: Marshaller<'s>>(
        self: &Self,
        name: Option<&str>,
        marshaller: &M,
    ) -> Option<Vec<M::Elem>> {
        let aggregate = self.get_aggregate(name)?;
        let mut seq = Vec::new();
        marshaller.from_aggregate(&mut seq, self.store, self.instance(), aggregate);
        Some(seq)
    }

    /// Puts a typed sequence as a new aggregate.
    pub fn put_aggregate_from<M: Marshaller<'s>>(
        self: &Self,
        name: &str,
        marshaller: &M,
        seq: &[M::Elem],
    ) {
        let aggregate = marshaller.to_aggregate(seq, self.store, self.instance(), None);
        self.put_aggregate(name, aggregate)
    }

    pub fn as_double(self: &Self) -> Option<f64> {
        self.with_box(|b| b.get(PayloadKind::Real)?.as_f64())
    }

    pub fn as_int(self: &Self) -> Option<i64> {
        self.with_box(|b| b.get(PayloadKind::Integer)?.as_i64())
    }

    pub fn as_bool(self: &Self) -> Option<bool> {
        self.with_box(|b| b.get(PayloadKind::Boolean)?.as_bool())
    }

    pub fn as_text(self: &Self) -> Option<Rc<str>> {
        self.with_box(|b| b.get(PayloadKind::String)?.as_text().cloned())
    }

    pub fn as_instance(self: &Self) -> Option<Instance> {
        self.get_entity_instance(None)
    }

    pub fn test(self: &Self, alternative: &Alternative) -> bool {
        match alternative.category {
            AltCategory::Value => self.is_type(Some(alternative.name)),
            AltCategory::Entity => self.is_entity(alternative.name),
            AltCategory::Select => self.is_nested(alternative.name),
        }
    }

    /// The alternative of `table` currently held, if any.
    pub fn which(self: &Self, table: &SelectTable) -> Option<&'static Alternative> {
        let alternatives: &'static [Alternative] = table.alternatives;
        alternatives.iter().find(|alt| self.test(alt))
    }
}

impl Debug for Select<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.binding {
            Binding::Root {
                instance,
                attr,
                cache,
            } => f
                .debug_struct("Select")
                .field("instance", instance)
                .field("attr", attr)
                .field("cache", &cache.borrow())
                .finish(),
            Binding::Nested { outer, via } => f
                .debug_struct("Select")
                .field("outer", outer)
                .field("via", via)
                .finish(),
        }
    }
}

//! Access to plain (non-union) attributes of an instance.

use std::cmp::Ordering;
use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use tracing::warn;

use crate::aggr::Marshaller;
use crate::enumeration::*;
use crate::error::PutError;
use crate::select::Select;
use crate::simple::Simple;
use crate::store::*;
use crate::value::*;

/// An instance of the store, together with the store itself.
#[derive(Clone, Copy)]
pub struct Entity<'s> {
    store: &'s dyn Store,
    instance: Instance,
}

impl<'s> Entity<'s> {
    pub fn new(store: &'s dyn Store, instance: Instance) -> Entity<'s> {
        Entity { store, instance }
    }

    /// Wraps `instance` if it is of entity type `entity`, the null instance otherwise.
    pub fn cast(store: &'s dyn Store, instance: Instance, entity: &str) -> Entity<'s> {
        let instance = if !instance.is_null() && store.is_kind_of(instance, entity) {
            instance
        } else {
            Instance::NULL
        };
        Entity { store, instance }
    }

    pub fn store(self: &Self) -> &'s dyn Store {
        self.store
    }

    pub fn instance(self: &Self) -> Instance {
        self.instance
    }

    pub fn is_null(self: &Self) -> bool {
        self.instance.is_null()
    }

    pub fn entity_name(self: &Self) -> Option<Rc<str>> {
        self.store.entity_name(self.instance)
    }

    pub fn is_kind_of(self: &Self, entity: &str) -> bool {
        !self.is_null() && self.store.is_kind_of(self.instance, entity)
    }

    pub fn get_simple<T: Simple>(self: &Self, attr: &str, kind: PayloadKind) -> Option<T> {
        self.store
            .attr_value(self.instance, attr, kind)
            .and_then(|v| T::from_value(&v))
    }

    pub fn put_simple<T: Simple>(self: &Self, attr: &str, kind: PayloadKind, value: T) {
        let value = value.into_value();
        let value = value.coerce(kind).unwrap_or(value);
        self.store.put_attr_value(self.instance, attr, value)
    }

    pub fn get_text(self: &Self, attr: &str, kind: PayloadKind) -> Option<Rc<str>> {
        self.store
            .attr_value(self.instance, attr, kind)
            .and_then(|v| v.as_text().cloned())
    }

    pub fn put_text(self: &Self, attr: &str, kind: PayloadKind, text: &str) {
        let value = match kind {
            PayloadKind::Binary => Value::Binary(text.into()),
            _ => Value::String(text.into()),
        };
        self.store.put_attr_value(self.instance, attr, value)
    }

    pub fn get_enumeration(
        self: &Self,
        attr: &str,
        kind: PayloadKind,
        table: &EnumTable,
    ) -> Option<usize> {
        let value = self.store.attr_value(self.instance, attr, kind)?;
        table.index_of(value.as_name()?)
    }

    pub fn get_enum<E: Enumeration>(self: &Self, attr: &str) -> Option<E> {
        self.get_enumeration(attr, E::KIND, &E::TABLE)
            .and_then(E::from_index)
    }

    pub fn put_enum<E: Enumeration>(self: &Self, attr: &str, value: E) {
        self.store
            .put_attr_value(self.instance, attr, Value::enumeration(E::KIND, value.name()))
    }

    /// Referenced instance, if it is of entity type `entity` (any type if `None`).
    pub fn get_instance(self: &Self, attr: &str, entity: Option<&str>) -> Option<Instance> {
        let instance = self
            .store
            .attr_value(self.instance, attr, PayloadKind::Instance)?
            .as_instance()?;
        if instance.is_null() {
            return None;
        }
        match entity {
            Some(entity) if !self.store.is_kind_of(instance, entity) => None,
            _ => Some(instance),
        }
    }

    /// Puts a reference to `instance`, which must be of entity type `entity` or null.
    pub fn put_instance(
        self: &Self,
        attr: &str,
        entity: &str,
        instance: Instance,
    ) -> Result<(), PutError> {
        if !instance.is_null() && !self.store.is_kind_of(instance, entity) {
            warn!(
                owner = %self.instance,
                attr,
                %instance,
                expected = entity,
                "rejected instance of the wrong entity type"
            );
            return Err(PutError::KindMismatch {
                expected: entity.into(),
                instance,
                actual: self.store.entity_name(instance),
            });
        }
        self.store
            .put_attr_value(self.instance, attr, Value::Instance(instance));
        Ok(())
    }

    pub fn get_list<M: Marshaller<'s>>(self: &Self, attr: &str, marshaller: &M) -> Vec<M::Elem> {
        marshaller.from_attr(self.store, self.instance, attr)
    }

    pub fn put_list<M: Marshaller<'s>>(
        self: &Self,
        attr: &str,
        marshaller: &M,
        seq: &[M::Elem],
    ) -> Aggregate {
        marshaller.to_aggregate(seq, self.store, self.instance, Some(attr))
    }

    /// Union-typed attribute `attr`.
    pub fn select(self: &Self, attr: &str) -> Select<'s> {
        Select::new(self.store, self.instance, attr)
    }

    /// Makes `attr` unset.
    pub fn clear(self: &Self, attr: &str) {
        self.store.clear_attr(self.instance, attr)
    }
}

impl From<Entity<'_>> for Instance {
    fn from(entity: Entity<'_>) -> Self {
        entity.instance
    }
}

/// Entities compare, order and hash by instance only.
impl PartialEq for Entity<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.instance == other.instance
    }
}

impl Eq for Entity<'_> {}

impl Hash for Entity<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.instance.hash(state)
    }
}

impl PartialOrd for Entity<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entity<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.instance.cmp(&other.instance)
    }
}

impl Debug for Entity<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entity")
            .field("instance", &self.instance)
            .field("entity", &self.entity_name())
            .finish()
    }
}

//! Primitive interface to the object store.
//!
//! The store owns instances and aggregates and knows the runtime entity type of each instance.
//! Everything else in this crate is built on top of the operations of [`Store`].

use std::fmt::{Display, Formatter};
use std::rc::Rc;

use crate::value::*;

/// Opaque identifier of one object in the store.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Instance(pub u64);

impl Instance {
    /// The instance naming no object.
    pub const NULL: Instance = Instance(0);

    pub fn is_null(self: Self) -> bool {
        self == Self::NULL
    }
}

impl Display for Instance {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Opaque identifier of an ordered collection in the store.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Aggregate(pub u64);

impl Aggregate {
    pub const NULL: Aggregate = Aggregate(0);

    pub fn is_null(self: Self) -> bool {
        self == Self::NULL
    }
}

/// Operations the typed layer requires from the store.
///
/// All operations take `&self`: the store is a handle to an engine that is used from one thread,
/// one call at a time.
/// Getters return `None` when the value is unset or cannot be represented with the requested kind
/// (see [`Value::coerce`]).
pub trait Store {
    fn create_instance(self: &Self, entity: &str) -> Instance;

    /// Name of the runtime entity type of `instance`, `None` for unknown or null instances.
    fn entity_name(self: &Self, instance: Instance) -> Option<Rc<str>>;

    /// Whether `instance` is of entity type `entity` or one of its subtypes.
    fn is_kind_of(self: &Self, instance: Instance, entity: &str) -> bool;

    fn attr_value(self: &Self, instance: Instance, attr: &str, kind: PayloadKind) -> Option<Value>;
    fn put_attr_value(self: &Self, instance: Instance, attr: &str, value: Value);
    fn clear_attr(self: &Self, instance: Instance, attr: &str);

    /// Creates an empty aggregate owned by `instance`.
    /// When `attr` is given, the new aggregate also becomes the value of that attribute.
    fn create_aggregate(self: &Self, instance: Instance, attr: Option<&str>) -> Aggregate;
    fn append_member(self: &Self, aggregate: Aggregate, value: Value);
    fn member_count(self: &Self, aggregate: Aggregate) -> usize;
    fn member(self: &Self, aggregate: Aggregate, index: usize, kind: PayloadKind) -> Option<Value>;
}

//! Typed access to attributes of instances living in a dynamically typed EXPRESS object store.
//!
//! The store is reached only through the primitives of [`Store`].
//! On top of them, [`Entity`] reads and writes plain attributes, [`Select`] reads and writes
//! union (SELECT) typed values, possibly through nested unions, and the marshallers of [`aggr`]
//! convert aggregates to and from typed sequences.
//! Typed wrappers for a schema are produced by [`gen`], from a schema description loaded by
//! [`schema`].

pub mod aggr;
pub mod entity;
pub mod enumeration;
pub mod error;
pub mod gen;
pub mod mem_store;
pub mod schema;
pub mod select;
pub mod simple;
pub mod store;
pub mod value;

pub use entity::Entity;
pub use error::PutError;
pub use mem_store::MemStore;
pub use select::Select;
pub use store::{Aggregate, Instance, Store};

/// Everything generated wrappers refer to.
pub mod prelude {
    pub use crate::aggr::*;
    pub use crate::entity::Entity;
    pub use crate::enumeration::{EnumTable, Enumeration, Logical};
    pub use crate::error::PutError;
    pub use crate::select::{AltCategory, Alternative, Select, SelectTable, SelectWrapper};
    pub use crate::store::{Aggregate, Instance, Store};
    pub use crate::value::{PayloadKind, TypePath, Value, ValueBox};
}

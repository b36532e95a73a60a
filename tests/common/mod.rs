//! Wrappers for `schemas/ifc4_subset.exp`, as written by
//! `sdai-typed gen --schema-file schemas/ifc4_subset.exp --output tests/common/ifc.rs`.

#![allow(dead_code)]

pub mod ifc;

use std::path::PathBuf;

use sdai_typed::schema::{load_schema, Schema};
use sdai_typed::MemStore;

pub fn schema_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("schemas/ifc4_subset.exp")
}

pub fn schema() -> Schema {
    match load_schema(&schema_path(), false) {
        Ok(schema) => schema,
        Err(e) => panic!("{}", e),
    }
}

/// An empty store knowing the entity types of the sample schema.
pub fn store() -> MemStore {
    MemStore::from_schema(&schema())
}

//! In-memory implementation of [`Store`].
//!
//! Keeps instances, attributes and aggregates in plain collections and knows the supertypes of
//! each entity type, to answer kind-of queries.
//! It performs no other schema validation.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use tracing::trace;

use crate::schema::Schema;
use crate::store::*;
use crate::value::*;

#[derive(Debug, Default)]
pub struct MemStore {
    inner: RefCell<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    entities: HashMap<String, EntityInfo>,
    instances: Vec<InstanceData>,
    aggregates: Vec<AggregateData>,
}

#[derive(Debug)]
struct EntityInfo {
    name: Rc<str>,
    supertypes: Vec<String>,
}

#[derive(Debug)]
struct InstanceData {
    entity: String,
    attrs: HashMap<String, Value>,
}

#[derive(Debug)]
struct AggregateData {
    owner: Instance,
    members: Vec<Value>,
}

fn key(name: &str) -> String {
    name.to_ascii_uppercase()
}

impl MemStore {
    pub fn new() -> MemStore {
        Self::default()
    }

    /// A store knowing the entity types of `schema` and their supertypes.
    pub fn from_schema(schema: &Schema) -> MemStore {
        let store = Self::new();
        for entity in schema.entities.iter() {
            let supertypes: Vec<String> = entity.supertypes.iter().map(|s| s.to_string()).collect();
            store.declare_entity(
                &entity.name.to_string(),
                &supertypes.iter().map(|s| s.as_str()).collect::<Vec<_>>(),
            );
        }
        store
    }

    /// Declares (or redeclares) an entity type with its direct supertypes.
    pub fn declare_entity(self: &Self, name: &str, supertypes: &[&str]) {
        self.inner.borrow_mut().entities.insert(
            key(name),
            EntityInfo {
                name: name.into(),
                supertypes: supertypes.iter().map(|s| key(s)).collect(),
            },
        );
    }

    pub fn instance_count(self: &Self) -> usize {
        self.inner.borrow().instances.len()
    }

    /// Instance owning `aggregate`.
    pub fn aggregate_owner(self: &Self, aggregate: Aggregate) -> Option<Instance> {
        let inner = self.inner.borrow();
        inner.aggregate(aggregate).map(|data| data.owner)
    }
}

impl Inner {
    fn instance(self: &Self, instance: Instance) -> Option<&InstanceData> {
        if instance.is_null() {
            return None;
        }
        self.instances.get(instance.0 as usize - 1)
    }

    fn instance_mut(self: &mut Self, instance: Instance) -> Option<&mut InstanceData> {
        if instance.is_null() {
            return None;
        }
        self.instances.get_mut(instance.0 as usize - 1)
    }

    fn aggregate(self: &Self, aggregate: Aggregate) -> Option<&AggregateData> {
        if aggregate.is_null() {
            return None;
        }
        self.aggregates.get(aggregate.0 as usize - 1)
    }

    fn aggregate_mut(self: &mut Self, aggregate: Aggregate) -> Option<&mut AggregateData> {
        if aggregate.is_null() {
            return None;
        }
        self.aggregates.get_mut(aggregate.0 as usize - 1)
    }

    fn is_subtype(self: &Self, entity: &str, target: &str) -> bool {
        let mut pending = vec![entity];
        let mut seen = Vec::new();
        while let Some(current) = pending.pop() {
            if current == target {
                return true;
            }
            if seen.contains(&current) {
                continue;
            }
            seen.push(current);
            if let Some(info) = self.entities.get(current) {
                pending.extend(info.supertypes.iter().map(|s| s.as_str()));
            }
        }
        false
    }

    fn put_attr(self: &mut Self, instance: Instance, attr: &str, value: Option<Value>) {
        match self.instance_mut(instance) {
            Some(data) => {
                trace!(%instance, attr, value = ?value, "attribute written");
                match value {
                    Some(value) => data.attrs.insert(attr.to_owned(), value),
                    None => data.attrs.remove(attr),
                };
            }
            None => trace!(%instance, attr, "write to unknown instance ignored"),
        }
    }
}

impl Store for MemStore {
    fn create_instance(self: &Self, entity: &str) -> Instance {
        let mut inner = self.inner.borrow_mut();
        let entity = key(entity);
        inner.instances.push(InstanceData {
            entity,
            attrs: HashMap::new(),
        });
        Instance(inner.instances.len() as u64)
    }

    fn entity_name(self: &Self, instance: Instance) -> Option<Rc<str>> {
        let inner = self.inner.borrow();
        let data = inner.instance(instance)?;
        Some(match inner.entities.get(&data.entity) {
            Some(info) => info.name.clone(),
            None => data.entity.as_str().into(),
        })
    }

    fn is_kind_of(self: &Self, instance: Instance, entity: &str) -> bool {
        let inner = self.inner.borrow();
        match inner.instance(instance) {
            Some(data) => inner.is_subtype(&data.entity, &key(entity)),
            None => false,
        }
    }

    fn attr_value(self: &Self, instance: Instance, attr: &str, kind: PayloadKind) -> Option<Value> {
        let inner = self.inner.borrow();
        inner.instance(instance)?.attrs.get(attr)?.coerce(kind)
    }

    fn put_attr_value(self: &Self, instance: Instance, attr: &str, value: Value) {
        self.inner
            .borrow_mut()
            .put_attr(instance, attr, Some(value))
    }

    fn clear_attr(self: &Self, instance: Instance, attr: &str) {
        self.inner.borrow_mut().put_attr(instance, attr, None)
    }

    fn create_aggregate(self: &Self, instance: Instance, attr: Option<&str>) -> Aggregate {
        let mut inner = self.inner.borrow_mut();
        inner.aggregates.push(AggregateData {
            owner: instance,
            members: Vec::new(),
        });
        let aggregate = Aggregate(inner.aggregates.len() as u64);
        if let Some(attr) = attr {
            inner.put_attr(instance, attr, Some(Value::Aggregate(aggregate)));
        }
        aggregate
    }

    fn append_member(self: &Self, aggregate: Aggregate, value: Value) {
        match self.inner.borrow_mut().aggregate_mut(aggregate) {
            Some(data) => data.members.push(value),
            None => trace!(aggregate = aggregate.0, "append to unknown aggregate ignored"),
        }
    }

    fn member_count(self: &Self, aggregate: Aggregate) -> usize {
        self.inner
            .borrow()
            .aggregate(aggregate)
            .map_or(0, |data| data.members.len())
    }

    fn member(self: &Self, aggregate: Aggregate, index: usize, kind: PayloadKind) -> Option<Value> {
        let inner = self.inner.borrow();
        inner.aggregate(aggregate)?.members.get(index)?.coerce(kind)
    }
}

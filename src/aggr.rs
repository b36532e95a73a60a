//! Conversion between store aggregates and typed sequences.
//!
//! A [`Marshaller`] knows how to read and append one member of an aggregate.
//! Reading and writing whole aggregates is provided on top of that, preserving member order.
//! There is one marshaller for each category of element:
//! scalars, text, instance references, enumerations, nested aggregates and unions.

use std::marker::PhantomData;
use std::rc::Rc;

use crate::enumeration::Enumeration;
use crate::select::*;
use crate::simple::Simple;
use crate::store::*;
use crate::value::*;

pub trait Marshaller<'s> {
    type Elem;

    /// Reads the member at `index`, `None` if it must be skipped.
    fn member(
        self: &Self,
        store: &'s dyn Store,
        instance: Instance,
        aggregate: Aggregate,
        index: usize,
    ) -> Option<Self::Elem>;

    fn append(
        self: &Self,
        store: &'s dyn Store,
        instance: Instance,
        aggregate: Aggregate,
        elem: &Self::Elem,
    );

    /// Appends the members of `aggregate` to `seq`, in order.
    /// `seq` is not cleared first.
    fn from_aggregate(
        self: &Self,
        seq: &mut Vec<Self::Elem>,
        store: &'s dyn Store,
        instance: Instance,
        aggregate: Aggregate,
    ) {
        for index in 0..store.member_count(aggregate) {
            if let Some(elem) = self.member(store, instance, aggregate, index) {
                seq.push(elem);
            }
        }
    }

    /// Creates a new aggregate with the elements of `seq`, in order.
    /// If `attr` is given, the aggregate is put as that attribute of `instance`.
    fn to_aggregate(
        self: &Self,
        seq: &[Self::Elem],
        store: &'s dyn Store,
        instance: Instance,
        attr: Option<&str>,
    ) -> Aggregate {
        let aggregate = store.create_aggregate(instance, attr);
        for elem in seq {
            self.append(store, instance, aggregate, elem);
        }
        aggregate
    }

    /// Reads the aggregate attribute `attr` of `instance`; empty if unset.
    fn from_attr(
        self: &Self,
        store: &'s dyn Store,
        instance: Instance,
        attr: &str,
    ) -> Vec<Self::Elem> {
        let mut seq = Vec::new();
        if let Some(aggregate) = store
            .attr_value(instance, attr, PayloadKind::Aggregate)
            .and_then(|v| v.as_aggregate())
        {
            self.from_aggregate(&mut seq, store, instance, aggregate);
        }
        seq
    }
}

/// Numeric and boolean elements
#[derive(Debug, Clone, Copy)]
pub struct ScalarMarshaller<T> {
    kind: PayloadKind,
    elem: PhantomData<T>,
}

impl<T: Simple> ScalarMarshaller<T> {
    pub fn new() -> Self {
        Self::with_kind(T::KIND)
    }

    pub fn with_kind(kind: PayloadKind) -> Self {
        ScalarMarshaller {
            kind,
            elem: PhantomData,
        }
    }
}

impl<T: Simple> Default for ScalarMarshaller<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'s, T: Simple> Marshaller<'s> for ScalarMarshaller<T> {
    type Elem = T;

    fn member(
        self: &Self,
        store: &'s dyn Store,
        _instance: Instance,
        aggregate: Aggregate,
        index: usize,
    ) -> Option<T> {
        store
            .member(aggregate, index, self.kind)
            .and_then(|v| T::from_value(&v))
    }

    fn append(self: &Self, store: &'s dyn Store, _instance: Instance, aggregate: Aggregate, elem: &T) {
        let value = elem.into_value();
        store.append_member(aggregate, value.coerce(self.kind).unwrap_or(value));
    }
}

/// String or binary elements
#[derive(Debug, Clone, Copy)]
pub struct TextMarshaller {
    kind: PayloadKind,
}

impl TextMarshaller {
    pub fn new(kind: PayloadKind) -> Self {
        debug_assert!(kind == PayloadKind::String || kind == PayloadKind::Binary);
        TextMarshaller { kind }
    }
}

impl<'s> Marshaller<'s> for TextMarshaller {
    type Elem = Rc<str>;

    fn member(
        self: &Self,
        store: &'s dyn Store,
        _instance: Instance,
        aggregate: Aggregate,
        index: usize,
    ) -> Option<Rc<str>> {
        store
            .member(aggregate, index, self.kind)
            .and_then(|v| v.as_text().cloned())
    }

    fn append(
        self: &Self,
        store: &'s dyn Store,
        _instance: Instance,
        aggregate: Aggregate,
        elem: &Rc<str>,
    ) {
        let value = match self.kind {
            PayloadKind::Binary => Value::Binary(elem.clone()),
            _ => Value::String(elem.clone()),
        };
        store.append_member(aggregate, value);
    }
}

/// Entity instance elements.
/// On read, null instances and instances not of the expected entity type are skipped.
#[derive(Debug, Clone, Copy)]
pub struct InstanceMarshaller {
    entity: Option<&'static str>,
}

impl InstanceMarshaller {
    pub fn new(entity: Option<&'static str>) -> Self {
        InstanceMarshaller { entity }
    }
}

impl<'s> Marshaller<'s> for InstanceMarshaller {
    type Elem = Instance;

    fn member(
        self: &Self,
        store: &'s dyn Store,
        _instance: Instance,
        aggregate: Aggregate,
        index: usize,
    ) -> Option<Instance> {
        let member = store
            .member(aggregate, index, PayloadKind::Instance)?
            .as_instance()?;
        if member.is_null() {
            return None;
        }
        match self.entity {
            Some(entity) if !store.is_kind_of(member, entity) => None,
            _ => Some(member),
        }
    }

    fn append(
        self: &Self,
        store: &'s dyn Store,
        _instance: Instance,
        aggregate: Aggregate,
        elem: &Instance,
    ) {
        store.append_member(aggregate, Value::Instance(*elem));
    }
}

/// Enumeration or logical elements. Names missing from the table are skipped on read.
#[derive(Debug, Clone, Copy)]
pub struct EnumMarshaller<E> {
    elem: PhantomData<E>,
}

impl<E: Enumeration> EnumMarshaller<E> {
    pub fn new() -> Self {
        EnumMarshaller { elem: PhantomData }
    }
}

impl<E: Enumeration> Default for EnumMarshaller<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'s, E: Enumeration> Marshaller<'s> for EnumMarshaller<E> {
    type Elem = E;

    fn member(
        self: &Self,
        store: &'s dyn Store,
        _instance: Instance,
        aggregate: Aggregate,
        index: usize,
    ) -> Option<E> {
        let value = store.member(aggregate, index, E::KIND)?;
        E::from_name(value.as_name()?)
    }

    fn append(self: &Self, store: &'s dyn Store, _instance: Instance, aggregate: Aggregate, elem: &E) {
        store.append_member(aggregate, Value::enumeration(E::KIND, elem.name()));
    }
}

/// Elements that are aggregates themselves, converted by the inner marshaller.
#[derive(Debug, Clone, Copy, Default)]
pub struct NestedMarshaller<M> {
    inner: M,
}

impl<M> NestedMarshaller<M> {
    pub fn new(inner: M) -> Self {
        NestedMarshaller { inner }
    }
}

impl<'s, M: Marshaller<'s>> Marshaller<'s> for NestedMarshaller<M> {
    type Elem = Vec<M::Elem>;

    fn member(
        self: &Self,
        store: &'s dyn Store,
        instance: Instance,
        aggregate: Aggregate,
        index: usize,
    ) -> Option<Vec<M::Elem>> {
        let nested = store
            .member(aggregate, index, PayloadKind::Aggregate)?
            .as_aggregate()?;
        if nested.is_null() {
            return None;
        }
        let mut seq = Vec::new();
        self.inner.from_aggregate(&mut seq, store, instance, nested);
        Some(seq)
    }

    fn append(
        self: &Self,
        store: &'s dyn Store,
        instance: Instance,
        aggregate: Aggregate,
        elem: &Vec<M::Elem>,
    ) {
        let nested = self.inner.to_aggregate(elem, store, instance, None);
        store.append_member(aggregate, Value::Aggregate(nested));
    }
}

/// Union elements, each read as a [`Select`] bound to the member's value box.
/// Elements holding no value are skipped on write.
#[derive(Debug, Clone, Copy)]
pub struct SelectMarshaller<W> {
    elem: PhantomData<W>,
}

impl<W> SelectMarshaller<W> {
    pub fn new() -> Self {
        SelectMarshaller { elem: PhantomData }
    }
}

impl<W> Default for SelectMarshaller<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'s, W: SelectWrapper<'s>> Marshaller<'s> for SelectMarshaller<W> {
    type Elem = W;

    fn member(
        self: &Self,
        store: &'s dyn Store,
        instance: Instance,
        aggregate: Aggregate,
        index: usize,
    ) -> Option<W> {
        let value_box = store
            .member(aggregate, index, PayloadKind::Box)?
            .into_box()?;
        Some(W::wrap(Select::with_value_box(store, instance, value_box)))
    }

    fn append(self: &Self, store: &'s dyn Store, _instance: Instance, aggregate: Aggregate, elem: &W) {
        if let Some(value_box) = elem.select().value_box() {
            store.append_member(aggregate, Value::Boxed(Box::new(value_box)));
        }
    }
}

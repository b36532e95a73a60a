//! Runtime-tagged values and value boxes.

use std::fmt::{Display, Formatter};
use std::rc::Rc;

use num_traits::ToPrimitive;

use crate::enumeration::*;
use crate::store::*;

/// Storage category of a value
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum PayloadKind {
    Boolean,
    /// Three-valued logical, stored by name (`F`, `T`, `U`)
    Logical,
    Integer,
    Real,
    String,
    /// Binary data, encoded as text
    Binary,
    /// Enumeration value, stored by name
    Enumeration,
    Instance,
    Aggregate,
    /// A value box, carrying its own type path
    Box,
}

impl PayloadKind {
    pub fn name(self: Self) -> &'static str {
        match self {
            PayloadKind::Boolean => "boolean",
            PayloadKind::Logical => "logical",
            PayloadKind::Integer => "integer",
            PayloadKind::Real => "real",
            PayloadKind::String => "string",
            PayloadKind::Binary => "binary",
            PayloadKind::Enumeration => "enumeration",
            PayloadKind::Instance => "instance",
            PayloadKind::Aggregate => "aggregate",
            PayloadKind::Box => "box",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Boolean(bool),
    Logical(Logical),
    Integer(i64),
    Real(f64),
    String(Rc<str>),
    Binary(Rc<str>),
    Enumeration(Rc<str>),
    Instance(Instance),
    Aggregate(Aggregate),
    Boxed(Box<ValueBox>),
}

impl Value {
    /// Enumeration-like value with the given name.
    /// With `PayloadKind::Logical`, a valid logical name gives a `Value::Logical`.
    pub fn enumeration(kind: PayloadKind, name: &str) -> Value {
        match kind {
            PayloadKind::Logical => match Logical::from_name(name) {
                Some(logical) => Value::Logical(logical),
                None => Value::Enumeration(name.into()),
            },
            _ => Value::Enumeration(name.into()),
        }
    }

    pub fn kind(self: &Self) -> PayloadKind {
        match self {
            Value::Boolean(_) => PayloadKind::Boolean,
            Value::Logical(_) => PayloadKind::Logical,
            Value::Integer(_) => PayloadKind::Integer,
            Value::Real(_) => PayloadKind::Real,
            Value::String(_) => PayloadKind::String,
            Value::Binary(_) => PayloadKind::Binary,
            Value::Enumeration(_) => PayloadKind::Enumeration,
            Value::Instance(_) => PayloadKind::Instance,
            Value::Aggregate(_) => PayloadKind::Aggregate,
            Value::Boxed(_) => PayloadKind::Box,
        }
    }

    /// Represents this value with the given payload kind, if possible.
    ///
    /// Integers widen to reals, and integral reals narrow to integers.
    /// Strings and binaries are interchangeable, and numbers and enumeration names render as
    /// strings.
    /// Booleans convert to logicals, and logicals other than `U` to booleans.
    /// A box is looked through for every kind except `Box`, and any other value is put into
    /// a box with an empty type path when a box is requested.
    pub fn coerce(self: &Self, kind: PayloadKind) -> Option<Value> {
        match (self, kind) {
            (Value::Boxed(_), PayloadKind::Box) => Some(self.clone()),
            (Value::Boxed(inner), _) => inner.get(kind),
            (_, PayloadKind::Box) => Some(Value::Boxed(Box::new(ValueBox::new(self.clone())))),
            (value, kind) if value.kind() == kind => Some(value.clone()),
            (Value::Integer(i), PayloadKind::Real) => i.to_f64().map(Value::Real),
            (Value::Real(r), PayloadKind::Integer) if r.fract() == 0.0 => {
                r.to_i64().map(Value::Integer)
            }
            (Value::String(s), PayloadKind::Binary) => Some(Value::Binary(s.clone())),
            (Value::Binary(s), PayloadKind::String) => Some(Value::String(s.clone())),
            (Value::Integer(i), PayloadKind::String) => Some(Value::String(i.to_string().into())),
            (Value::Real(r), PayloadKind::String) => Some(Value::String(r.to_string().into())),
            (Value::Enumeration(e), PayloadKind::String) => Some(Value::String(e.clone())),
            (Value::Logical(l), PayloadKind::String) => Some(Value::String(l.name().into())),
            (Value::Boolean(b), PayloadKind::Logical) => Some(Value::Logical(Logical::from(*b))),
            (Value::Logical(l), PayloadKind::Boolean) => l.to_bool().map(Value::Boolean),
            _ => None,
        }
    }

    pub fn as_bool(self: &Self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(self: &Self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(self: &Self) -> Option<f64> {
        match self {
            Value::Real(r) => Some(*r),
            _ => None,
        }
    }

    pub fn as_text(self: &Self) -> Option<&Rc<str>> {
        match self {
            Value::String(s) | Value::Binary(s) => Some(s),
            _ => None,
        }
    }

    /// Name of an enumeration or logical value.
    pub fn as_name(self: &Self) -> Option<&str> {
        match self {
            Value::Enumeration(name) => Some(name),
            Value::Logical(logical) => Some(logical.name()),
            _ => None,
        }
    }

    pub fn as_instance(self: &Self) -> Option<Instance> {
        match self {
            Value::Instance(instance) => Some(*instance),
            _ => None,
        }
    }

    pub fn as_aggregate(self: &Self) -> Option<Aggregate> {
        match self {
            Value::Aggregate(aggregate) => Some(*aggregate),
            _ => None,
        }
    }

    pub fn into_box(self: Self) -> Option<ValueBox> {
        match self {
            Value::Boxed(b) => Some(*b),
            _ => None,
        }
    }
}

/// Chain of declared type names, outer to inner, telling which alternative a box holds.
///
/// Names are case-insensitive and kept in upper case.
#[derive(Debug, Clone, Hash, PartialEq, Eq, Default)]
pub struct TypePath(Vec<Rc<str>>);

impl TypePath {
    pub fn new() -> TypePath {
        TypePath(Vec::new())
    }

    pub fn leaf(name: &str) -> TypePath {
        TypePath(vec![name.to_ascii_uppercase().into()])
    }

    /// Parses a dotted path such as `IFCSIMPLEVALUE.IFCINTEGER`.
    pub fn parse(dotted: &str) -> TypePath {
        TypePath(
            dotted
                .split('.')
                .filter(|name| !name.is_empty())
                .map(|name| name.to_ascii_uppercase().into())
                .collect(),
        )
    }

    pub fn depth(self: &Self) -> usize {
        self.0.len()
    }

    pub fn is_empty(self: &Self) -> bool {
        self.0.is_empty()
    }

    pub fn names(self: &Self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|name| name.as_ref())
    }

    pub fn push(self: &mut Self, name: &str) {
        self.0.push(name.to_ascii_uppercase().into())
    }

    pub fn push_front(self: &mut Self, name: &str) {
        self.0.insert(0, name.to_ascii_uppercase().into())
    }

    /// Whether `prefix` is a proper prefix of this path.
    pub fn extends(self: &Self, prefix: &TypePath) -> bool {
        self.0.len() > prefix.0.len() && self.starts_with(prefix)
    }

    pub fn starts_with(self: &Self, prefix: &TypePath) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl Display for TypePath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for name in self.0.iter() {
            if !first {
                f.write_str(".")?;
            }
            f.write_str(name)?;
            first = false;
        }
        Ok(())
    }
}

/// A value cell tagged with the type path of the union alternative it holds.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueBox {
    path: TypePath,
    value: Value,
}

impl ValueBox {
    /// Creates a box with an empty type path.
    pub fn new(value: Value) -> ValueBox {
        ValueBox {
            path: TypePath::new(),
            value,
        }
    }

    pub fn typed(path: TypePath, value: Value) -> ValueBox {
        ValueBox { path, value }
    }

    pub fn type_path(self: &Self) -> &TypePath {
        &self.path
    }

    pub fn set_type_path(self: &mut Self, path: TypePath) {
        self.path = path;
    }

    pub fn value(self: &Self) -> &Value {
        &self.value
    }

    /// Payload as the given kind, `None` if not representable.
    pub fn get(self: &Self, kind: PayloadKind) -> Option<Value> {
        self.value.coerce(kind)
    }
}

//! Scalar types that can be read from and written to numeric or boolean payloads.

use std::fmt::Debug;

use num_traits::NumCast;

use crate::value::*;

/// A Rust scalar type usable with `get_simple`/`put_simple`.
pub trait Simple: Copy + Debug {
    /// Payload kind used when none is specified
    const KIND: PayloadKind;

    fn from_value(value: &Value) -> Option<Self>;
    fn into_value(self: Self) -> Value;
}

impl Simple for bool {
    const KIND: PayloadKind = PayloadKind::Boolean;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Boolean(b) => Some(*b),
            Value::Logical(l) => l.to_bool(),
            _ => None,
        }
    }

    fn into_value(self: Self) -> Value {
        Value::Boolean(self)
    }
}

macro_rules! simple_integer {
    ($($t:ty),*) => {
        $(
            impl Simple for $t {
                const KIND: PayloadKind = PayloadKind::Integer;

                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        Value::Integer(i) => <$t as NumCast>::from(*i),
                        _ => None,
                    }
                }

                fn into_value(self: Self) -> Value {
                    Value::Integer(<i64 as From<$t>>::from(self))
                }
            }
        )*
    };
}

simple_integer!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! simple_real {
    ($($t:ty),*) => {
        $(
            impl Simple for $t {
                const KIND: PayloadKind = PayloadKind::Real;

                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        Value::Real(r) => <$t as NumCast>::from(*r),
                        Value::Integer(i) => <$t as NumCast>::from(*i),
                        _ => None,
                    }
                }

                fn into_value(self: Self) -> Value {
                    Value::Real(<f64 as From<$t>>::from(self))
                }
            }
        )*
    };
}

simple_real!(f32, f64);

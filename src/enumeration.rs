//! Mapping between enumeration names and indices.

use crate::value::PayloadKind;

/// Ordered table of the names of an enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumTable {
    names: &'static [&'static str],
}

impl EnumTable {
    pub const fn new(names: &'static [&'static str]) -> EnumTable {
        EnumTable { names }
    }

    /// Index of the first name equal to `name`, ignoring ASCII case.
    pub fn index_of(self: &Self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n.eq_ignore_ascii_case(name))
    }

    /// Name at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn name_of(self: &Self, index: usize) -> &'static str {
        self.names[index]
    }

    pub fn len(self: &Self) -> usize {
        self.names.len()
    }

    pub fn is_empty(self: &Self) -> bool {
        self.names.is_empty()
    }

    pub fn names(self: &Self) -> &'static [&'static str] {
        self.names
    }
}

/// A Rust enum standing for an enumeration of the schema.
pub trait Enumeration: Copy + Sized {
    const TABLE: EnumTable;
    const KIND: PayloadKind = PayloadKind::Enumeration;

    fn from_index(index: usize) -> Option<Self>;
    fn index(self: Self) -> usize;

    fn name(self: Self) -> &'static str {
        Self::TABLE.name_of(self.index())
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::TABLE.index_of(name).and_then(Self::from_index)
    }
}

/// Three-valued logical
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Logical {
    False,
    True,
    Unknown,
}

impl Logical {
    pub fn to_bool(self: Self) -> Option<bool> {
        match self {
            Logical::False => Some(false),
            Logical::True => Some(true),
            Logical::Unknown => None,
        }
    }
}

impl From<bool> for Logical {
    fn from(b: bool) -> Self {
        if b {
            Logical::True
        } else {
            Logical::False
        }
    }
}

impl Enumeration for Logical {
    const TABLE: EnumTable = EnumTable::new(&["F", "T", "U"]);
    const KIND: PayloadKind = PayloadKind::Logical;

    fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Logical::False),
            1 => Some(Logical::True),
            2 => Some(Logical::Unknown),
            _ => None,
        }
    }

    fn index(self: Self) -> usize {
        self as usize
    }
}

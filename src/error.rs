use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

use crate::store::Instance;

/// Rejected write through the typed layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PutError {
    /// The instance is not of the entity type the attribute or alternative requires.
    KindMismatch {
        expected: Rc<str>,
        instance: Instance,
        actual: Option<Rc<str>>,
    },
}

impl Display for PutError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            PutError::KindMismatch {
                expected,
                instance,
                actual: Some(actual),
            } => write!(
                f,
                "instance {} of type `{}` is not a `{}`",
                instance, actual, expected
            ),
            PutError::KindMismatch {
                expected,
                instance,
                actual: None,
            } => write!(f, "unknown instance {} is not a `{}`", instance, expected),
        }
    }
}

impl Error for PutError {}

use std::rc::Rc;

use super::def::*;
use super::sess::Sess;

#[derive(Debug, Clone)]
pub enum Diagnostic {
    ParseError {
        error: syn::parse::Error,
    },
    ReservedName {
        name: Rc<Name>,
    },
    AlreadyDefined {
        what: &'static str,
        old: Rc<Name>,
        new: Rc<Name>,
    },
    UndefName {
        name: Rc<Name>,
    },
    AlternativeNotNamed {
        name: Rc<Name>,
    },
    SupertypeNotEntity {
        name: Rc<Name>,
        found: Rc<Name>,
    },
    UnderlyingNotValue {
        name: Rc<Name>,
        target: Rc<Name>,
    },
    Cycle {
        what: &'static str,
        name: Rc<Name>,
        via: Rc<Name>,
    },
}

impl Diagnostic {
    pub fn diagnostic_message(self: &Self, sess: &Sess) -> String {
        match self {
            Diagnostic::ParseError { error } => sess.error(
                &error.to_string(),
                vec![sess.error_ann("here", error.span())],
            ),
            Diagnostic::ReservedName { name } => sess.error_with_notes(
                &format!("`{}` is a builtin type and cannot be redefined", name),
                vec![sess.error_ann("reserved name", name.span())],
                &["builtin types are integer, real, boolean, logical, string and binary"],
            ),
            Diagnostic::AlreadyDefined { what, old, new } => sess.error(
                &format!("{} `{}` already defined", what, new),
                vec![
                    sess.error_ann("cannot be defined again", new.span()),
                    sess.help_ann("was defined here", old.span()),
                ],
            ),
            Diagnostic::UndefName { name } => sess.error(
                &format!("no type named `{}` found in the schema", name),
                vec![sess.error_ann("not found", name.span())],
            ),
            Diagnostic::AlternativeNotNamed { name } => sess.error_with_notes(
                &format!("select alternatives must be named types, got `{}`", name),
                vec![sess.error_ann("builtin type", name.span())],
                &["declare a defined type for it, as in `type IfcReal = real;`"],
            ),
            Diagnostic::SupertypeNotEntity { name, found } => sess.error(
                &format!("supertype `{}` is not an entity", name),
                vec![
                    sess.error_ann("must be an entity", name.span()),
                    sess.help_ann("defined here", found.span()),
                ],
            ),
            Diagnostic::UnderlyingNotValue { name, target } => sess.error_with_notes(
                &format!(
                    "defined type `{}` cannot stand for select or entity `{}`",
                    name, target
                ),
                vec![sess.error_ann("not a value type", name.span())],
                &["refer to the select or entity directly"],
            ),
            Diagnostic::Cycle { what, name, via } => sess.error(
                &format!("{} `{}` refers to itself", what, name),
                vec![
                    sess.error_ann("cycle closed here", via.span()),
                    sess.help_ann("defined here", name.span()),
                ],
            ),
        }
    }
}

//! Names declared by the schema, and the resolution of type names against them.
//!
//! All definitions are declared before any of them is resolved,
//! so that a definition can refer to definitions appearing later in the source.

use std::collections::HashMap;
use std::rc::Rc;

use super::def::*;
use super::diagnostic::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    Type,
    Enumeration,
    Select,
    Entity,
}

#[derive(Debug, Clone)]
pub struct Decl {
    pub name: Rc<Name>,
    pub kind: DeclKind,
}

#[derive(Debug, Default)]
pub struct Env {
    decls: HashMap<String, Decl>,
}

impl Env {
    /// Declares `name`, returning whether it was not declared already.
    pub fn declare(
        self: &mut Self,
        name: &Rc<Name>,
        kind: DeclKind,
        dgns: &mut Vec<Diagnostic>,
    ) -> bool {
        if Builtin::from_name(&name.ident.to_string()).is_some() {
            dgns.push(Diagnostic::ReservedName { name: name.clone() });
            return false;
        }
        match self.decls.get(&name.key()) {
            None => {
                self.decls.insert(
                    name.key(),
                    Decl {
                        name: name.clone(),
                        kind,
                    },
                );
                true
            }
            Some(old) => {
                dgns.push(Diagnostic::AlreadyDefined {
                    what: "definition",
                    old: old.name.clone(),
                    new: name.clone(),
                });
                false
            }
        }
    }

    pub fn maybe_resolve(self: &Self, name: &Name) -> Option<&Decl> {
        self.decls.get(&name.key())
    }

    /// Type denoted by `name`, either a builtin or a definition.
    pub fn resolve_ty(self: &Self, name: &Rc<Name>, dgns: &mut Vec<Diagnostic>) -> Ty {
        if let Some(builtin) = Builtin::from_name(&name.ident.to_string()) {
            return Ty::Builtin(builtin);
        }
        match self.maybe_resolve(name) {
            Some(decl) => {
                let name = decl.name.clone();
                match decl.kind {
                    DeclKind::Type => Ty::Defined { name },
                    DeclKind::Enumeration => Ty::Enumeration { name },
                    DeclKind::Select => Ty::Select { name },
                    DeclKind::Entity => Ty::Entity { name },
                }
            }
            None => {
                dgns.push(Diagnostic::UndefName { name: name.clone() });
                Ty::Err
            }
        }
    }
}

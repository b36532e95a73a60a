//! Transform an AST into a resolved `Schema`.
//!
//! Compilation is done in three passes:
//! every definition is first declared in the environment (see `env`),
//! then each definition is compiled resolving its names against the environment,
//! and finally the resolved schema is checked for cycles.

use std::collections::HashSet;
use std::rc::Rc;

use by_address::ByAddress;

use super::ast::*;
use super::def::*;
use super::diagnostic::*;
use super::env::*;

pub fn compile_schema(ast: ASchema, dgns: &mut Vec<Diagnostic>) -> Schema {
    let mut env = Env::default();

    let defs: Vec<_> = ast
        .defs
        .into_iter()
        .map(|def| {
            let (name, kind) = match &def {
                ADef::Type { name, .. } => (name, DeclKind::Type),
                ADef::Enumeration { name, .. } => (name, DeclKind::Enumeration),
                ADef::Select { name, .. } => (name, DeclKind::Select),
                ADef::Entity { name, .. } => (name, DeclKind::Entity),
            };
            let name = compile_name(name);
            let declared = env.declare(&name, kind, dgns);
            (name, declared, def)
        })
        .collect();

    let mut schema = Schema::default();
    for (name, declared, def) in defs {
        if !declared {
            continue;
        }
        let def = compile_def(name, def, &env, dgns);
        schema.index.insert(def.name().key(), def.clone());
        match def {
            Def::Type(def) => schema.types.push(def),
            Def::Enumeration(def) => schema.enumerations.push(def),
            Def::Select(def) => schema.selects.push(def),
            Def::Entity(def) => schema.entities.push(def),
        }
    }

    check_cycles(&schema, dgns);
    schema
}

fn compile_name(name: &AName) -> Rc<Name> {
    Rc::new(Name {
        ident: name.token.clone(),
    })
}

fn compile_def(name: Rc<Name>, def: ADef, env: &Env, dgns: &mut Vec<Diagnostic>) -> Def {
    match def {
        ADef::Type { ty, .. } => {
            let ty = compile_ty(&ty, env, dgns);
            match &ty {
                Ty::Select { name: target } | Ty::Entity { name: target } => {
                    dgns.push(Diagnostic::UnderlyingNotValue {
                        name: name.clone(),
                        target: target.clone(),
                    })
                }
                _ => (),
            }
            Def::Type(Rc::new(TypeDef {
                name,
                ty: Rc::new(ty),
            }))
        }
        ADef::Enumeration { items, .. } => {
            let items = unique_names(items.iter().map(compile_name), "enumeration item", dgns);
            Def::Enumeration(Rc::new(EnumDef { name, items }))
        }
        ADef::Select { alternatives, .. } => {
            let alternatives = alternatives
                .iter()
                .map(compile_name)
                .flat_map(|alt| match env.resolve_ty(&alt, dgns) {
                    Ty::Builtin(_) => {
                        dgns.push(Diagnostic::AlternativeNotNamed { name: alt });
                        None
                    }
                    Ty::Err => None,
                    Ty::Defined { name }
                    | Ty::Enumeration { name }
                    | Ty::Select { name }
                    | Ty::Entity { name } => Some(Rc::new(Name {
                        ident: proc_macro2::Ident::new(&name.ident.to_string(), alt.span()),
                    })),
                    Ty::Aggregate { .. } => None,
                })
                .collect::<Vec<_>>();
            let alternatives = unique_names(alternatives.into_iter(), "alternative", dgns);
            Def::Select(Rc::new(SelectDef { name, alternatives }))
        }
        ADef::Entity {
            supertypes, attrs, ..
        } => {
            let supertypes = supertypes
                .iter()
                .flat_map(|(_, names)| names.iter())
                .map(compile_name)
                .flat_map(|supertype| match env.maybe_resolve(&supertype) {
                    Some(Decl {
                        kind: DeclKind::Entity,
                        name,
                    }) => Some(Rc::new(Name {
                        ident: proc_macro2::Ident::new(
                            &name.ident.to_string(),
                            supertype.span(),
                        ),
                    })),
                    Some(decl) => {
                        dgns.push(Diagnostic::SupertypeNotEntity {
                            name: supertype.clone(),
                            found: decl.name.clone(),
                        });
                        None
                    }
                    None => {
                        dgns.push(Diagnostic::UndefName { name: supertype });
                        None
                    }
                })
                .collect::<Vec<_>>();
            let supertypes = unique_names(supertypes.into_iter(), "supertype", dgns);

            let mut compiled: Vec<Rc<AttrDef>> = Vec::new();
            for attr in attrs.iter() {
                let attr_name = compile_name(&attr.name);
                if let Some(old) = compiled.iter().find(|a| a.name.key() == attr_name.key()) {
                    dgns.push(Diagnostic::AlreadyDefined {
                        what: "attribute",
                        old: old.name.clone(),
                        new: attr_name,
                    });
                    continue;
                }
                compiled.push(Rc::new(AttrDef {
                    name: attr_name,
                    ty: Rc::new(compile_ty(&attr.ty, env, dgns)),
                }));
            }

            Def::Entity(Rc::new(EntityDef {
                name,
                supertypes,
                attrs: compiled,
            }))
        }
    }
}

fn compile_ty(ty: &ATy, env: &Env, dgns: &mut Vec<Diagnostic>) -> Ty {
    match ty {
        ATy::Name { name } => env.resolve_ty(&compile_name(name), dgns),
        ATy::Aggr { kind, item, .. } => Ty::Aggregate {
            kind: match kind {
                AAggrKind::List(_) => AggrKind::List,
                AAggrKind::Set(_) => AggrKind::Set,
                AAggrKind::Bag(_) => AggrKind::Bag,
                AAggrKind::Array(_) => AggrKind::Array,
            },
            item: Rc::new(compile_ty(item, env, dgns)),
        },
    }
}

fn unique_names(
    names: impl Iterator<Item = Rc<Name>>,
    what: &'static str,
    dgns: &mut Vec<Diagnostic>,
) -> Vec<Rc<Name>> {
    let mut unique: Vec<Rc<Name>> = Vec::new();
    for name in names {
        match unique.iter().find(|n| n.key() == name.key()) {
            Some(old) => dgns.push(Diagnostic::AlreadyDefined {
                what,
                old: old.clone(),
                new: name,
            }),
            None => unique.push(name),
        }
    }
    unique
}

fn check_cycles(schema: &Schema, dgns: &mut Vec<Diagnostic>) {
    let found = find_cycles(&schema.types, |def| match def.ty.as_ref() {
        Ty::Defined { name } => match schema.lookup(&name.key()) {
            Some(Def::Type(next)) => vec![(name.clone(), next.clone())],
            _ => vec![],
        },
        _ => vec![],
    });
    for (def, via) in found {
        dgns.push(Diagnostic::Cycle {
            what: "defined type",
            name: def.name.clone(),
            via,
        })
    }

    let found = find_cycles(&schema.selects, |def| {
        def.alternatives
            .iter()
            .flat_map(|alt| schema.select(&alt.key()).map(|next| (alt.clone(), next.clone())))
            .collect()
    });
    for (def, via) in found {
        dgns.push(Diagnostic::Cycle {
            what: "select",
            name: def.name.clone(),
            via,
        })
    }

    let found = find_cycles(&schema.entities, |def| {
        def.supertypes
            .iter()
            .flat_map(|s| schema.entity(&s.key()).map(|next| (s.clone(), next.clone())))
            .collect()
    });
    for (def, via) in found {
        dgns.push(Diagnostic::Cycle {
            what: "entity",
            name: def.name.clone(),
            via,
        })
    }
}

/// Definitions reached again while following `edges` from themselves,
/// each with the reference closing the cycle.
fn find_cycles<T, F>(defs: &[Rc<T>], edges: F) -> Vec<(Rc<T>, Rc<Name>)>
where
    F: Fn(&T) -> Vec<(Rc<Name>, Rc<T>)>,
{
    let mut search = CycleSearch {
        edges: &edges,
        stack: Vec::new(),
        done: HashSet::new(),
        found: Vec::new(),
    };
    for def in defs {
        search.visit(def);
    }
    search.found
}

struct CycleSearch<'a, T, F> {
    edges: &'a F,
    stack: Vec<ByAddress<Rc<T>>>,
    done: HashSet<ByAddress<Rc<T>>>,
    found: Vec<(Rc<T>, Rc<Name>)>,
}

impl<T, F> CycleSearch<'_, T, F>
where
    F: Fn(&T) -> Vec<(Rc<Name>, Rc<T>)>,
{
    fn visit(self: &mut Self, def: &Rc<T>) {
        let key = ByAddress(def.clone());
        if self.done.contains(&key) {
            return;
        }
        self.stack.push(key.clone());
        for (via, next) in (self.edges)(def) {
            if self.stack.contains(&ByAddress(next.clone())) {
                self.found.push((next, via));
            } else {
                self.visit(&next);
            }
        }
        self.stack.pop();
        self.done.insert(key);
    }
}

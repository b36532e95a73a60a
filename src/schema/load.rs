use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::read_to_string;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::ast_parse::parse_schema;
use super::compile::compile_schema;
use super::def::Schema;
use super::diagnostic::Diagnostic;
use super::sess::Sess;

#[derive(Debug)]
pub enum LoadError {
    Io { path: PathBuf, error: io::Error },
    Invalid { count: usize, report: String },
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            LoadError::Io { path, error } => {
                write!(f, "cannot read schema `{}`: {}", path.display(), error)
            }
            LoadError::Invalid { count, report } => {
                write!(f, "{}", report)?;
                write!(f, "schema has {} error(s)", count)
            }
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoadError::Io { error, .. } => Some(error),
            LoadError::Invalid { .. } => None,
        }
    }
}

/// Parses and resolves a schema description, returning every problem found.
pub fn parse_schema_source(source: &str) -> Result<Schema, Vec<Diagnostic>> {
    let mut dgns = Vec::new();

    let schema = parse_schema(source, &mut dgns).map(|ast| compile_schema(ast, &mut dgns));

    match schema {
        Ok(schema) if dgns.is_empty() => Ok(schema),
        _ => Err(dgns),
    }
}

/// Loads a schema description, rendering diagnostics against `name` if it is invalid.
pub fn load_schema_str(name: &str, source: &str, color: bool) -> Result<Schema, LoadError> {
    let sess = Sess::new(name, source, color);

    match parse_schema_source(sess.source()) {
        Ok(schema) => {
            debug!(
                schema = name,
                types = schema.types.len(),
                enumerations = schema.enumerations.len(),
                selects = schema.selects.len(),
                entities = schema.entities.len(),
                "schema loaded"
            );
            Ok(schema)
        }
        Err(dgns) => {
            let report: String = dgns
                .iter()
                .map(|d| format!("{}\n", d.diagnostic_message(&sess)))
                .collect();
            Err(LoadError::Invalid {
                count: dgns.len(),
                report,
            })
        }
    }
}

/// Loads the schema description at the given path.
pub fn load_schema(path: &Path, color: bool) -> Result<Schema, LoadError> {
    let source = read_to_string(path).map_err(|error| LoadError::Io {
        path: path.to_owned(),
        error,
    })?;
    load_schema_str(&path.to_string_lossy(), &source, color)
}

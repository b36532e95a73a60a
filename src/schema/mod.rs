//! Parses a schema description and resolves it into a `Schema`.
//!
//! A schema description lists definitions of defined types, enumerations, selects and entities:
//!
//! ```text
//! type IfcLengthMeasure = real;
//! type IfcCompoundPlaneAngleMeasure = list[integer];
//! enumeration IfcWallTypeEnum { MOVABLE, PARAPET, NOTDEFINED }
//! select IfcMeasureValue { IfcLengthMeasure, IfcCompoundPlaneAngleMeasure }
//! entity IfcWall : IfcElement { PredefinedType: IfcWallTypeEnum }
//! ```
//!
//! Builtin types are `integer`, `real`, `boolean`, `logical`, `string` and `binary`.
//! Aggregates are written `list[T]`, `set[T]`, `bag[T]` or `array[T]`.
//! Names are case-insensitive.

mod ast;
mod ast_parse;
mod compile;
mod def;
mod diagnostic;
mod env;
mod kw;
mod load;
mod sess;

pub use def::*;
pub use diagnostic::Diagnostic;
pub use load::*;
pub use sess::Sess;

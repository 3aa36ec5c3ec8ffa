//! Record definition model for gqlmap.
//!
//! The schema compiler never reflects on host types directly. Instead every
//! record exposes its shape through a [`RecordDescriptor`]: a nominal name
//! plus an ordered list of [`FieldDescriptor`]s whose declared types are
//! expressed with the closed [`TypeDesc`] union.
//!
//! # Recursive records
//!
//! Records reference each other through [`RecordRef`] handles. A handle
//! carries the nominal name eagerly and describes the record lazily, so a
//! self-referential graph such as
//!
//! ```text
//! Node { self: Option<Node>, name: String }
//! ```
//!
//! is expressed without ever building a cyclic value. The compiler asks the
//! handle for its descriptor only when it actually needs the fields.

mod annotations;
mod desc;
mod primitive;
mod record;

pub use annotations::FieldAnnotations;
pub use desc::{InterfaceDesc, OperationDesc, SpecialType, TypeDesc};
pub use primitive::PrimitiveKind;
pub use record::{FieldDescriptor, Record, RecordDescriptor, RecordRef};

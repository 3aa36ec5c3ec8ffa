//! Declared field types.
//!
//! [`TypeDesc`] is the closed union the field mapper dispatches on. It
//! replaces open-ended runtime kind inspection with an exhaustive match.

use crate::{PrimitiveKind, RecordRef};

/// Types with a dedicated built-in scalar regardless of how the host
/// represents them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SpecialType {
    /// Wall-clock timestamp.
    Timestamp,
    /// Opaque 12-byte binary object identifier.
    ObjectId,
}

impl SpecialType {
    pub const fn name(self) -> &'static str {
        match self {
            SpecialType::Timestamp => "Timestamp",
            SpecialType::ObjectId => "ObjectId",
        }
    }
}

/// An operation exposed by a polymorphic (interface-typed) field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OperationDesc {
    pub name: String,
    /// Declared return type, `None` for operations returning nothing.
    pub returns: Option<TypeDesc>,
}

impl OperationDesc {
    pub fn new(name: impl Into<String>, returns: Option<TypeDesc>) -> Self {
        Self {
            name: name.into(),
            returns,
        }
    }
}

/// A polymorphic field type: an interface with its operations in
/// declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InterfaceDesc {
    pub name: String,
    pub operations: Vec<OperationDesc>,
}

impl InterfaceDesc {
    /// An interface exposing no operations.
    pub fn opaque(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            operations: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_operation(mut self, op: OperationDesc) -> Self {
        self.operations.push(op);
        self
    }

    /// The first declared operation, if any.
    pub fn first_operation(&self) -> Option<&OperationDesc> {
        self.operations.first()
    }
}

/// The declared type of a field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeDesc {
    Primitive(PrimitiveKind),
    Special(SpecialType),
    /// A nested record, embedded by value.
    Record(RecordRef),
    /// A by-reference handle to a record. Compiles like [`TypeDesc::Record`]
    /// but is given a dereferencing resolver by default.
    Reference(RecordRef),
    /// A sequence of elements.
    List(Box<TypeDesc>),
    /// One level of optional / pointer indirection.
    Optional(Box<TypeDesc>),
    Polymorphic(InterfaceDesc),
}

impl TypeDesc {
    pub fn primitive(kind: PrimitiveKind) -> Self {
        TypeDesc::Primitive(kind)
    }

    pub fn record(record: RecordRef) -> Self {
        TypeDesc::Record(record)
    }

    pub fn reference(record: RecordRef) -> Self {
        TypeDesc::Reference(record)
    }

    pub fn list(elem: TypeDesc) -> Self {
        TypeDesc::List(Box::new(elem))
    }

    pub fn optional(inner: TypeDesc) -> Self {
        TypeDesc::Optional(Box::new(inner))
    }

    /// Strip exactly one level of optional indirection.
    ///
    /// Returns the inner type and whether an indirection was present.
    pub fn strip_optional(&self) -> (&TypeDesc, bool) {
        match self {
            TypeDesc::Optional(inner) => (inner, true),
            other => (other, false),
        }
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, TypeDesc::Optional(_))
    }

    /// The innermost nominal type name, looking through lists and optionals.
    ///
    /// Empty for primitives, which have no nominal name.
    pub fn type_name(&self) -> &str {
        match self {
            TypeDesc::Primitive(_) => "",
            TypeDesc::Special(special) => special.name(),
            TypeDesc::Record(record) | TypeDesc::Reference(record) => record.name(),
            TypeDesc::List(inner) | TypeDesc::Optional(inner) => inner.type_name(),
            TypeDesc::Polymorphic(iface) => &iface.name,
        }
    }

    /// The record this type ultimately names, if any.
    pub fn as_record(&self) -> Option<&RecordRef> {
        match self {
            TypeDesc::Record(record) | TypeDesc::Reference(record) => Some(record),
            _ => None,
        }
    }
}

impl From<PrimitiveKind> for TypeDesc {
    fn from(kind: PrimitiveKind) -> Self {
        TypeDesc::Primitive(kind)
    }
}

impl From<SpecialType> for TypeDesc {
    fn from(special: SpecialType) -> Self {
        TypeDesc::Special(special)
    }
}

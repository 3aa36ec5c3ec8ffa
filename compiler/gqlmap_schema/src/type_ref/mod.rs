//! Field type references.

use std::fmt;

use crate::{ObjectId, Pool, ScalarType};

/// The type of a compiled field.
///
/// `List` and `NonNull` are transient wrappers built on demand; objects are
/// referenced by handle and owned by the [`Pool`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeRef {
    Scalar(ScalarType),
    Object(ObjectId),
    List(Box<TypeRef>),
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    pub fn list(inner: TypeRef) -> Self {
        TypeRef::List(Box::new(inner))
    }

    /// Wrap in `NonNull`. Already non-null types are returned unchanged.
    pub fn non_null(inner: TypeRef) -> Self {
        match inner {
            TypeRef::NonNull(_) => inner,
            other => TypeRef::NonNull(Box::new(other)),
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, TypeRef::NonNull(_))
    }

    pub fn is_list(&self) -> bool {
        match self {
            TypeRef::List(_) => true,
            TypeRef::NonNull(inner) => inner.is_list(),
            TypeRef::Scalar(_) | TypeRef::Object(_) => false,
        }
    }

    /// The object handle at the core of the wrappers, if the core is an
    /// object.
    pub fn named(&self) -> Option<ObjectId> {
        match self {
            TypeRef::Object(id) => Some(*id),
            TypeRef::List(inner) | TypeRef::NonNull(inner) => inner.named(),
            TypeRef::Scalar(_) => None,
        }
    }

    /// The scalar at the core of the wrappers, if the core is a scalar.
    pub fn scalar(&self) -> Option<ScalarType> {
        match self {
            TypeRef::Scalar(scalar) => Some(*scalar),
            TypeRef::List(inner) | TypeRef::NonNull(inner) => inner.scalar(),
            TypeRef::Object(_) => None,
        }
    }

    /// Rebuild the same `List` / `NonNull` wrapping around another object.
    ///
    /// A scalar core is left as is.
    #[must_use]
    pub fn with_named(&self, id: ObjectId) -> TypeRef {
        match self {
            TypeRef::Object(_) => TypeRef::Object(id),
            TypeRef::List(inner) => TypeRef::List(Box::new(inner.with_named(id))),
            TypeRef::NonNull(inner) => TypeRef::NonNull(Box::new(inner.with_named(id))),
            TypeRef::Scalar(scalar) => TypeRef::Scalar(*scalar),
        }
    }

    /// Render in the query language's notation, e.g. `[Node]!`.
    pub fn display<'a>(&'a self, pool: &'a Pool) -> impl fmt::Display + 'a {
        DisplayTypeRef { ty: self, pool }
    }
}

struct DisplayTypeRef<'a> {
    ty: &'a TypeRef,
    pool: &'a Pool,
}

impl fmt::Display for DisplayTypeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ty {
            TypeRef::Scalar(scalar) => f.write_str(scalar.name()),
            TypeRef::Object(id) => f.write_str(&self.pool[*id].name),
            TypeRef::List(inner) => write!(f, "[{}]", inner.display(self.pool)),
            TypeRef::NonNull(inner) => write!(f, "{}!", inner.display(self.pool)),
        }
    }
}

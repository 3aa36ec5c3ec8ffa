//! Record descriptors and lazy record handles.

use std::fmt;
use std::sync::Arc;

use crate::{FieldAnnotations, TypeDesc};

/// A host type that can describe its own fields.
///
/// ```text
/// struct Node;
///
/// impl Record for Node {
///     const NAME: &'static str = "Node";
///
///     fn describe() -> RecordDescriptor {
///         RecordDescriptor::new(Self::NAME)
///             .field(FieldDescriptor::new("self", TypeDesc::optional(TypeDesc::record(RecordRef::of::<Node>()))))
///             .field(FieldDescriptor::new("name", PrimitiveKind::String.into()))
///     }
/// }
/// ```
///
/// Handles keep the describe function alive, so implementors are `'static`.
pub trait Record: 'static {
    /// Nominal name, unique within one schema build.
    const NAME: &'static str;

    fn describe() -> RecordDescriptor;
}

type DescribeFn = dyn Fn() -> RecordDescriptor + Send + Sync;

/// A lazily described record.
///
/// Equality is nominal: two handles are equal when their names are.
#[derive(Clone)]
pub struct RecordRef {
    name: Arc<str>,
    describe: Arc<DescribeFn>,
}

impl RecordRef {
    /// A handle whose fields are produced by `describe` on demand.
    pub fn new(
        name: impl Into<Arc<str>>,
        describe: impl Fn() -> RecordDescriptor + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            describe: Arc::new(describe),
        }
    }

    /// Handle for a type implementing [`Record`].
    pub fn of<T: Record>() -> Self {
        Self::new(T::NAME, T::describe)
    }

    /// Handle over an already-built descriptor.
    pub fn from_descriptor(descriptor: RecordDescriptor) -> Self {
        let name: Arc<str> = Arc::from(descriptor.name.as_str());
        let descriptor = Arc::new(descriptor);
        Self::new(name, move || RecordDescriptor::clone(&descriptor))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Produce a fresh descriptor for this record.
    pub fn describe(&self) -> RecordDescriptor {
        (self.describe)()
    }
}

impl PartialEq for RecordRef {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for RecordRef {}

impl fmt::Debug for RecordRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RecordRef").field(&&*self.name).finish()
    }
}

/// The shape of one record: its nominal name and ordered fields.
///
/// Produced fresh every time a record is examined; never cached by the
/// compiler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordDescriptor {
    pub name: String,
    pub fields: Vec<FieldDescriptor>,
}

impl RecordDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field, preserving declaration order.
    #[must_use]
    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }
}

/// One declared field of a record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    pub ty: TypeDesc,
    pub annotations: FieldAnnotations,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, ty: TypeDesc) -> Self {
        Self {
            name: name.into(),
            ty,
            annotations: FieldAnnotations::default(),
        }
    }

    #[must_use]
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.annotations.description = Some(text.into());
        self
    }

    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.annotations.required = required;
        self
    }

    /// Compile the named alternate type in place of the declared one.
    #[must_use]
    pub fn substitute(mut self, type_name: impl Into<String>) -> Self {
        self.annotations.substitute = Some(type_name.into());
        self
    }

    /// Replace the annotations with ones parsed from a tag string.
    #[must_use]
    pub fn tags(mut self, tags: &str) -> Self {
        self.annotations = FieldAnnotations::from_tags(tags);
        self
    }

    /// Whether the declared type carries an optional indirection.
    pub fn is_nullable(&self) -> bool {
        self.ty.is_optional()
    }
}

#[cfg(test)]
mod tests;

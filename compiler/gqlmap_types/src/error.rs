//! Error types for schema compilation.

use gqlmap_schema::TypeMode;

/// A compile call that produced no object type.
///
/// Only the call that targeted the failing record sees these. A parent whose
/// field referenced the record drops that field and carries on.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    /// The compiled type is not (an optional of) a record.
    #[error("cannot compile a {found} type; expected a record")]
    InputKind { found: &'static str },

    /// The record has an empty nominal name.
    #[error("record has no name")]
    AnonymousRecord,

    /// None of the record's fields could be mapped.
    #[error("record `{record}` has no mappable fields ({mode})")]
    EmptyRecord { record: String, mode: TypeMode },
}

/// A field still pointing at a placeholder after the patch pass.
///
/// Indicates an internal inconsistency: the placeholder's record never got a
/// canonical object type. Collected in a
/// [`PatchReport`](crate::PatchReport) and logged, never returned as an
/// error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("field `{object}.{field}` still references placeholder `{stub}`")]
pub struct UnresolvedStub {
    pub object: String,
    pub field: String,
    pub stub: String,
}

/// Failure reported by a [`ReferenceFetcher`](crate::ReferenceFetcher).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("reference fetch failed: {message}")]
pub struct FetchError {
    message: String,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

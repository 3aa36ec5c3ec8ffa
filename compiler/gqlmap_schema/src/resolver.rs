//! Field value resolution.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

/// What a resolver is given: the parent value and the field being resolved.
#[derive(Clone, Copy, Debug)]
pub struct ResolveParams<'a> {
    pub source: &'a Value,
    pub field_name: &'a str,
}

impl<'a> ResolveParams<'a> {
    /// The parent's property named after the field, if present.
    pub fn property(&self) -> Option<&'a Value> {
        self.source.get(self.field_name)
    }
}

/// Failure to resolve a field value.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The parent value does not have the shape the resolver expects.
    #[error("field `{field}`: {message}")]
    Shape { field: String, message: String },

    /// An external collaborator failed while producing the value.
    #[error("field `{field}`: {source}")]
    External {
        field: String,
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
}

type ResolveFn = dyn Fn(&ResolveParams<'_>) -> Result<Value, ResolveError> + Send + Sync;

/// A shareable custom field resolver.
#[derive(Clone)]
pub struct Resolver(Arc<ResolveFn>);

impl Resolver {
    pub fn new(
        resolve: impl Fn(&ResolveParams<'_>) -> Result<Value, ResolveError> + Send + Sync + 'static,
    ) -> Self {
        Self(Arc::new(resolve))
    }

    pub fn resolve(&self, params: &ResolveParams<'_>) -> Result<Value, ResolveError> {
        (self.0)(params)
    }

    /// Whether two handles share the same underlying function.
    pub fn ptr_eq(&self, other: &Resolver) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Resolver(..)")
    }
}

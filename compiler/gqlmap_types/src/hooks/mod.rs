//! Extension points supplied by the caller.
//!
//! Each hook is a narrow capability trait with a no-op default. Closures of
//! the matching shape implement the traits directly; [`SubstitutionTable`]
//! and [`ResolverTable`] cover the common name-keyed case.

use rustc_hash::FxHashMap;
use serde_json::Value;

use gqlmap_ir::RecordRef;
use gqlmap_schema::Resolver;

use crate::FetchError;

/// Resolves a field's substitution annotation to an alternate record.
pub trait TypeSubstitution: Send + Sync {
    fn get_type(&self, name: &str) -> Option<RecordRef>;
}

/// Supplies custom resolvers per field.
pub trait FieldResolverFinder: Send + Sync {
    /// `declared` is the field's declared type name, `substituted` the
    /// substitution annotation or `""` when there is none.
    fn get_resolver(&self, declared: &str, substituted: &str) -> Option<Resolver>;
}

/// Turns record handles into the records they point at.
///
/// Backs the default resolver of by-reference fields. Retries and partial
/// failure handling are the implementation's business.
pub trait ReferenceFetcher: Send + Sync {
    fn fetch(&self, handles: &[Value]) -> Result<Vec<Value>, FetchError>;
}

/// Substitutes nothing.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoSubstitution;

impl TypeSubstitution for NoSubstitution {
    fn get_type(&self, _name: &str) -> Option<RecordRef> {
        None
    }
}

/// Finds no resolvers.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoResolvers;

impl FieldResolverFinder for NoResolvers {
    fn get_resolver(&self, _declared: &str, _substituted: &str) -> Option<Resolver> {
        None
    }
}

impl<F> TypeSubstitution for F
where
    F: Fn(&str) -> Option<RecordRef> + Send + Sync,
{
    fn get_type(&self, name: &str) -> Option<RecordRef> {
        self(name)
    }
}

impl<F> FieldResolverFinder for F
where
    F: Fn(&str, &str) -> Option<Resolver> + Send + Sync,
{
    fn get_resolver(&self, declared: &str, substituted: &str) -> Option<Resolver> {
        self(declared, substituted)
    }
}

impl<F> ReferenceFetcher for F
where
    F: Fn(&[Value]) -> Result<Vec<Value>, FetchError> + Send + Sync,
{
    fn fetch(&self, handles: &[Value]) -> Result<Vec<Value>, FetchError> {
        self(handles)
    }
}

/// Substitutions keyed by annotation name.
#[derive(Clone, Debug, Default)]
pub struct SubstitutionTable {
    types: FxHashMap<String, RecordRef>,
}

impl SubstitutionTable {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, record: RecordRef) -> Self {
        self.insert(name, record);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, record: RecordRef) {
        self.types.insert(name.into(), record);
    }
}

impl TypeSubstitution for SubstitutionTable {
    fn get_type(&self, name: &str) -> Option<RecordRef> {
        self.types.get(name).cloned()
    }
}

/// Resolvers keyed by type name.
///
/// A field with a substitution annotation is looked up by the substituted
/// name only; any other field by its declared type name.
#[derive(Clone, Debug, Default)]
pub struct ResolverTable {
    resolvers: FxHashMap<String, Resolver>,
}

impl ResolverTable {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, type_name: impl Into<String>, resolver: Resolver) -> Self {
        self.insert(type_name, resolver);
        self
    }

    pub fn insert(&mut self, type_name: impl Into<String>, resolver: Resolver) {
        self.resolvers.insert(type_name.into(), resolver);
    }
}

impl FieldResolverFinder for ResolverTable {
    fn get_resolver(&self, declared: &str, substituted: &str) -> Option<Resolver> {
        let key = if substituted.is_empty() {
            declared
        } else {
            substituted
        };
        self.resolvers.get(key).cloned()
    }
}

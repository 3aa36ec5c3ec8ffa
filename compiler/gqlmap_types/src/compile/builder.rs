//! `SchemaCompilerBuilder` for wiring extension hooks into a compiler.

use std::sync::Arc;

use super::SchemaCompiler;
use crate::{
    FieldResolverFinder, NoResolvers, NoSubstitution, ReferenceFetcher, TypeRegistry,
    TypeSubstitution,
};

/// Builder for [`SchemaCompiler`].
///
/// Every hook is optional. Without a [`ReferenceFetcher`], by-reference
/// fields get no default resolver and read their handles as stored.
#[derive(Default)]
pub struct SchemaCompilerBuilder {
    registry: Option<TypeRegistry>,
    substitution: Option<Box<dyn TypeSubstitution>>,
    resolver_finder: Option<Box<dyn FieldResolverFinder>>,
    reference_fetcher: Option<Arc<dyn ReferenceFetcher>>,
}

impl SchemaCompilerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue a build in an existing registry.
    #[must_use]
    pub fn registry(mut self, registry: TypeRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    #[must_use]
    pub fn substitution(mut self, substitution: impl TypeSubstitution + 'static) -> Self {
        self.substitution = Some(Box::new(substitution));
        self
    }

    #[must_use]
    pub fn resolver_finder(mut self, finder: impl FieldResolverFinder + 'static) -> Self {
        self.resolver_finder = Some(Box::new(finder));
        self
    }

    #[must_use]
    pub fn reference_fetcher(mut self, fetcher: impl ReferenceFetcher + 'static) -> Self {
        self.reference_fetcher = Some(Arc::new(fetcher));
        self
    }

    pub fn build(self) -> SchemaCompiler {
        SchemaCompiler {
            registry: self.registry.unwrap_or_default(),
            substitution: self
                .substitution
                .unwrap_or_else(|| Box::new(NoSubstitution)),
            resolver_finder: self
                .resolver_finder
                .unwrap_or_else(|| Box::new(NoResolvers)),
            reference_fetcher: self.reference_fetcher,
            last_patch: None,
        }
    }
}

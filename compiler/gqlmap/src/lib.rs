//! gqlmap: compile record definitions into query-language schema types.
//!
//! Records describe themselves through [`Record`] or [`RecordRef`]; a
//! [`SchemaCompiler`] turns them into object types, memoized per record name
//! and [`TypeMode`], with self-referential and mutually recursive records
//! handled through placeholders that are patched once compilation unwinds.
//!
//! ```text
//! let mut compiler = SchemaCompiler::new();
//! let node = compiler.compile_output_record::<Node>()?;
//! println!("{}", compiler.sdl(&[node]));
//! ```
//!
//! # Logging
//!
//! Everything logs through `tracing`. [`init_tracing`] installs a subscriber
//! driven by [`Config`]:
//! - `GQLMAP_LOG=debug`: one span per compiled record, memo hits, placeholders
//! - `GQLMAP_LOG=info`: skipped fields and records
//! - `GQLMAP_LOG_TREE=1`: indented, hierarchical output instead of flat lines

mod config;
mod shared;

use std::sync::Once;

pub use config::{Config, DEFAULT_LOG_FILTER, LOG_ENV, LOG_TREE_ENV};
pub use shared::SharedSchemaCompiler;

pub use gqlmap_ir::{
    FieldAnnotations, FieldDescriptor, InterfaceDesc, OperationDesc, PrimitiveKind, Record,
    RecordDescriptor, RecordRef, SpecialType, TypeDesc,
};
pub use gqlmap_schema::{
    print_sdl, CompiledField, ObjectId, ObjectType, Pool, ResolveError, ResolveParams, Resolver,
    ScalarType, TypeMode, TypeRef,
};
pub use gqlmap_types::{
    deref_resolver, CompileError, FetchError, FieldResolverFinder, NoResolvers, NoSubstitution,
    PatchReport, ReferenceFetcher, ResolverTable, SchemaCompiler, SchemaCompilerBuilder,
    SubstitutionTable, TypeRegistry, TypeSubstitution, UnresolvedStub,
};

static TRACING_INIT: Once = Once::new();

/// Install a global tracing subscriber configured by `config`.
///
/// Safe to call multiple times; only the first call has an effect. Does
/// nothing if another global subscriber is already installed.
pub fn init_tracing(config: &Config) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = EnvFilter::try_new(&config.log_filter)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
        let (tree, flat) = if config.log_tree {
            let tree = tracing_tree::HierarchicalLayer::new(2)
                .with_targets(true)
                .with_bracketed_fields(true);
            (Some(tree), None)
        } else {
            (None, Some(fmt::layer().with_target(true).with_level(true)))
        };

        let installed = tracing_subscriber::registry()
            .with(tree)
            .with(flat)
            .with(filter)
            .try_init();
        if installed.is_err() {
            tracing::debug!("a global tracing subscriber is already installed");
        }
    });
}

//! The gqlmap type-graph compiler.
//!
//! Turns a graph of [`RecordDescriptor`](gqlmap_ir::RecordDescriptor)s into
//! object types in a [`Pool`](gqlmap_schema::Pool):
//!
//! - **Memoization** ([`TypeRegistry`]): one object type per record name and
//!   [`TypeMode`](gqlmap_schema::TypeMode), no matter how often a record is
//!   reached.
//! - **Cycle safety** ([`CycleGuard`], [`insert_stub`]): re-entering a
//!   record that is still being compiled yields a placeholder object instead
//!   of recursing.
//! - **Patching** ([`patch_stubs`]): once the outermost compile call
//!   unwinds, every field that points at a placeholder is redirected to the
//!   finished object, keeping its `List` / `NonNull` wrapping.
//! - **Extension hooks** ([`TypeSubstitution`], [`FieldResolverFinder`],
//!   [`ReferenceFetcher`]): injected through [`SchemaCompiler::builder`].
//!
//! # Concurrency
//!
//! A [`SchemaCompiler`] is single-writer: every compile call takes
//! `&mut self`. Share one between threads only behind a lock, or give each
//! build its own compiler.

mod compile;
mod cycle;
mod deref;
mod error;
mod hooks;
mod patch;
mod registry;
mod scalar_map;
mod stub;

pub use compile::{SchemaCompiler, SchemaCompilerBuilder};
pub use cycle::{CompilationContext, CycleGuard};
pub use deref::deref_resolver;
pub use error::{CompileError, FetchError, UnresolvedStub};
pub use hooks::{
    FieldResolverFinder, NoResolvers, NoSubstitution, ReferenceFetcher, ResolverTable,
    SubstitutionTable, TypeSubstitution,
};
pub use patch::{patch_stubs, PatchReport};
pub use registry::TypeRegistry;
pub use scalar_map::{scalar_for, special_scalar};
pub use stub::{insert_stub, stub_name, STUB_FIELD, STUB_SUFFIX};

//! Record compilation.
//!
//! [`SchemaCompiler`] walks a record graph depth-first, one record at a
//! time:
//!
//! 1. a record already registered for the current mode is returned as is;
//! 2. a record already being compiled further up the call path gets a
//!    placeholder ([`insert_stub`]) instead of a recursive call;
//! 3. otherwise every field is mapped (see `field.rs`) and the record is
//!    registered if at least one field survived.
//!
//! When the outermost record of a root call is done, [`patch_stubs`] closes
//! every placeholder reference left behind by step 2.

mod builder;
mod field;

use std::fmt;
use std::sync::Arc;

use gqlmap_ir::{Record, RecordRef, TypeDesc};
use gqlmap_schema::{ObjectId, ObjectType, Pool, TypeMode};

use crate::{
    insert_stub, patch_stubs, CompilationContext, CompileError, FieldResolverFinder, PatchReport,
    ReferenceFetcher, TypeRegistry, TypeSubstitution,
};

pub use builder::SchemaCompilerBuilder;

/// Compiles record definitions into object types.
///
/// One compiler is one schema build: its registry memoizes every object type
/// it produces, across calls and across modes.
pub struct SchemaCompiler {
    registry: TypeRegistry,
    substitution: Box<dyn TypeSubstitution>,
    resolver_finder: Box<dyn FieldResolverFinder>,
    reference_fetcher: Option<Arc<dyn ReferenceFetcher>>,
    last_patch: Option<PatchReport>,
}

impl SchemaCompiler {
    /// A compiler with no-op hooks.
    pub fn new() -> Self {
        SchemaCompilerBuilder::new().build()
    }

    pub fn builder() -> SchemaCompilerBuilder {
        SchemaCompilerBuilder::new()
    }

    /// Compile the output object type of a record.
    ///
    /// `ty` must be a record, a by-reference record, or an optional of
    /// either.
    pub fn compile_output(&mut self, ty: &TypeDesc) -> Result<ObjectId, CompileError> {
        self.compile(ty, TypeMode::Output)
    }

    /// Compile the input object type of a record. Registered names carry the
    /// `_Input` suffix.
    pub fn compile_input(&mut self, ty: &TypeDesc) -> Result<ObjectId, CompileError> {
        self.compile(ty, TypeMode::Input)
    }

    pub fn compile_output_record<T: Record>(&mut self) -> Result<ObjectId, CompileError> {
        self.compile_output(&TypeDesc::record(RecordRef::of::<T>()))
    }

    pub fn compile_input_record<T: Record>(&mut self) -> Result<ObjectId, CompileError> {
        self.compile_input(&TypeDesc::record(RecordRef::of::<T>()))
    }

    /// Compile `ty` as the root of a new call tree.
    pub fn compile(&mut self, ty: &TypeDesc, mode: TypeMode) -> Result<ObjectId, CompileError> {
        let (inner, _) = ty.strip_optional();
        let record = match inner {
            TypeDesc::Record(record) | TypeDesc::Reference(record) => record,
            other => {
                let err = CompileError::InputKind {
                    found: kind_label(other),
                };
                tracing::debug!(%err, "rejecting root type");
                return Err(err);
            }
        };
        let mut ctx = CompilationContext::new(mode);
        self.compile_record(record, &mut ctx)
    }

    /// Compile one record within an ongoing call tree.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(record = record.name(), mode = %ctx.mode(), depth = ctx.depth())
    )]
    pub(crate) fn compile_record(
        &mut self,
        record: &RecordRef,
        ctx: &mut CompilationContext,
    ) -> Result<ObjectId, CompileError> {
        let name = record.name();
        let mode = ctx.mode();

        if let Some(id) = self.registry.lookup(name, mode) {
            tracing::debug!("already compiled");
            return Ok(id);
        }
        if name.is_empty() {
            return Err(CompileError::AnonymousRecord);
        }
        if !ctx.enter(name) {
            return Ok(insert_stub(&mut self.registry, name, mode));
        }

        let descriptor = record.describe();
        let mut object = ObjectType::new(mode.type_name(name), mode);
        for field in &descriptor.fields {
            match self.map_field(field, ctx) {
                Ok(compiled) => object.add_field(compiled),
                Err(err) => tracing::info!(field = %field.name, %err, "skipping field"),
            }
        }

        let outermost = ctx.exit(name);
        let result = if object.fields.is_empty() {
            tracing::info!("no mappable fields; not registering");
            Err(CompileError::EmptyRecord {
                record: name.to_string(),
                mode,
            })
        } else {
            Ok(self.registry.register(name, mode, object))
        };

        if outermost {
            self.last_patch = Some(patch_stubs(&mut self.registry));
            ctx.reset();
        }
        result
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    pub fn into_registry(self) -> TypeRegistry {
        self.registry
    }

    pub fn pool(&self) -> &Pool {
        self.registry.pool()
    }

    pub fn object(&self, id: ObjectId) -> &ObjectType {
        self.registry.get(id)
    }

    /// Look up a compiled object by its schema name, e.g. `Node_Input`.
    pub fn get_by_name(&self, type_name: &str) -> Option<&ObjectType> {
        self.registry
            .get_by_name(type_name)
            .map(|id| self.registry.get(id))
    }

    /// Result of the patch pass that ended the most recent root call, if
    /// that call compiled anything.
    pub fn last_patch(&self) -> Option<&PatchReport> {
        self.last_patch.as_ref()
    }

    /// Render the objects reachable from `roots` as SDL.
    pub fn sdl(&self, roots: &[ObjectId]) -> String {
        gqlmap_schema::print_sdl(self.pool(), roots)
    }
}

impl Default for SchemaCompiler {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SchemaCompiler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaCompiler")
            .field("registry", &self.registry)
            .field("reference_fetcher", &self.reference_fetcher.is_some())
            .finish_non_exhaustive()
    }
}

fn kind_label(ty: &TypeDesc) -> &'static str {
    match ty {
        TypeDesc::Primitive(_) => "primitive",
        TypeDesc::Special(_) => "special",
        TypeDesc::Record(_) | TypeDesc::Reference(_) => "record",
        TypeDesc::List(_) => "list",
        TypeDesc::Optional(_) => "optional",
        TypeDesc::Polymorphic(_) => "polymorphic",
    }
}

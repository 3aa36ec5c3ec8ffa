//! A schema compiler shared between threads.

use std::sync::Arc;

use parking_lot::Mutex;

use gqlmap_ir::{Record, TypeDesc};
use gqlmap_schema::{ObjectId, TypeMode};
use gqlmap_types::{CompileError, SchemaCompiler};

/// A [`SchemaCompiler`] behind a mutex.
///
/// Compilation mutates the registry for the whole call tree, so concurrent
/// callers sharing one schema build are serialised: each root compile call
/// holds the lock until its patch pass is done. Clones share the same
/// compiler.
#[derive(Clone, Debug)]
pub struct SharedSchemaCompiler {
    inner: Arc<Mutex<SchemaCompiler>>,
}

impl SharedSchemaCompiler {
    pub fn new(compiler: SchemaCompiler) -> Self {
        Self {
            inner: Arc::new(Mutex::new(compiler)),
        }
    }

    pub fn compile(&self, ty: &TypeDesc, mode: TypeMode) -> Result<ObjectId, CompileError> {
        self.inner.lock().compile(ty, mode)
    }

    pub fn compile_output(&self, ty: &TypeDesc) -> Result<ObjectId, CompileError> {
        self.compile(ty, TypeMode::Output)
    }

    pub fn compile_input(&self, ty: &TypeDesc) -> Result<ObjectId, CompileError> {
        self.compile(ty, TypeMode::Input)
    }

    pub fn compile_output_record<T: Record>(&self) -> Result<ObjectId, CompileError> {
        self.inner.lock().compile_output_record::<T>()
    }

    pub fn compile_input_record<T: Record>(&self) -> Result<ObjectId, CompileError> {
        self.inner.lock().compile_input_record::<T>()
    }

    /// Run `f` with exclusive access to the compiler.
    pub fn with<R>(&self, f: impl FnOnce(&mut SchemaCompiler) -> R) -> R {
        f(&mut self.inner.lock())
    }

    pub fn sdl(&self, roots: &[ObjectId]) -> String {
        self.inner.lock().sdl(roots)
    }

    /// Take the compiler back if this is the last handle.
    pub fn try_into_inner(self) -> Result<SchemaCompiler, Self> {
        Arc::try_unwrap(self.inner)
            .map(Mutex::into_inner)
            .map_err(|inner| Self { inner })
    }
}

impl Default for SharedSchemaCompiler {
    fn default() -> Self {
        Self::new(SchemaCompiler::new())
    }
}

impl From<SchemaCompiler> for SharedSchemaCompiler {
    fn from(compiler: SchemaCompiler) -> Self {
        Self::new(compiler)
    }
}

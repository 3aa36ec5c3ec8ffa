//! Compiled schema model for gqlmap.
//!
//! This crate is the container the compiler populates. It knows nothing
//! about records or how they are classified; it only stores the result.
//!
//! # Ownership
//!
//! Object types live in a [`Pool`] and are referenced by [`ObjectId`]
//! handles. Field types are [`TypeRef`]s: scalars, handles, and the
//! transient `List` / `NonNull` wrappers around them. Because objects refer
//! to each other only through handles, self-referential and mutually
//! recursive object graphs need no shared ownership or interior mutability.

mod id;
mod object;
mod pool;
mod resolver;
mod scalar;
mod sdl;
mod type_ref;

pub use id::ObjectId;
pub use object::{CompiledField, ObjectType, TypeMode, INPUT_SUFFIX};
pub use pool::Pool;
pub use resolver::{ResolveError, ResolveParams, Resolver};
pub use scalar::{ScalarType, NOT_IMPLEMENTED};
pub use sdl::print_sdl;
pub use type_ref::TypeRef;

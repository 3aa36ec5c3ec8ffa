//! Primitive kind to scalar mapping.

use gqlmap_ir::{PrimitiveKind, SpecialType};
use gqlmap_schema::ScalarType;

/// The scalar a primitive kind compiles to.
///
/// Kinds with no scalar counterpart degrade to `String` with a warning; this
/// never fails.
pub fn scalar_for(kind: PrimitiveKind) -> ScalarType {
    match kind {
        PrimitiveKind::Bool => ScalarType::Boolean,
        PrimitiveKind::Int
        | PrimitiveKind::Int8
        | PrimitiveKind::Int16
        | PrimitiveKind::Int32
        | PrimitiveKind::Uint
        | PrimitiveKind::Uint8
        | PrimitiveKind::Uint16
        | PrimitiveKind::Uint32 => ScalarType::Int,
        PrimitiveKind::Int64 => ScalarType::Int64,
        PrimitiveKind::Uint64 => ScalarType::UInt64,
        PrimitiveKind::Float32 | PrimitiveKind::Float64 => ScalarType::Float,
        PrimitiveKind::String => ScalarType::String,
        PrimitiveKind::Complex64
        | PrimitiveKind::Complex128
        | PrimitiveKind::Array
        | PrimitiveKind::Chan
        | PrimitiveKind::Func
        | PrimitiveKind::Map => {
            tracing::warn!(%kind, "no scalar for primitive kind; mapping to String");
            ScalarType::String
        }
    }
}

/// The dedicated scalar of a special type.
pub const fn special_scalar(special: SpecialType) -> ScalarType {
    match special {
        SpecialType::Timestamp => ScalarType::DateTime,
        SpecialType::ObjectId => ScalarType::ObjectId,
    }
}

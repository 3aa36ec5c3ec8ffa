//! Primitive value kinds.

use std::fmt;

/// The primitive kind of a non-aggregate field.
///
/// Covers every primitive a host record can declare, including the ones the
/// schema language has no representation for (complex numbers, channels,
/// callables, maps, fixed-size arrays). Those are still modelled so the
/// compiler can degrade them explicitly instead of rejecting the record.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Bool,
    /// Platform-width signed integer.
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    /// Platform-width unsigned integer.
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float32,
    Float64,
    String,
    Complex64,
    Complex128,
    /// Fixed-size array.
    Array,
    /// Channel.
    Chan,
    /// Callable.
    Func,
    /// Associative map.
    Map,
}

impl PrimitiveKind {
    /// All kinds, in declaration order.
    pub const ALL: [Self; 20] = [
        Self::Bool,
        Self::Int,
        Self::Int8,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::Uint,
        Self::Uint8,
        Self::Uint16,
        Self::Uint32,
        Self::Uint64,
        Self::Float32,
        Self::Float64,
        Self::String,
        Self::Complex64,
        Self::Complex128,
        Self::Array,
        Self::Chan,
        Self::Func,
        Self::Map,
    ];

    /// Lowercase name used in log output.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Uint => "uint",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::String => "string",
            Self::Complex64 => "complex64",
            Self::Complex128 => "complex128",
            Self::Array => "array",
            Self::Chan => "chan",
            Self::Func => "func",
            Self::Map => "map",
        }
    }

    /// Whether the schema language has a scalar for this kind.
    pub const fn is_mappable(self) -> bool {
        !matches!(
            self,
            Self::Complex64 | Self::Complex128 | Self::Array | Self::Chan | Self::Func | Self::Map
        )
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

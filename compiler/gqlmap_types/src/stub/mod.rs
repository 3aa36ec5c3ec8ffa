//! Placeholder objects for records that are still being compiled.

use gqlmap_schema::{CompiledField, ObjectId, ObjectType, ScalarType, TypeMode, TypeRef};

use crate::TypeRegistry;

/// Appended to a record name to form its placeholder's name.
pub const STUB_SUFFIX: &str = "Stub";

/// The single synthetic field every placeholder carries, so it is a valid
/// object type on its own until patched.
pub const STUB_FIELD: &str = "aField";

/// Schema name of the placeholder for `record`, before the mode suffix.
pub fn stub_name(record: &str) -> String {
    format!("{record}{STUB_SUFFIX}")
}

/// Get or create the placeholder for `record` in `mode`.
///
/// The placeholder is kept apart from real objects, keyed by `record`, and
/// remembers `record` in [`ObjectType::stub_of`]. `record` itself stays
/// unregistered.
pub fn insert_stub(registry: &mut TypeRegistry, record: &str, mode: TypeMode) -> ObjectId {
    if let Some(existing) = registry.stub(record, mode) {
        return existing;
    }

    tracing::debug!(record, %mode, "record is already being compiled; inserting placeholder");
    let mut stub = ObjectType::new(mode.type_name(&stub_name(record)), mode);
    stub.stub_of = Some(record.to_string());
    stub.add_field(CompiledField::new(STUB_FIELD, TypeRef::Scalar(ScalarType::Int)));
    registry.register_stub(record, mode, stub)
}

use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::ScalarType;

use super::*;

#[test]
fn input_names_are_suffixed() {
    assert_eq!(TypeMode::Output.type_name("Datastore"), "Datastore");
    assert_eq!(TypeMode::Input.type_name("Datastore"), "Datastore_Input");
    assert_eq!(TypeMode::Input.keyword(), "input");
}

#[test]
fn fields_keep_insertion_order_and_replace_in_place() {
    let mut object = ObjectType::new("Parent", TypeMode::Output);
    object.add_field(CompiledField::new("b", TypeRef::Scalar(ScalarType::Int)));
    object.add_field(CompiledField::new("a", TypeRef::Scalar(ScalarType::Int)));
    object.add_field(CompiledField::new("b", TypeRef::Scalar(ScalarType::String)));

    let names: Vec<_> = object.fields.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["b", "a"]);
    assert_eq!(
        object.field("b").map(|f| f.ty.clone()),
        Some(TypeRef::Scalar(ScalarType::String))
    );
}

#[test]
fn set_description_only_touches_existing_fields() {
    let mut object = ObjectType::new("Host", TypeMode::Output);
    object.add_field(CompiledField::new("name", TypeRef::Scalar(ScalarType::String)));

    assert!(object.set_description("name", "Host name."));
    assert!(!object.set_description("missing", "ignored"));
    assert_eq!(
        object.field("name").and_then(|f| f.description.as_deref()),
        Some("Host name.")
    );
}

#[test]
fn resolve_defaults_to_property_lookup() {
    let field = CompiledField::new("Name", TypeRef::Scalar(ScalarType::String));
    assert_eq!(field.resolve(&json!({"Name": "vm-1"})).ok(), Some(json!("vm-1")));
    assert_eq!(field.resolve(&json!({})).ok(), Some(Value::Null));
}

#[test]
fn resolve_uses_custom_resolver() {
    let upper = Resolver::new(|params| {
        let name = params.property().and_then(Value::as_str).unwrap_or_default();
        Ok(Value::String(name.to_uppercase()))
    });
    let field = CompiledField::new("Name", TypeRef::Scalar(ScalarType::String))
        .with_resolver(Some(upper));

    assert_eq!(field.resolve(&json!({"Name": "vm-1"})).ok(), Some(json!("VM-1")));
}

#[test]
fn resolver_errors_propagate() {
    let failing = Resolver::new(|params| {
        Err(ResolveError::Shape {
            field: params.field_name.to_string(),
            message: "expected a handle".to_string(),
        })
    });
    let field = CompiledField::new("Vm", TypeRef::Scalar(ScalarType::Any))
        .with_resolver(Some(failing));

    let err = field.resolve(&json!({})).err().map(|e| e.to_string());
    assert_eq!(err.as_deref(), Some("field `Vm`: expected a handle"));
}

#[test]
fn stubs_are_flagged() {
    let mut stub = ObjectType::new("NodeStub", TypeMode::Output);
    assert!(!stub.is_stub());
    stub.stub_of = Some("Node".to_string());
    assert!(stub.is_stub());
}

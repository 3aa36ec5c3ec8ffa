use pretty_assertions::assert_eq;
use serde_json::json;

use crate::{TypeMode, TypeRef};

use super::*;

#[test]
fn prints_reachable_objects_with_custom_scalars() {
    let mut pool = Pool::new();
    let node = pool.push(ObjectType::new("Node", TypeMode::Output));
    let unrelated = pool.push(ObjectType::new("Unrelated", TypeMode::Output));
    pool[unrelated].add_field(CompiledField::new("x", TypeRef::Scalar(ScalarType::Int)));

    pool[node].add_field(
        CompiledField::new("Self", TypeRef::Object(node)).with_description(Some("parent".into())),
    );
    pool[node].add_field(CompiledField::new(
        "Name",
        TypeRef::non_null(TypeRef::Scalar(ScalarType::String)),
    ));
    let mut created = CompiledField::new("Created", TypeRef::Scalar(ScalarType::DateTime));
    created.deprecation = Some("use Stamp".to_string());
    pool[node].add_field(created);

    let expected = r#""""
An RFC 3339 timestamp.
"""
scalar DateTime

type Node {
  """
  parent
  """
  Self: Node
  Name: String!
  Created: DateTime @deprecated(reason: "use Stamp")
}
"#;
    assert_eq!(print_sdl(&pool, &[node]), expected);
}

#[test]
fn prints_input_defaults_and_follows_references() {
    let mut pool = Pool::new();
    let child = pool.push(ObjectType::new("Child_Input", TypeMode::Input));
    pool[child].add_field(CompiledField::new("Value", TypeRef::Scalar(ScalarType::Int)));
    let parent = pool.push(ObjectType::new("Parent_Input", TypeMode::Input));
    let mut limit = CompiledField::new("Limit", TypeRef::Scalar(ScalarType::Int));
    limit.default_value = Some(json!(10));
    pool[parent].add_field(limit);
    pool[parent].add_field(CompiledField::new(
        "Children",
        TypeRef::list(TypeRef::Object(child)),
    ));

    let expected = "\
input Parent_Input {
  Limit: Int = 10
  Children: [Child_Input]
}

input Child_Input {
  Value: Int
}
";
    assert_eq!(print_sdl(&pool, &[parent]), expected);
}

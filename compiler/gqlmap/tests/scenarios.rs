//! End-to-end compilation of small record graphs.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use gqlmap::{
    CompileError, FetchError, FieldDescriptor, ObjectId, PrimitiveKind, Record, RecordDescriptor,
    RecordRef, ScalarType, SchemaCompiler, SubstitutionTable, TypeDesc, TypeMode, TypeRef,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

// ── Records ─────────────────────────────────────────────────────

/// `Node { Self: Option<Node>, Name: String }`
struct Node;

impl Record for Node {
    const NAME: &'static str = "Node";

    fn describe() -> RecordDescriptor {
        RecordDescriptor::new(Self::NAME)
            .field(FieldDescriptor::new(
                "Self",
                TypeDesc::optional(TypeDesc::record(RecordRef::of::<Node>())),
            ))
            .field(FieldDescriptor::new("Name", PrimitiveKind::String.into()))
    }
}

struct Empty;

impl Record for Empty {
    const NAME: &'static str = "Empty";

    fn describe() -> RecordDescriptor {
        RecordDescriptor::new(Self::NAME)
    }
}

struct Parent;

impl Record for Parent {
    const NAME: &'static str = "Parent";

    fn describe() -> RecordDescriptor {
        RecordDescriptor::new(Self::NAME).field(FieldDescriptor::new(
            "Children",
            TypeDesc::list(TypeDesc::record(RecordRef::of::<Child>())),
        ))
    }
}

struct Child;

impl Record for Child {
    const NAME: &'static str = "Child";

    fn describe() -> RecordDescriptor {
        RecordDescriptor::new(Self::NAME)
            .field(FieldDescriptor::new("Value", PrimitiveKind::Int.into()))
    }
}

/// `Tree { Kids: Vec<Tree>, Up: Option<Tree> required, Label: Option<String> }`
struct Tree;

impl Record for Tree {
    const NAME: &'static str = "Tree";

    fn describe() -> RecordDescriptor {
        let tree = || TypeDesc::record(RecordRef::of::<Tree>());
        RecordDescriptor::new(Self::NAME)
            .field(FieldDescriptor::new("Kids", TypeDesc::list(tree())))
            .field(FieldDescriptor::new("Up", TypeDesc::optional(tree())).tags(r#"required:"true""#))
            .field(FieldDescriptor::new(
                "Label",
                TypeDesc::optional(PrimitiveKind::String.into()),
            ))
    }
}

struct Holder;

impl Record for Holder {
    const NAME: &'static str = "Holder";

    fn describe() -> RecordDescriptor {
        RecordDescriptor::new(Self::NAME)
            .field(FieldDescriptor::new("Nothing", TypeDesc::record(RecordRef::of::<Empty>())))
            .field(
                FieldDescriptor::new("Owner", PrimitiveKind::String.into())
                    .tags(r#"description:"Who owns it." replaceTypeWith:"Other""#),
            )
            .field(FieldDescriptor::new("Count", PrimitiveKind::Int32.into()))
    }
}

struct Other;

impl Record for Other {
    const NAME: &'static str = "Other";

    fn describe() -> RecordDescriptor {
        RecordDescriptor::new(Self::NAME)
            .field(FieldDescriptor::new("Id", PrimitiveKind::Int64.into()))
    }
}

fn field_type(compiler: &SchemaCompiler, id: ObjectId, field: &str) -> TypeRef {
    compiler.object(id).field(field).unwrap().ty.clone()
}

fn no_stub_references(compiler: &SchemaCompiler) -> bool {
    let registry = compiler.registry();
    registry.all().all(|(_, object)| {
        object
            .fields
            .values()
            .filter_map(|f| f.ty.named())
            .all(|id| !registry.get(id).is_stub())
    })
}

// ── Scenarios ───────────────────────────────────────────────────

#[test]
fn self_referential_record() {
    let mut compiler = SchemaCompiler::new();
    let node = compiler.compile_output_record::<Node>().unwrap();

    assert_eq!(compiler.object(node).name, "Node");
    assert_eq!(field_type(&compiler, node, "Self"), TypeRef::Object(node));
    assert_eq!(
        field_type(&compiler, node, "Name"),
        TypeRef::Scalar(ScalarType::String)
    );
    assert!(no_stub_references(&compiler));
    assert!(compiler.last_patch().unwrap().is_clean());

    assert_eq!(
        compiler.sdl(&[node]),
        "type Node {\n  Self: Node\n  Name: String\n}\n"
    );
}

#[test]
fn empty_root_record() {
    let mut compiler = SchemaCompiler::new();
    let err = compiler.compile_output_record::<Empty>().unwrap_err();

    assert_eq!(
        err,
        CompileError::EmptyRecord {
            record: "Empty".to_string(),
            mode: TypeMode::Output,
        }
    );
    assert_eq!(err.to_string(), "record `Empty` has no mappable fields (output)");
    assert!(compiler.get_by_name("Empty").is_none());
}

#[test]
fn list_of_records_and_memoization() {
    let mut compiler = SchemaCompiler::new();
    let parent = compiler.compile_output_record::<Parent>().unwrap();
    let child = compiler.registry().lookup("Child", TypeMode::Output).unwrap();

    assert_eq!(
        field_type(&compiler, parent, "Children"),
        TypeRef::list(TypeRef::Object(child))
    );
    assert_eq!(
        field_type(&compiler, child, "Value"),
        TypeRef::Scalar(ScalarType::Int)
    );

    let registered = compiler.registry().len();
    let again = compiler.compile_output_record::<Parent>().unwrap();
    assert_eq!(again, parent);
    assert_eq!(compiler.registry().len(), registered);
}

#[test]
fn substitution_and_dropped_fields() {
    let mut compiler = SchemaCompiler::builder()
        .substitution(SubstitutionTable::new().with("Other", RecordRef::of::<Other>()))
        .build();
    let holder = compiler.compile_output_record::<Holder>().unwrap();
    let other = compiler.get_by_name("Other").unwrap();

    let names: Vec<_> = compiler.object(holder).fields.keys().cloned().collect();
    assert_eq!(names, vec!["Owner", "Count"]);
    assert_eq!(other.field("Id").unwrap().ty, TypeRef::Scalar(ScalarType::Int64));

    let owner = compiler.object(holder).field("Owner").unwrap();
    assert_eq!(owner.ty.named().map(|id| compiler.object(id).name.as_str()), Some("Other"));
    assert_eq!(owner.description.as_deref(), Some("Who owns it."));
}

#[test]
fn list_cycle_and_required() {
    let mut compiler = SchemaCompiler::new();
    let tree = compiler.compile_output_record::<Tree>().unwrap();

    assert_eq!(
        field_type(&compiler, tree, "Kids"),
        TypeRef::list(TypeRef::Object(tree))
    );
    assert_eq!(
        field_type(&compiler, tree, "Up"),
        TypeRef::non_null(TypeRef::Object(tree))
    );
    assert_eq!(
        field_type(&compiler, tree, "Label"),
        TypeRef::Scalar(ScalarType::String)
    );
    assert_eq!(compiler.last_patch().unwrap().patched, 2);
    assert!(no_stub_references(&compiler));
}

#[test]
fn input_and_output_coexist() {
    let mut compiler = SchemaCompiler::new();
    let output = compiler.compile_output_record::<Tree>().unwrap();
    let input = compiler.compile_input_record::<Tree>().unwrap();

    assert_ne!(output, input);
    assert_eq!(compiler.object(input).name, "Tree_Input");
    assert_eq!(
        field_type(&compiler, input, "Kids"),
        TypeRef::list(TypeRef::Object(input))
    );
    assert_eq!(
        compiler.sdl(&[input]),
        "input Tree_Input {\n  Kids: [Tree_Input]\n  Up: Tree_Input!\n  Label: String\n}\n"
    );
}

#[test]
fn by_reference_fields_fetch_on_resolve() {
    struct Datacenter;

    impl Record for Datacenter {
        const NAME: &'static str = "Datacenter";

        fn describe() -> RecordDescriptor {
            RecordDescriptor::new(Self::NAME)
                .field(FieldDescriptor::new("Name", PrimitiveKind::String.into()))
                .field(FieldDescriptor::new(
                    "Hosts",
                    TypeDesc::list(TypeDesc::reference(RecordRef::of::<Child>())),
                ))
        }
    }

    let mut compiler = SchemaCompiler::builder()
        .reference_fetcher(|handles: &[Value]| {
            Ok::<Vec<Value>, FetchError>(handles.iter().map(|h| json!({ "Value": h })).collect())
        })
        .build();
    let dc = compiler.compile_output_record::<Datacenter>().unwrap();
    let hosts = compiler.object(dc).field("Hosts").unwrap();

    assert_eq!(
        hosts.resolve(&json!({ "Hosts": [1, 2] })).unwrap(),
        json!([{ "Value": 1 }, { "Value": 2 }])
    );
    let name = compiler.object(dc).field("Name").unwrap();
    assert_eq!(name.resolve(&json!({ "Name": "dc-1" })).unwrap(), json!("dc-1"));
}

#[test]
fn non_record_root_is_rejected() {
    let mut compiler = SchemaCompiler::new();
    assert_eq!(
        compiler.compile_output(&TypeDesc::list(TypeDesc::record(RecordRef::of::<Node>()))),
        Err(CompileError::InputKind { found: "list" })
    );
    assert!(compiler.registry().is_empty());
}

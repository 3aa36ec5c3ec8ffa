use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use pretty_assertions::assert_eq;

use crate::PrimitiveKind;

use super::*;

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

#[test]
fn self_referential_record_describes_lazily() {
    let node = RecordRef::of::<Node>();
    assert_eq!(node.name(), "Node");

    let descriptor = node.describe();
    assert_eq!(descriptor.fields.len(), 2);
    assert!(descriptor.fields[0].is_nullable());
    assert_eq!(descriptor.fields[0].ty.type_name(), "Node");
    assert!(!descriptor.fields[1].is_nullable());
}

fn handle_for<T: Record>() -> RecordRef {
    RecordRef::of::<T>()
}

#[test]
fn generic_callers_can_build_handles() {
    let node = handle_for::<Node>();
    assert_eq!(node, RecordRef::of::<Node>());
    assert_eq!(node.describe().name, "Node");
}

#[test]
fn describe_runs_on_every_call() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let record = RecordRef::new("Counted", move || {
        counter.fetch_add(1, Ordering::SeqCst);
        RecordDescriptor::new("Counted")
    });

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    record.describe();
    record.describe();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn from_descriptor_returns_equal_copies() {
    let descriptor = RecordDescriptor::new("Child")
        .field(FieldDescriptor::new("Value", PrimitiveKind::Int.into()).description("a value"));
    let record = RecordRef::from_descriptor(descriptor.clone());

    assert_eq!(record.name(), "Child");
    assert_eq!(record.describe(), descriptor);
}

#[test]
fn builder_annotations() {
    let field = FieldDescriptor::new("Browser", TypeDesc::optional(PrimitiveKind::String.into()))
        .description("DatastoreBrowser used to browse this datastore.")
        .required(true)
        .substitute("HostDatastoreBrowser");

    assert_eq!(
        field.annotations,
        FieldAnnotations {
            description: Some("DatastoreBrowser used to browse this datastore.".to_string()),
            required: true,
            substitute: Some("HostDatastoreBrowser".to_string()),
        }
    );

    let tagged = FieldDescriptor::new("Vm", PrimitiveKind::String.into())
        .tags(r#"replaceTypeWith:"VirtualMachine" required:"false""#);
    assert_eq!(tagged.annotations.substitute.as_deref(), Some("VirtualMachine"));
    assert!(!tagged.annotations.required);
}

#[test]
fn debug_shows_only_the_name() {
    assert_eq!(format!("{:?}", RecordRef::of::<Node>()), r#"RecordRef("Node")"#);
}

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn parses_all_known_keys() {
    let annotations = FieldAnnotations::from_tags(
        r#"mo:"vm" replaceTypeWith:"VirtualMachine" required:"true" description:"Virtual machines stored here.""#,
    );

    assert_eq!(
        annotations,
        FieldAnnotations {
            description: Some("Virtual machines stored here.".to_string()),
            required: true,
            substitute: Some("VirtualMachine".to_string()),
        }
    );
}

#[test]
fn required_is_only_true_for_literal_true() {
    assert!(!FieldAnnotations::from_tags(r#"required:"false""#).required);
    assert!(!FieldAnnotations::from_tags(r#"required:"yes""#).required);
    assert!(FieldAnnotations::from_tags(r#"required:"true""#).required);
}

#[test]
fn empty_substitute_is_ignored() {
    let annotations = FieldAnnotations::from_tags(r#"replaceTypeWith:"""#);
    assert_eq!(annotations.substitute, None);
}

#[test]
fn escapes_are_decoded() {
    let annotations = FieldAnnotations::from_tags(r#"description:"line one\nsays \"hi\"""#);
    assert_eq!(
        annotations.description.as_deref(),
        Some("line one\nsays \"hi\"")
    );
}

#[test]
fn malformed_tail_keeps_earlier_pairs() {
    let annotations = FieldAnnotations::from_tags(r#"description:"kept" required:true"#);
    assert_eq!(annotations.description.as_deref(), Some("kept"));
    assert!(!annotations.required);
}

#[test]
fn unterminated_value_is_dropped() {
    let annotations = FieldAnnotations::from_tags(r#"description:"never closed"#);
    assert_eq!(annotations, FieldAnnotations::default());
}

#[test]
fn empty_tags_yield_defaults() {
    assert_eq!(FieldAnnotations::from_tags("   "), FieldAnnotations::default());
}

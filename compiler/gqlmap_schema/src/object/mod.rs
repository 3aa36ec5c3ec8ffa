//! Object types and their fields.

use std::fmt;

use indexmap::IndexMap;
use serde_json::Value;

use crate::{ResolveError, ResolveParams, Resolver, TypeRef};

/// Suffix that keeps the input definition of a record distinct from its
/// output definition.
pub const INPUT_SUFFIX: &str = "_Input";

/// Direction of a compiled type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeMode {
    /// Object types returned by queries.
    Output,
    /// Input object types accepted as arguments.
    Input,
}

impl TypeMode {
    /// The schema name under which `record` is registered in this mode.
    pub fn type_name(self, record: &str) -> String {
        match self {
            TypeMode::Output => record.to_string(),
            TypeMode::Input => format!("{record}{INPUT_SUFFIX}"),
        }
    }

    pub const fn keyword(self) -> &'static str {
        match self {
            TypeMode::Output => "type",
            TypeMode::Input => "input",
        }
    }
}

impl fmt::Display for TypeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeMode::Output => f.write_str("output"),
            TypeMode::Input => f.write_str("input"),
        }
    }
}

/// One field of an object type.
#[derive(Clone, Debug)]
pub struct CompiledField {
    pub name: String,
    pub ty: TypeRef,
    pub description: Option<String>,
    /// Custom value resolution. Without one the field reads the property of
    /// the same name from its parent value.
    pub resolver: Option<Resolver>,
    pub deprecation: Option<String>,
    /// Default for input fields; unused on output fields.
    pub default_value: Option<Value>,
}

impl CompiledField {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            description: None,
            resolver: None,
            deprecation: None,
            default_value: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    #[must_use]
    pub fn with_resolver(mut self, resolver: Option<Resolver>) -> Self {
        self.resolver = resolver;
        self
    }

    /// Produce this field's value from its parent value.
    pub fn resolve(&self, source: &Value) -> Result<Value, ResolveError> {
        let params = ResolveParams {
            source,
            field_name: &self.name,
        };
        match &self.resolver {
            Some(resolver) => resolver.resolve(&params),
            None => Ok(params.property().cloned().unwrap_or(Value::Null)),
        }
    }
}

/// A compiled object (or input object) type.
#[derive(Clone, Debug)]
pub struct ObjectType {
    pub name: String,
    pub mode: TypeMode,
    pub description: Option<String>,
    /// Fields in record declaration order.
    pub fields: IndexMap<String, CompiledField>,
    /// For placeholder types: the registered name of the record the stub
    /// stands in for.
    pub stub_of: Option<String>,
}

impl ObjectType {
    pub fn new(name: impl Into<String>, mode: TypeMode) -> Self {
        Self {
            name: name.into(),
            mode,
            description: None,
            fields: IndexMap::new(),
            stub_of: None,
        }
    }

    pub fn is_stub(&self) -> bool {
        self.stub_of.is_some()
    }

    pub fn field(&self, name: &str) -> Option<&CompiledField> {
        self.fields.get(name)
    }

    /// Insert a field, replacing any previous field of the same name in
    /// place.
    pub fn add_field(&mut self, field: CompiledField) {
        self.fields.insert(field.name.clone(), field);
    }

    /// Set the description of an existing field.
    ///
    /// Meant for records owned by other code whose definitions carry no
    /// description annotation. Returns `false` when the field does not exist.
    pub fn set_description(&mut self, field_name: &str, description: impl Into<String>) -> bool {
        match self.fields.get_mut(field_name) {
            Some(field) => {
                field.description = Some(description.into());
                true
            }
            None => {
                tracing::warn!(object = %self.name, field = field_name, "no such field to describe");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests;

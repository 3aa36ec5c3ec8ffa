//! Field classification.
//!
//! Maps one declared field to a compiled field. Classification order:
//!
//! 1. strip one optional level, remembering it for `required`;
//! 2. special types map to their dedicated scalars;
//! 3. a resolved substitution replaces the declared record (or list
//!    element);
//! 4. records compile recursively;
//! 5. lists classify their element and wrap it;
//! 6. polymorphic types use their first operation's return type, or `Any`;
//! 7. primitives go through [`scalar_for`].

use std::sync::Arc;

use gqlmap_ir::{FieldDescriptor, InterfaceDesc, RecordRef, TypeDesc};
use gqlmap_schema::{CompiledField, Resolver, ScalarType, TypeMode, TypeRef};

use super::SchemaCompiler;
use crate::{deref_resolver, scalar_for, special_scalar, CompilationContext, CompileError};

impl SchemaCompiler {
    /// Compile one field. An error means the field is dropped from its
    /// record.
    pub(super) fn map_field(
        &mut self,
        field: &FieldDescriptor,
        ctx: &mut CompilationContext,
    ) -> Result<CompiledField, CompileError> {
        let annotations = &field.annotations;
        let (declared, optional) = field.ty.strip_optional();

        let substitute = annotations.substitute.as_deref().and_then(|name| {
            let found = self.substitution.get_type(name);
            if found.is_none() {
                tracing::debug!(field = %field.name, name, "no substitute type; keeping declared type");
            }
            found
        });

        let mut ty = self.classify(declared, substitute.as_ref(), ctx)?;
        // `required` only tightens fields that were declared optional.
        if optional && annotations.required {
            ty = TypeRef::non_null(ty);
        }

        let mut compiled = CompiledField::new(&field.name, ty)
            .with_description(annotations.description.clone());
        if ctx.mode() == TypeMode::Output {
            compiled.resolver = self.select_resolver(field, declared);
        }
        Ok(compiled)
    }

    fn classify(
        &mut self,
        desc: &TypeDesc,
        substitute: Option<&RecordRef>,
        ctx: &mut CompilationContext,
    ) -> Result<TypeRef, CompileError> {
        match (desc, substitute) {
            (TypeDesc::Special(special), _) => Ok(TypeRef::Scalar(special_scalar(*special))),
            (TypeDesc::List(elem), _) => self.classify_list(elem, substitute, ctx),
            (_, Some(record)) => self.compile_nested(record, ctx),
            (TypeDesc::Record(record) | TypeDesc::Reference(record), None) => {
                self.compile_nested(record, ctx)
            }
            (TypeDesc::Polymorphic(iface), None) => self.classify_polymorphic(iface, ctx),
            (TypeDesc::Primitive(kind), None) => Ok(TypeRef::Scalar(scalar_for(*kind))),
            (TypeDesc::Optional(inner), None) => self.classify(inner, None, ctx),
        }
    }

    fn compile_nested(
        &mut self,
        record: &RecordRef,
        ctx: &mut CompilationContext,
    ) -> Result<TypeRef, CompileError> {
        self.compile_record(record, ctx).map(TypeRef::Object)
    }

    fn classify_list(
        &mut self,
        elem: &TypeDesc,
        substitute: Option<&RecordRef>,
        ctx: &mut CompilationContext,
    ) -> Result<TypeRef, CompileError> {
        let (elem, _) = elem.strip_optional();
        if let TypeDesc::List(_) = elem {
            tracing::warn!("nested lists are not supported; mapping elements to String");
            return Ok(TypeRef::list(TypeRef::Scalar(ScalarType::String)));
        }
        self.classify(elem, substitute, ctx).map(TypeRef::list)
    }

    /// Only the first declared operation is considered. Interfaces exposing
    /// several operations with different return types are mapped lossily.
    fn classify_polymorphic(
        &mut self,
        iface: &InterfaceDesc,
        ctx: &mut CompilationContext,
    ) -> Result<TypeRef, CompileError> {
        let Some(op) = iface.first_operation() else {
            return Ok(TypeRef::Scalar(ScalarType::Any));
        };
        if iface.operations.len() > 1 {
            tracing::debug!(
                interface = %iface.name,
                operation = %op.name,
                "interface has several operations; using the first"
            );
        }
        match &op.returns {
            Some(returns) => self.classify(returns.strip_optional().0, None, ctx),
            None => Ok(TypeRef::Scalar(ScalarType::Any)),
        }
    }

    fn select_resolver(&self, field: &FieldDescriptor, declared: &TypeDesc) -> Option<Resolver> {
        let substituted = field.annotations.substitute.as_deref().unwrap_or_default();
        if let Some(resolver) = self
            .resolver_finder
            .get_resolver(field.ty.type_name(), substituted)
        {
            return Some(resolver);
        }
        let fetcher = self.reference_fetcher.as_ref()?;
        is_reference(declared).then(|| deref_resolver(Arc::clone(fetcher)))
    }
}

/// Whether the field holds record handles, directly or as list elements.
fn is_reference(desc: &TypeDesc) -> bool {
    match desc {
        TypeDesc::Reference(_) => true,
        TypeDesc::List(elem) => is_reference(elem.strip_optional().0),
        _ => false,
    }
}

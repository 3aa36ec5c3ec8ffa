//! Schema definition language rendering.

use std::collections::VecDeque;
use std::fmt::Write;

use rustc_hash::FxHashSet;

use crate::{CompiledField, ObjectId, ObjectType, Pool, ScalarType};

/// Render every object reachable from `roots` as SDL.
///
/// Objects appear in breadth-first discovery order, preceded by declarations
/// for the custom scalars they use. A stub object is only reachable, and so
/// only printed, when a reference to it was never patched.
pub fn print_sdl(pool: &Pool, roots: &[ObjectId]) -> String {
    let order = reachable(pool, roots);

    let mut scalars: Vec<ScalarType> = Vec::new();
    for &id in &order {
        for field in pool[id].fields.values() {
            if let Some(scalar) = field.ty.scalar() {
                if !scalar.is_builtin() && !scalars.contains(&scalar) {
                    scalars.push(scalar);
                }
            }
        }
    }

    let mut out = String::new();
    for scalar in scalars {
        if let Some(description) = scalar.description() {
            write_description(&mut out, "", description);
        }
        let _ = writeln!(out, "scalar {}", scalar.name());
        out.push('\n');
    }
    for id in order {
        write_object(&mut out, pool, &pool[id]);
        out.push('\n');
    }
    out.truncate(out.trim_end().len());
    out.push('\n');
    out
}

fn reachable(pool: &Pool, roots: &[ObjectId]) -> Vec<ObjectId> {
    let mut seen = FxHashSet::default();
    let mut queue: VecDeque<ObjectId> = roots.iter().copied().collect();
    let mut order = Vec::new();

    while let Some(id) = queue.pop_front() {
        if !seen.insert(id) {
            continue;
        }
        order.push(id);
        queue.extend(pool[id].fields.values().filter_map(|f| f.ty.named()));
    }
    order
}

fn write_object(out: &mut String, pool: &Pool, object: &ObjectType) {
    if let Some(description) = &object.description {
        write_description(out, "", description);
    }
    let _ = writeln!(out, "{} {} {{", object.mode.keyword(), object.name);
    for field in object.fields.values() {
        write_field(out, pool, field);
    }
    out.push_str("}\n");
}

fn write_field(out: &mut String, pool: &Pool, field: &CompiledField) {
    if let Some(description) = &field.description {
        write_description(out, "  ", description);
    }
    let _ = write!(out, "  {}: {}", field.name, field.ty.display(pool));
    if let Some(default) = &field.default_value {
        let _ = write!(out, " = {default}");
    }
    if let Some(reason) = &field.deprecation {
        let _ = write!(out, " @deprecated(reason: {})", quote(reason));
    }
    out.push('\n');
}

fn write_description(out: &mut String, indent: &str, text: &str) {
    let _ = writeln!(out, "{indent}\"\"\"");
    for line in text.lines() {
        let line = line.replace("\"\"\"", "\\\"\"\"");
        if line.is_empty() {
            out.push('\n');
        } else {
            let _ = writeln!(out, "{indent}{line}");
        }
    }
    let _ = writeln!(out, "{indent}\"\"\"");
}

fn quote(text: &str) -> String {
    serde_json::Value::String(text.to_string()).to_string()
}

#[cfg(test)]
mod tests;

//! Deferred placeholder resolution.
//!
//! Runs once per root compile call, after the outermost record is
//! registered. A single linear pass over every field of every registered
//! object: fields whose core type is a placeholder are redirected to the
//! canonical object of the placeholder's record. It never compiles anything.

use rustc_hash::FxHashMap;

use gqlmap_schema::ObjectId;

use crate::{TypeRegistry, UnresolvedStub};

/// Outcome of one patch pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PatchReport {
    /// Fields redirected from a placeholder to its canonical object.
    pub patched: usize,
    /// Fields whose placeholder has no canonical object.
    pub unresolved: Vec<UnresolvedStub>,
}

impl PatchReport {
    pub fn is_clean(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Redirect every placeholder reference in `registry`.
///
/// The `List` / `NonNull` wrapping of each reference is kept, as are the
/// field's description, resolver, deprecation and default. Placeholders
/// without a canonical object are left in place and reported.
#[tracing::instrument(level = "debug", skip_all, fields(objects = registry.len()))]
pub fn patch_stubs(registry: &mut TypeRegistry) -> PatchReport {
    // placeholder -> canonical object, if the record was registered
    let targets: FxHashMap<ObjectId, Option<ObjectId>> = registry
        .all()
        .filter_map(|(id, object)| {
            let record = object.stub_of.as_deref()?;
            Some((id, registry.lookup(record, object.mode)))
        })
        .collect();

    let mut report = PatchReport::default();
    if targets.is_empty() {
        return report;
    }

    let ids: Vec<ObjectId> = registry.pool().ids().collect();
    for id in ids {
        let mut unresolved = Vec::new();
        let pool = registry.pool_mut();
        let object = &mut pool[id];
        for field in object.fields.values_mut() {
            let Some(stub) = field.ty.named() else {
                continue;
            };
            match targets.get(&stub) {
                None => {}
                Some(Some(canonical)) => {
                    field.ty = field.ty.with_named(*canonical);
                    report.patched += 1;
                }
                Some(None) => unresolved.push((field.name.clone(), stub)),
            }
        }
        let object_name = object.name.clone();

        for (field, stub) in unresolved {
            let issue = UnresolvedStub {
                object: object_name.clone(),
                field,
                stub: registry.get(stub).name.clone(),
            };
            tracing::warn!(%issue, "placeholder has no canonical type");
            report.unresolved.push(issue);
        }
    }

    tracing::debug!(patched = report.patched, unresolved = report.unresolved.len(), "patch pass done");
    report
}

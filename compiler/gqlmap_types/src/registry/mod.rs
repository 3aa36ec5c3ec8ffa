//! Memoized store of compiled object types.
//!
//! The `TypeRegistry` owns the [`Pool`] of one schema build and indexes its
//! objects two ways:
//!
//! - by record name and [`TypeMode`], the memoization key the compiler
//!   consults before doing any work;
//! - by registered schema name (`Node`, `Node_Input`), for callers that only
//!   know what the schema calls a type.
//!
//! Placeholders live in their own per-mode maps, keyed by the record they
//! stand in for. [`TypeRegistry::lookup`] never returns a placeholder, so a
//! real record whose name happens to end in `Stub` cannot collide with one.
//!
//! Entries are never evicted. Building a second, independent schema needs a
//! fresh registry.

use rustc_hash::FxHashMap;

use gqlmap_schema::{ObjectId, ObjectType, Pool, TypeMode};

/// Memoization store for one schema build.
#[derive(Clone, Debug, Default)]
pub struct TypeRegistry {
    pool: Pool,
    output: FxHashMap<String, ObjectId>,
    input: FxHashMap<String, ObjectId>,
    /// Record name -> placeholder, per mode.
    output_stubs: FxHashMap<String, ObjectId>,
    input_stubs: FxHashMap<String, ObjectId>,
    /// Registered schema name -> object. Real objects shadow placeholders.
    by_type_name: FxHashMap<String, ObjectId>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The object registered for `record` in `mode`, if any.
    pub fn lookup(&self, record: &str, mode: TypeMode) -> Option<ObjectId> {
        self.keys(mode).get(record).copied()
    }

    /// Register `object` as the type of `record` in `mode`.
    ///
    /// The first registration wins. A repeat registration leaves the
    /// registry unchanged and returns the existing handle, warning if the
    /// rejected definition differs from the stored one.
    pub fn register(&mut self, record: &str, mode: TypeMode, object: ObjectType) -> ObjectId {
        if let Some(existing) = self.lookup(record, mode) {
            if same_shape(&self.pool[existing], &object) {
                tracing::debug!(record, %mode, "already registered");
            } else {
                tracing::warn!(
                    record,
                    %mode,
                    "record already registered with a different shape; keeping the first definition"
                );
            }
            return existing;
        }

        let type_name = object.name.clone();
        let id = self.pool.push(object);
        self.keys_mut(mode).insert(record.to_string(), id);
        self.by_type_name.insert(type_name, id);
        id
    }

    /// The placeholder standing in for `record` in `mode`, if any.
    pub fn stub(&self, record: &str, mode: TypeMode) -> Option<ObjectId> {
        self.stub_keys(mode).get(record).copied()
    }

    /// Register `stub` as the placeholder of `record` in `mode`.
    ///
    /// The first placeholder wins. It is indexed by schema name only while no
    /// real object claims that name.
    pub fn register_stub(&mut self, record: &str, mode: TypeMode, stub: ObjectType) -> ObjectId {
        if let Some(existing) = self.stub(record, mode) {
            return existing;
        }

        let type_name = stub.name.clone();
        let id = self.pool.push(stub);
        self.stub_keys_mut(mode).insert(record.to_string(), id);
        self.by_type_name.entry(type_name).or_insert(id);
        id
    }

    /// Look up an object by the name the schema gives it.
    pub fn get_by_name(&self, type_name: &str) -> Option<ObjectId> {
        self.by_type_name.get(type_name).copied()
    }

    /// Every registered object with its handle, in registration order.
    pub fn all(&self) -> impl Iterator<Item = (ObjectId, &ObjectType)> {
        self.pool.iter()
    }

    pub fn get(&self, id: ObjectId) -> &ObjectType {
        &self.pool[id]
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    pub fn pool(&self) -> &Pool {
        &self.pool
    }

    pub(crate) fn pool_mut(&mut self) -> &mut Pool {
        &mut self.pool
    }

    pub fn into_pool(self) -> Pool {
        self.pool
    }

    fn keys(&self, mode: TypeMode) -> &FxHashMap<String, ObjectId> {
        match mode {
            TypeMode::Output => &self.output,
            TypeMode::Input => &self.input,
        }
    }

    fn keys_mut(&mut self, mode: TypeMode) -> &mut FxHashMap<String, ObjectId> {
        match mode {
            TypeMode::Output => &mut self.output,
            TypeMode::Input => &mut self.input,
        }
    }

    fn stub_keys(&self, mode: TypeMode) -> &FxHashMap<String, ObjectId> {
        match mode {
            TypeMode::Output => &self.output_stubs,
            TypeMode::Input => &self.input_stubs,
        }
    }

    fn stub_keys_mut(&mut self, mode: TypeMode) -> &mut FxHashMap<String, ObjectId> {
        match mode {
            TypeMode::Output => &mut self.output_stubs,
            TypeMode::Input => &mut self.input_stubs,
        }
    }
}

/// Whether two objects declare the same fields with the same types.
fn same_shape(a: &ObjectType, b: &ObjectType) -> bool {
    a.fields.len() == b.fields.len()
        && a
            .fields
            .iter()
            .zip(&b.fields)
            .all(|((name_a, fa), (name_b, fb))| name_a == name_b && fa.ty == fb.ty)
}

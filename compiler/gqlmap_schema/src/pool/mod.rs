//! Arena of compiled object types.

use std::ops::{Index, IndexMut};

use crate::{ObjectId, ObjectType};

/// Owns every object type of one schema build.
///
/// Objects are never removed, so an [`ObjectId`] stays valid for the pool's
/// lifetime. A pool holds at most `u32::MAX` objects.
#[derive(Clone, Debug, Default)]
pub struct Pool {
    objects: Vec<ObjectType>,
}

impl Pool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an object and return its handle.
    pub fn push(&mut self, object: ObjectType) -> ObjectId {
        let id = ObjectId::from_raw(raw_index(self.objects.len()));
        self.objects.push(object);
        id
    }

    pub fn get(&self, id: ObjectId) -> Option<&ObjectType> {
        self.objects.get(id.index())
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut ObjectType> {
        self.objects.get_mut(id.index())
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Every object with its handle, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &ObjectType)> {
        self.objects
            .iter()
            .enumerate()
            .map(|(i, object)| (ObjectId::from_raw(raw_index(i)), object))
    }

    /// Every handle, in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = ObjectId> {
        (0..self.objects.len()).map(|i| ObjectId::from_raw(raw_index(i)))
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "pools hold at most u32::MAX objects"
)]
fn raw_index(i: usize) -> u32 {
    i as u32
}

impl Index<ObjectId> for Pool {
    type Output = ObjectType;

    fn index(&self, id: ObjectId) -> &ObjectType {
        &self.objects[id.index()]
    }
}

impl IndexMut<ObjectId> for Pool {
    fn index_mut(&mut self, id: ObjectId) -> &mut ObjectType {
        &mut self.objects[id.index()]
    }
}

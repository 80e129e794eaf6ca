//! Entity identity and repository storage.
//!
//! Every schedulable entity carries an opaque numeric identifier (its
//! oid) and lives in a `Repository`: an insertion-ordered map from oid
//! to entity. Insertion order is part of the contract because
//! dedication matrix rows and columns are addressed by repository
//! position.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Opaque entity identifier.
pub type Oid = u64;

/// Numeric skill identifier.
pub type SkillId = u32;

/// An identifiable entity that can be stored in a `Repository`.
pub trait Entity {
    /// The immutable identifier of this entity.
    fn oid(&self) -> Oid;
}

/// Insertion-ordered map from oid to entity.
///
/// Re-adding an entity under an existing oid overwrites the stored
/// entity but keeps its original insertion position, so positional
/// indices handed out for matrix addressing stay stable across
/// replacement. Entities are never removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository<T> {
    entries: HashMap<Oid, T>,
    order: Vec<Oid>,
}

impl<T> Default for Repository<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<T: Entity> Repository<T> {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entity under its own oid.
    ///
    /// Returns the previously stored entity if the oid was already
    /// present (overwrite semantics).
    pub fn add(&mut self, entity: T) -> Option<T> {
        let oid = entity.oid();
        let previous = self.entries.insert(oid, entity);
        if previous.is_none() {
            self.order.push(oid);
        }
        previous
    }

    /// Looks up an entity by oid.
    pub fn get(&self, oid: Oid) -> Option<&T> {
        self.entries.get(&oid)
    }

    /// Looks up an entity by oid, mutably.
    pub fn get_mut(&mut self, oid: Oid) -> Option<&mut T> {
        self.entries.get_mut(&oid)
    }

    /// Whether an entity with the given oid is stored.
    pub fn contains(&self, oid: Oid) -> bool {
        self.entries.contains_key(&oid)
    }

    /// Number of stored entities (unique oids).
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the repository is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates entities in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.order.iter().filter_map(|oid| self.entries.get(oid))
    }

    /// Iterates stored oids in insertion order.
    pub fn oids(&self) -> impl Iterator<Item = Oid> + '_ {
        self.order.iter().copied()
    }

    /// Insertion-order position of an oid.
    ///
    /// This is the row/column index the entity occupies in a
    /// dedication matrix created while it is registered.
    pub fn index_of(&self, oid: Oid) -> Option<usize> {
        self.order.iter().position(|&o| o == oid)
    }
}

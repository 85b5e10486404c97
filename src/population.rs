//! Population registry: the ordered collection of live lifeforms.
//!
//! The registry owns lifeform lifetimes; grid cells only hold handles.
//! Handles are never reused, so a stale handle from an earlier snapshot
//! simply fails to resolve instead of aliasing a newer lifeform.

use crate::lifeform::{Lifeform, LifeformId};
use std::collections::HashMap;

/// Insertion-ordered registry of live lifeforms
#[derive(Clone, Debug, Default)]
pub struct Population {
    members: HashMap<LifeformId, Lifeform>,
    order: Vec<LifeformId>,
    next_id: LifeformId,
}

impl Population {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a lifeform, assigning it a fresh handle
    pub fn add(&mut self, mut lifeform: Lifeform) -> LifeformId {
        let id = self.next_id;
        self.next_id += 1;
        lifeform.id = id;
        self.members.insert(id, lifeform);
        self.order.push(id);
        id
    }

    /// Remove a lifeform from the registry, returning it if it was a member
    pub fn remove(&mut self, id: LifeformId) -> Option<Lifeform> {
        let removed = self.members.remove(&id)?;
        self.order.retain(|&member| member != id);
        Some(removed)
    }

    /// Look up a live lifeform
    #[inline]
    pub fn get(&self, id: LifeformId) -> Option<&Lifeform> {
        self.members.get(&id)
    }

    /// Look up a live lifeform mutably
    #[inline]
    pub fn get_mut(&mut self, id: LifeformId) -> Option<&mut Lifeform> {
        self.members.get_mut(&id)
    }

    /// Whether the handle refers to a live member
    #[inline]
    pub fn contains(&self, id: LifeformId) -> bool {
        self.members.contains_key(&id)
    }

    /// Number of live members
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the registry is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Stable copy of the current membership, in insertion order.
    ///
    /// Safe to iterate while the live registry is mutated: members added
    /// afterwards are not in the copy, and removed members resolve to `None`
    /// on lookup.
    pub fn snapshot(&self) -> Vec<LifeformId> {
        self.order.clone()
    }

    /// Iterate live members in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Lifeform> {
        self.order.iter().filter_map(move |id| self.members.get(id))
    }
}

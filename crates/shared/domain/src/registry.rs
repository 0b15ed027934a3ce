//! Uniqueness-enforcing registry keyed by entity identifier.

use std::collections::hash_map::{Entry, HashMap};

use crate::error::{DomainError, DomainResult, OptionExt};

/// Entity that can be stored in a [`Registry`].
pub trait Identified {
    /// Human-readable entity name used in error messages
    const LABEL: &'static str;

    /// Identifier, unique within a registry. Lookups ignore surrounding
    /// whitespace, so implementors store it trimmed.
    fn id(&self) -> &str;
}

/// Mapping from identifier to entity.
///
/// Entities are stored once; `find` and `find_mut` hand out references to the
/// stored instance, never copies.
#[derive(Debug, Clone)]
pub struct Registry<E> {
    entries: HashMap<String, E>,
}

impl<E> Default for Registry<E> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<E: Identified> Registry<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an entity.
    ///
    /// # Errors
    /// `DuplicateKey` if the identifier is taken; the stored entity is left untouched.
    pub fn add(&mut self, entity: E) -> DomainResult<()> {
        match self.entries.entry(entity.id().trim().to_string()) {
            Entry::Occupied(slot) => Err(DomainError::duplicate_key(format!(
                "{} {} already exists",
                E::LABEL,
                slot.key()
            ))),
            Entry::Vacant(slot) => {
                slot.insert(entity);
                Ok(())
            }
        }
    }

    /// Look up an entity by identifier
    pub fn find(&self, id: &str) -> DomainResult<&E> {
        self.entries.get(id.trim()).ok_or_not_found(|| Self::missing(id))
    }

    /// Look up an entity for mutation
    pub fn find_mut(&mut self, id: &str) -> DomainResult<&mut E> {
        self.entries.get_mut(id.trim()).ok_or_not_found(|| Self::missing(id))
    }

    /// Remove and return an entity
    pub fn remove(&mut self, id: &str) -> DomainResult<E> {
        self.entries.remove(id.trim()).ok_or_not_found(|| Self::missing(id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id.trim())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over stored entities in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.entries.values()
    }

    fn missing(id: &str) -> String {
        format!("{} {} not found", E::LABEL, id.trim())
    }
}

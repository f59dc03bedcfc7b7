use crate::models::mod_dto::{ModRecord, UpdatedMod};
use serde::{Deserialize, Serialize};

/// Differences between two modpack versions. Every list is sorted by its display line.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ChangeSet {
    pub added: Vec<ModRecord>,
    pub removed: Vec<ModRecord>,
    pub updated: Vec<UpdatedMod>,
}

impl ChangeSet {
    pub fn new(
        mut added: Vec<ModRecord>,
        mut removed: Vec<ModRecord>,
        mut updated: Vec<UpdatedMod>,
    ) -> Self {
        added.sort_by_cached_key(ModRecord::display_line);
        removed.sort_by_cached_key(ModRecord::display_line);
        updated.sort_by_cached_key(UpdatedMod::display_line);
        Self {
            added,
            removed,
            updated,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.updated.is_empty()
    }
}

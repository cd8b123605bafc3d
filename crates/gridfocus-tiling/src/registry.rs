//! Mapping from logical grid slots to the host's physical group ids.

use std::collections::BTreeMap;

use gridfocus_common::GroupId;
use serde::Serialize;
use tracing::debug;

use crate::slot::LogicalSlot;

/// Logical slot -> physical group id, at most one entry per slot.
///
/// Ids are kept pairwise distinct: assigning an id that another slot already
/// holds evicts that other slot. Entries whose group has disappeared are only
/// removed when [`SlotRegistry::prune`] runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SlotRegistry {
    entries: BTreeMap<LogicalSlot, GroupId>,
}

impl SlotRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: LogicalSlot) -> Option<GroupId> {
        self.entries.get(&slot).copied()
    }

    pub fn has(&self, slot: LogicalSlot) -> bool {
        self.entries.contains_key(&slot)
    }

    pub fn set(&mut self, slot: LogicalSlot, id: GroupId) {
        let holder = self
            .entries
            .iter()
            .find(|(other, other_id)| **other != slot && **other_id == id)
            .map(|(other, _)| *other);
        if let Some(other) = holder {
            debug!(%slot, %other, %id, "group id reassigned, evicting previous slot");
            self.entries.remove(&other);
        }
        self.entries.insert(slot, id);
    }

    pub fn delete(&mut self, slot: LogicalSlot) -> Option<GroupId> {
        self.entries.remove(&slot)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (LogicalSlot, GroupId)> + '_ {
        self.entries.iter().map(|(slot, id)| (*slot, *id))
    }

    /// Discard every entry and install `mapping` instead.
    pub fn replace_with(&mut self, mapping: &[(LogicalSlot, GroupId)]) {
        self.entries.clear();
        for &(slot, id) in mapping {
            self.set(slot, id);
        }
    }

    /// Drop entries whose group is not in `live`. Returns the removed slots.
    pub fn prune(&mut self, live: &[GroupId]) -> Vec<LogicalSlot> {
        let stale: Vec<LogicalSlot> = self
            .entries
            .iter()
            .filter(|(_, id)| !live.contains(*id))
            .map(|(slot, _)| *slot)
            .collect();
        for slot in &stale {
            self.entries.remove(slot);
        }
        stale
    }
}

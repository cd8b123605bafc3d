//! Read-only walks over the layout tree.

use super::{LayoutNode, LayoutTree};
use crate::slot::LogicalSlot;

impl LayoutTree {
    /// Number of editor groups the tree describes.
    pub fn leaf_count(&self) -> usize {
        self.groups.iter().map(LayoutNode::leaf_count).sum()
    }

    /// Slot annotations of every leaf, depth-first. This is the order in
    /// which the host numbers groups after a replace.
    pub fn leaf_slots(&self) -> Vec<Option<LogicalSlot>> {
        let mut out = Vec::new();
        for node in &self.groups {
            node.collect_slots_into(&mut out);
        }
        out
    }
}

impl LayoutNode {
    pub fn leaf_count(&self) -> usize {
        match self {
            LayoutNode::Leaf { .. } => 1,
            LayoutNode::Split { groups, .. } => groups.iter().map(LayoutNode::leaf_count).sum(),
        }
    }

    fn collect_slots_into(&self, out: &mut Vec<Option<LogicalSlot>>) {
        match self {
            LayoutNode::Leaf { slot, .. } => out.push(*slot),
            LayoutNode::Split { groups, .. } => {
                for node in groups {
                    node.collect_slots_into(out);
                }
            }
        }
    }
}

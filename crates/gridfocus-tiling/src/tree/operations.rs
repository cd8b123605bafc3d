//! Mutating operations on the layout tree.

use super::{LayoutNode, LayoutTree};

impl LayoutTree {
    /// Remove the `index`-th leaf in depth-first order. A split left with a
    /// single child is replaced by that child, which takes over the split's
    /// size. Returns `true` if a leaf was removed. The last leaf cannot be
    /// removed.
    pub fn remove_leaf(&mut self, index: usize) -> bool {
        if self.leaf_count() <= 1 || index >= self.leaf_count() {
            return false;
        }
        let mut remaining = index;
        remove_from(&mut self.groups, &mut remaining)
    }
}

fn remove_from(nodes: &mut Vec<LayoutNode>, remaining: &mut usize) -> bool {
    let mut i = 0;
    while i < nodes.len() {
        if matches!(nodes[i], LayoutNode::Leaf { .. }) {
            if *remaining == 0 {
                nodes.remove(i);
                return true;
            }
            *remaining -= 1;
        } else if let LayoutNode::Split { size, groups } = &mut nodes[i] {
            if remove_from(groups, remaining) {
                if groups.len() == 1 {
                    let mut only = groups.remove(0);
                    only.set_size(*size);
                    nodes[i] = only;
                }
                return true;
            }
        }
        i += 1;
    }
    false
}

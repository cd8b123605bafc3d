//! Tree construction for each layout kind. Every split is 50/50.

use crate::slot::LogicalSlot::{BottomLeft, BottomRight, TopLeft, TopRight};
use crate::tree::{LayoutNode, LayoutTree, Orientation};

use super::LayoutKind;

/// Build the tree for `kind`. Pure and deterministic.
pub fn build(kind: LayoutKind) -> LayoutTree {
    let leaf = LayoutNode::leaf;
    match kind {
        LayoutKind::TwoWayVertical => {
            LayoutTree::new(Orientation::Vertical, vec![leaf(TopLeft), leaf(BottomLeft)])
        }
        LayoutKind::TwoWayHorizontal => {
            LayoutTree::new(Orientation::Horizontal, vec![leaf(TopLeft), leaf(TopRight)])
        }
        LayoutKind::LeftHeavyThree => LayoutTree::new(
            Orientation::Horizontal,
            vec![
                LayoutNode::split(vec![leaf(TopLeft), leaf(BottomLeft)]),
                leaf(TopRight),
            ],
        ),
        LayoutKind::TopHeavyThree => LayoutTree::new(
            Orientation::Vertical,
            vec![
                LayoutNode::split(vec![leaf(TopLeft), leaf(TopRight)]),
                leaf(BottomLeft),
            ],
        ),
        LayoutKind::Grid2x2 => LayoutTree::new(
            Orientation::Horizontal,
            vec![
                LayoutNode::split(vec![leaf(TopLeft), leaf(BottomLeft)]),
                LayoutNode::split(vec![leaf(TopRight), leaf(BottomRight)]),
            ],
        ),
    }
}

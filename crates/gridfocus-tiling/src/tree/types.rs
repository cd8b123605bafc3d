//! Core types for the layout tree: Orientation, LayoutTree and LayoutNode.
//!
//! Serialized form matches the host's editor-layout shape:
//! `{"orientation": 0, "groups": [{"size": 0.5}, {"size": 0.5, "groups": [...]}]}`.

use serde::{Deserialize, Serialize};

use crate::slot::LogicalSlot;

/// Direction in which the children of a split are laid out.
///
/// Only the root carries an orientation; each nesting level flips it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Orientation {
    /// Children side by side, left to right.
    Horizontal,
    /// Children stacked, top to bottom.
    Vertical,
}

impl Orientation {
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// Orientation of the splits nested `depth` levels below a root with this orientation.
    pub fn at_depth(self, depth: usize) -> Self {
        if depth % 2 == 0 {
            self
        } else {
            self.flipped()
        }
    }
}

impl From<Orientation> for u8 {
    fn from(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Horizontal => 0,
            Orientation::Vertical => 1,
        }
    }
}

impl TryFrom<u8> for Orientation {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Orientation::Horizontal),
            1 => Ok(Orientation::Vertical),
            other => Err(format!("invalid orientation: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LayoutNode {
    Split {
        size: f64,
        groups: Vec<LayoutNode>,
    },
    Leaf {
        size: f64,
        /// Slot this leaf will hold once applied. Never sent to the host.
        #[serde(skip)]
        slot: Option<LogicalSlot>,
    },
}

impl LayoutNode {
    pub fn leaf(slot: LogicalSlot) -> Self {
        LayoutNode::Leaf {
            size: 0.5,
            slot: Some(slot),
        }
    }

    pub fn split(groups: Vec<LayoutNode>) -> Self {
        LayoutNode::Split { size: 0.5, groups }
    }

    pub fn size(&self) -> f64 {
        match self {
            LayoutNode::Split { size, .. } | LayoutNode::Leaf { size, .. } => *size,
        }
    }

    pub fn set_size(&mut self, value: f64) {
        match self {
            LayoutNode::Split { size, .. } | LayoutNode::Leaf { size, .. } => *size = value,
        }
    }
}

/// Transient description of a whole editor arrangement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutTree {
    pub orientation: Orientation,
    pub groups: Vec<LayoutNode>,
}

impl LayoutTree {
    pub fn new(orientation: Orientation, groups: Vec<LayoutNode>) -> Self {
        Self {
            orientation,
            groups,
        }
    }

    /// A window holding one editor group.
    pub fn single() -> Self {
        Self::new(
            Orientation::Horizontal,
            vec![LayoutNode::Leaf {
                size: 1.0,
                slot: Some(LogicalSlot::TopLeft),
            }],
        )
    }
}

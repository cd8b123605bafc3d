//! Named layout shapes and their canonical slot -> group id tables.

use gridfocus_common::GroupId;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::slot::LogicalSlot;
use crate::slot::LogicalSlot::{BottomLeft, BottomRight, TopLeft, TopRight};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutKind {
    /// Top-left above bottom-left.
    TwoWayVertical,
    /// Top-left beside top-right.
    TwoWayHorizontal,
    /// Left column split in two, full-height top-right.
    LeftHeavyThree,
    /// Top row split in two, full-width bottom-left.
    TopHeavyThree,
    #[serde(rename = "2x2")]
    Grid2x2,
}

const TWO_WAY_VERTICAL: &[(LogicalSlot, GroupId)] =
    &[(TopLeft, GroupId(1)), (BottomLeft, GroupId(2))];
const TWO_WAY_HORIZONTAL: &[(LogicalSlot, GroupId)] =
    &[(TopLeft, GroupId(1)), (TopRight, GroupId(2))];
const LEFT_HEAVY_THREE: &[(LogicalSlot, GroupId)] = &[
    (TopLeft, GroupId(1)),
    (BottomLeft, GroupId(2)),
    (TopRight, GroupId(3)),
];
const TOP_HEAVY_THREE: &[(LogicalSlot, GroupId)] = &[
    (TopLeft, GroupId(1)),
    (TopRight, GroupId(2)),
    (BottomLeft, GroupId(3)),
];
const GRID_2X2: &[(LogicalSlot, GroupId)] = &[
    (TopLeft, GroupId(1)),
    (BottomLeft, GroupId(2)),
    (TopRight, GroupId(3)),
    (BottomRight, GroupId(4)),
];

impl LayoutKind {
    pub const ALL: [LayoutKind; 5] = [
        LayoutKind::TwoWayVertical,
        LayoutKind::TwoWayHorizontal,
        LayoutKind::LeftHeavyThree,
        LayoutKind::TopHeavyThree,
        LayoutKind::Grid2x2,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LayoutKind::TwoWayVertical => "two-way-vertical",
            LayoutKind::TwoWayHorizontal => "two-way-horizontal",
            LayoutKind::LeftHeavyThree => "left-heavy-three",
            LayoutKind::TopHeavyThree => "top-heavy-three",
            LayoutKind::Grid2x2 => "2x2",
        }
    }

    /// Group ids the host assigns to each slot right after this layout is
    /// applied. Depth-first numbering is stable for a given tree shape.
    pub fn canonical_mapping(self) -> &'static [(LogicalSlot, GroupId)] {
        match self {
            LayoutKind::TwoWayVertical => TWO_WAY_VERTICAL,
            LayoutKind::TwoWayHorizontal => TWO_WAY_HORIZONTAL,
            LayoutKind::LeftHeavyThree => LEFT_HEAVY_THREE,
            LayoutKind::TopHeavyThree => TOP_HEAVY_THREE,
            LayoutKind::Grid2x2 => GRID_2X2,
        }
    }

    pub fn canonical_id(self, slot: LogicalSlot) -> Option<GroupId> {
        self.canonical_mapping()
            .iter()
            .find(|(s, _)| *s == slot)
            .map(|(_, id)| *id)
    }

    pub fn covers(self, slot: LogicalSlot) -> bool {
        self.canonical_id(slot).is_some()
    }

    pub fn group_count(self) -> usize {
        self.canonical_mapping().len()
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

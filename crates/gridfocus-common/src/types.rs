use serde::{Deserialize, Serialize};
use std::fmt;

/// Host-assigned identifier of a physical editor group.
///
/// Not stable: the host renumbers groups whenever the layout is replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(pub u32);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "group-{}", self.0)
    }
}

/// Index accepted by the host's per-index "focus group N" action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FocusIndex(u8);

impl FocusIndex {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 8;

    pub fn new(index: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&index).then_some(Self(index))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<GroupId> for FocusIndex {
    type Error = GroupId;

    fn try_from(id: GroupId) -> Result<Self, Self::Error> {
        u8::try_from(id.0)
            .ok()
            .and_then(FocusIndex::new)
            .ok_or(id)
    }
}

impl fmt::Display for FocusIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

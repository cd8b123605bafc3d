//! The four logical grid positions a shortcut can target.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogicalSlot {
    TopLeft,
    BottomLeft,
    TopRight,
    BottomRight,
}

impl LogicalSlot {
    pub const ALL: [LogicalSlot; 4] = [
        LogicalSlot::TopLeft,
        LogicalSlot::BottomLeft,
        LogicalSlot::TopRight,
        LogicalSlot::BottomRight,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LogicalSlot::TopLeft => "top-left",
            LogicalSlot::BottomLeft => "bottom-left",
            LogicalSlot::TopRight => "top-right",
            LogicalSlot::BottomRight => "bottom-right",
        }
    }
}

impl fmt::Display for LogicalSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LogicalSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        LogicalSlot::ALL
            .into_iter()
            .find(|slot| slot.name() == wanted)
            .ok_or_else(|| format!("unknown slot: '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_kebab_and_snake_case() {
        assert_eq!("top-left".parse::<LogicalSlot>(), Ok(LogicalSlot::TopLeft));
        assert_eq!(
            "Bottom_Right".parse::<LogicalSlot>(),
            Ok(LogicalSlot::BottomRight)
        );
        assert!("middle".parse::<LogicalSlot>().is_err());
    }

    #[test]
    fn display_matches_serde_name() {
        for slot in LogicalSlot::ALL {
            let json = serde_json::to_string(&slot).unwrap();
            assert_eq!(json, format!("\"{slot}\""));
        }
    }
}

use gridfocus_config::keybinds::{
    FOCUS_BOTTOM_LEFT, FOCUS_BOTTOM_RIGHT, FOCUS_TOP_LEFT, FOCUS_TOP_RIGHT,
};

use crate::slot::LogicalSlot;

/// The four bound commands, one per logical slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotCommand {
    FocusTopLeft,
    FocusBottomLeft,
    FocusTopRight,
    FocusBottomRight,
}

impl SlotCommand {
    pub const ALL: [SlotCommand; 4] = [
        SlotCommand::FocusTopLeft,
        SlotCommand::FocusBottomLeft,
        SlotCommand::FocusTopRight,
        SlotCommand::FocusBottomRight,
    ];

    /// Command identifier as registered with the host.
    pub fn id(self) -> &'static str {
        match self {
            SlotCommand::FocusTopLeft => FOCUS_TOP_LEFT,
            SlotCommand::FocusBottomLeft => FOCUS_BOTTOM_LEFT,
            SlotCommand::FocusTopRight => FOCUS_TOP_RIGHT,
            SlotCommand::FocusBottomRight => FOCUS_BOTTOM_RIGHT,
        }
    }

    pub fn slot(self) -> LogicalSlot {
        match self {
            SlotCommand::FocusTopLeft => LogicalSlot::TopLeft,
            SlotCommand::FocusBottomLeft => LogicalSlot::BottomLeft,
            SlotCommand::FocusTopRight => LogicalSlot::TopRight,
            SlotCommand::FocusBottomRight => LogicalSlot::BottomRight,
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|cmd| cmd.id() == id)
    }
}

impl From<LogicalSlot> for SlotCommand {
    fn from(slot: LogicalSlot) -> Self {
        match slot {
            LogicalSlot::TopLeft => SlotCommand::FocusTopLeft,
            LogicalSlot::BottomLeft => SlotCommand::FocusBottomLeft,
            LogicalSlot::TopRight => SlotCommand::FocusTopRight,
            LogicalSlot::BottomRight => SlotCommand::FocusBottomRight,
        }
    }
}

pub mod applier;
pub mod commands;
pub mod host;
pub mod layout;
pub mod manager;
pub mod registry;
pub mod slot;
pub mod tree;

pub use applier::{LayoutApplier, SettleOutcome};
pub use commands::SlotCommand;
pub use host::{EditorHost, SimulatedHost};
pub use layout::LayoutKind;
pub use manager::GridFocus;
pub use registry::SlotRegistry;
pub use slot::LogicalSlot;
pub use tree::{LayoutNode, LayoutTree, Orientation};

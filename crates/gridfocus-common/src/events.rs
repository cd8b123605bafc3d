use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::GroupId;

/// Notifications pushed by the editor host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum HostEvent {
    /// The set of physical editor groups changed (opened, closed or renumbered).
    GroupsChanged,
    GroupClosed(GroupId),
    #[serde(other)]
    Unknown,
}

pub struct EventBus {
    sender: broadcast::Sender<HostEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<HostEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: HostEvent) -> usize {
        let delivered = self.sender.send(event).unwrap_or(0);
        tracing::trace!(delivered, "host event published");
        delivered
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}

use async_trait::async_trait;
use gridfocus_common::{FocusIndex, GroupId, HostError, HostEvent};
use tokio::sync::broadcast;

use crate::tree::LayoutTree;

pub mod simulated;

pub use simulated::SimulatedHost;

pub type Result<T> = std::result::Result<T, HostError>;

/// Window-management surface of the editor that owns the groups.
#[async_trait]
pub trait EditorHost: Send + Sync {
    /// Current arrangement as reported by the host.
    async fn layout(&self) -> Result<LayoutTree>;

    /// Identifiers of every editor group that currently exists.
    async fn groups(&self) -> Result<Vec<GroupId>>;

    /// Replace the whole arrangement. The host renumbers groups afterwards.
    async fn replace_layout(&self, tree: &LayoutTree) -> Result<()>;

    /// Invoke the host's "focus group N" action.
    async fn focus_group(&self, index: FocusIndex) -> Result<()>;

    /// Notifications for changes to the set of groups.
    fn subscribe(&self) -> broadcast::Receiver<HostEvent>;

    async fn group_count(&self) -> Result<usize> {
        Ok(self.layout().await?.leaf_count())
    }

    /// `true` if the layout read back right after `replace_layout` returns is
    /// guaranteed to be the new one.
    fn replace_is_synchronous(&self) -> bool {
        false
    }
}

//! Engine state owned by one activation of the extension.

mod focus;
mod observer;

pub use focus::choose_layout;

use std::sync::Arc;

use gridfocus_common::HostEvent;
use gridfocus_config::SettleConfig;
use tokio::sync::broadcast;
use tracing::info;

use crate::host::EditorHost;
use crate::layout::LayoutKind;
use crate::registry::SlotRegistry;

/// Slot registry plus the host handle and subscription that keep it current.
///
/// Handlers take `&mut self`, so commands and lifecycle notifications are
/// processed strictly one after another.
pub struct GridFocus<H: EditorHost + ?Sized> {
    pub(super) host: Arc<H>,
    pub(super) registry: SlotRegistry,
    pub(super) current_kind: Option<LayoutKind>,
    pub(super) settle: SettleConfig,
    pub(super) events: Option<broadcast::Receiver<HostEvent>>,
}

impl<H: EditorHost + ?Sized> GridFocus<H> {
    /// Subscribe to host notifications and start with an empty registry.
    pub fn activate(host: Arc<H>, settle: SettleConfig) -> Self {
        let events = host.subscribe();
        info!("gridfocus activated");
        Self {
            host,
            registry: SlotRegistry::new(),
            current_kind: None,
            settle,
            events: Some(events),
        }
    }

    /// Drop the host subscription and hand back the final registry.
    pub fn deactivate(mut self) -> SlotRegistry {
        self.events.take();
        info!(slots = self.registry.len(), "gridfocus deactivated");
        self.registry
    }

    pub fn registry(&self) -> &SlotRegistry {
        &self.registry
    }

    /// Kind of the last layout this engine applied, if any.
    pub fn current_kind(&self) -> Option<LayoutKind> {
        self.current_kind
    }

    pub fn host(&self) -> &Arc<H> {
        &self.host
    }

    pub fn is_subscribed(&self) -> bool {
        self.events.is_some()
    }
}

//! Group-lifecycle handling and the sequential command loop.

use gridfocus_common::HostEvent;
use tokio::sync::broadcast::error::{RecvError, TryRecvError};
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info, warn};

use crate::commands::SlotCommand;
use crate::host::EditorHost;
use crate::registry::SlotRegistry;
use crate::slot::LogicalSlot;

use super::GridFocus;

enum Next {
    Command(SlotCommand),
    Event(Result<HostEvent, RecvError>),
    Stop,
}

async fn recv_event(
    events: &mut Option<broadcast::Receiver<HostEvent>>,
) -> Result<HostEvent, RecvError> {
    match events {
        Some(rx) => rx.recv().await,
        None => std::future::pending().await,
    }
}

fn affects_groups(event: &HostEvent) -> bool {
    matches!(event, HostEvent::GroupsChanged | HostEvent::GroupClosed(_))
}

impl<H: EditorHost + ?Sized> GridFocus<H> {
    /// Remove registry entries whose group no longer exists.
    ///
    /// Skipped when the host cannot be queried; guessing the live set here
    /// would throw away valid entries.
    pub async fn on_groups_changed(&mut self) -> Vec<LogicalSlot> {
        let live = match self.host.groups().await {
            Ok(live) => live,
            Err(e) => {
                debug!("skipping prune, group query failed: {e}");
                return Vec::new();
            }
        };
        let removed = self.registry.prune(&live);
        if !removed.is_empty() {
            info!(?removed, "pruned slots for closed groups");
        }
        removed
    }

    pub async fn handle_event(&mut self, event: HostEvent) {
        if affects_groups(&event) {
            self.on_groups_changed().await;
        } else {
            debug!(?event, "ignoring host event");
        }
    }

    /// Process every notification already queued, without waiting.
    /// Returns the number of notifications consumed.
    pub async fn drain_events(&mut self) -> usize {
        let Some(rx) = self.events.as_mut() else {
            return 0;
        };

        let mut consumed = 0;
        let mut resync = false;
        loop {
            match rx.try_recv() {
                Ok(event) => {
                    consumed += 1;
                    resync |= affects_groups(&event);
                }
                Err(TryRecvError::Lagged(missed)) => {
                    debug!(missed, "host events dropped, resyncing");
                    resync = true;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Closed) => {
                    self.events = None;
                    break;
                }
            }
        }

        if resync {
            self.on_groups_changed().await;
        }
        consumed
    }

    /// Run commands from `commands` one at a time, interleaved with host
    /// notifications, until the channel closes. Queued notifications are
    /// handled before the next command.
    pub async fn run(mut self, mut commands: mpsc::Receiver<SlotCommand>) -> SlotRegistry {
        loop {
            let next = tokio::select! {
                biased;
                event = recv_event(&mut self.events) => Next::Event(event),
                command = commands.recv() => match command {
                    Some(command) => Next::Command(command),
                    None => Next::Stop,
                },
            };

            match next {
                Next::Command(command) => self.handle(command).await,
                Next::Event(Ok(event)) => self.handle_event(event).await,
                Next::Event(Err(RecvError::Lagged(missed))) => {
                    debug!(missed, "host events dropped, resyncing");
                    self.on_groups_changed().await;
                }
                Next::Event(Err(RecvError::Closed)) => {
                    warn!("host event stream closed");
                    self.events = None;
                }
                Next::Stop => break,
            }
        }
        self.deactivate()
    }
}

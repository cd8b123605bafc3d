//! Replaces the host layout and reconciles the slot registry afterwards.

use gridfocus_config::SettleConfig;
use tokio::time::{sleep, Instant};
use tracing::{debug, info, warn};

use crate::host::{EditorHost, Result};
use crate::layout::LayoutKind;
use crate::registry::SlotRegistry;
use crate::tree::LayoutTree;

/// How the applier decided the host had finished applying a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleOutcome {
    /// The host reports replaces as synchronous.
    Immediate,
    /// The group count matched after `polls` read-backs.
    Settled { polls: u32 },
    /// The count never matched; the canonical mapping was installed anyway.
    TimedOut { polls: u32 },
}

pub struct LayoutApplier<'a, H: EditorHost + ?Sized> {
    host: &'a H,
    settle: &'a SettleConfig,
}

impl<'a, H: EditorHost + ?Sized> LayoutApplier<'a, H> {
    pub fn new(host: &'a H, settle: &'a SettleConfig) -> Self {
        Self { host, settle }
    }

    /// Replace the host layout with `tree` and overwrite `registry` with the
    /// canonical mapping of `kind`. Slots outside `kind` are absent afterwards.
    ///
    /// The registry is left untouched if the host rejects the replace.
    pub async fn apply(
        &self,
        tree: &LayoutTree,
        kind: LayoutKind,
        registry: &mut SlotRegistry,
    ) -> Result<SettleOutcome> {
        debug_assert_eq!(tree.leaf_count(), kind.group_count());

        self.host.replace_layout(tree).await?;
        let outcome = self.wait_settled(kind.group_count()).await;

        registry.replace_with(kind.canonical_mapping());
        info!(%kind, ?outcome, "layout applied");
        Ok(outcome)
    }

    async fn wait_settled(&self, expected: usize) -> SettleOutcome {
        if self.host.replace_is_synchronous() {
            return SettleOutcome::Immediate;
        }

        let initial = self.settle.initial_delay();
        if !initial.is_zero() {
            sleep(initial).await;
        }

        let deadline = Instant::now() + self.settle.timeout();
        let mut polls = 0;
        loop {
            polls += 1;
            match self.host.group_count().await {
                Ok(count) if count == expected => return SettleOutcome::Settled { polls },
                Ok(count) => debug!(count, expected, polls, "layout not settled yet"),
                Err(e) => debug!("group count read-back failed: {e}"),
            }

            if Instant::now() >= deadline {
                warn!(expected, polls, "layout did not settle before timeout");
                return SettleOutcome::TimedOut { polls };
            }
            sleep(self.settle.poll_interval()).await;
        }
    }
}

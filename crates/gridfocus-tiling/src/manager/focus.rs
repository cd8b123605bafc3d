//! Focus-or-create dispatch for the four slot commands.

use gridfocus_common::{FocusIndex, GroupId};
use tracing::{debug, info, warn};

use crate::applier::LayoutApplier;
use crate::commands::SlotCommand;
use crate::host::EditorHost;
use crate::layout::{self, LayoutKind};
use crate::registry::SlotRegistry;
use crate::slot::LogicalSlot;

use super::GridFocus;

const TOP_LEFT_GROUP: GroupId = GroupId(1);

/// Pick the layout that creates `slot` given how many groups exist now.
///
/// With two groups open, the three-way shape is chosen so the sibling slot
/// that is already registered keeps group id 2 and its screen position.
/// Returns `None` for the top-left slot, which is never created.
pub fn choose_layout(
    slot: LogicalSlot,
    group_count: usize,
    registry: &SlotRegistry,
) -> Option<LayoutKind> {
    let kind = match (slot, group_count) {
        (LogicalSlot::TopLeft, _) => return None,
        (LogicalSlot::BottomRight, _) => LayoutKind::Grid2x2,
        (LogicalSlot::BottomLeft, 0 | 1) => LayoutKind::TwoWayVertical,
        (LogicalSlot::TopRight, 0 | 1) => LayoutKind::TwoWayHorizontal,
        (LogicalSlot::BottomLeft, 2) => {
            if registry.has(LogicalSlot::TopRight) {
                LayoutKind::TopHeavyThree
            } else {
                LayoutKind::LeftHeavyThree
            }
        }
        (LogicalSlot::TopRight, 2) => {
            if registry.has(LogicalSlot::BottomLeft) {
                LayoutKind::LeftHeavyThree
            } else {
                LayoutKind::TopHeavyThree
            }
        }
        _ => LayoutKind::Grid2x2,
    };
    Some(kind)
}

impl<H: EditorHost + ?Sized> GridFocus<H> {
    pub async fn handle(&mut self, command: SlotCommand) {
        debug!(command = command.id(), "command invoked");
        self.focus_slot(command.slot()).await;
    }

    /// Focus the group behind `slot`, creating it through a layout change
    /// when it is missing. Never fails; host errors degrade to best effort.
    pub async fn focus_slot(&mut self, slot: LogicalSlot) {
        if !self.registry.has(LogicalSlot::TopLeft) {
            self.registry.set(LogicalSlot::TopLeft, TOP_LEFT_GROUP);
        }

        if let Some(id) = self.registry.get(slot) {
            if self.live_groups().await.contains(&id) {
                debug!(%slot, %id, "slot registered, focusing");
                self.focus_group(id).await;
                return;
            }
            debug!(%slot, %id, "registered group is gone, recreating");
        }

        let group_count = self.group_count().await;
        let Some(kind) = choose_layout(slot, group_count, &self.registry) else {
            self.focus_group(TOP_LEFT_GROUP).await;
            return;
        };
        info!(%slot, group_count, %kind, "creating slot");

        let tree = layout::build(kind);
        let applier = LayoutApplier::new(&*self.host, &self.settle);
        if let Err(e) = applier.apply(&tree, kind, &mut self.registry).await {
            warn!(%kind, "layout replace failed: {e}");
            return;
        }
        self.current_kind = Some(kind);

        match self.registry.get(slot) {
            Some(id) => self.focus_group(id).await,
            None => debug!(%slot, %kind, "layout does not cover slot"),
        }
    }

    async fn focus_group(&self, id: GroupId) {
        let index = match FocusIndex::try_from(id) {
            Ok(index) => index,
            Err(_) => {
                debug!(%id, "no focus action for group, ignoring");
                return;
            }
        };
        if let Err(e) = self.host.focus_group(index).await {
            warn!(%id, "focus failed: {e}");
        }
    }

    /// Live groups, assuming only the first group exists when the host
    /// cannot be queried.
    async fn live_groups(&self) -> Vec<GroupId> {
        self.host.groups().await.unwrap_or_else(|e| {
            warn!("group query failed, assuming a single group: {e}");
            vec![TOP_LEFT_GROUP]
        })
    }

    async fn group_count(&self) -> usize {
        self.host.group_count().await.unwrap_or_else(|e| {
            warn!("group count query failed, assuming a single group: {e}");
            1
        })
    }
}

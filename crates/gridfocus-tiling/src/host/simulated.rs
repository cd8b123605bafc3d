//! In-memory editor host.
//!
//! Mimics the observed host behavior: groups are renumbered 1..n in
//! depth-first order on every layout replace, a replaced layout may become
//! visible only after a few read-backs, and closed groups keep the ids of
//! their surviving siblings untouched.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use gridfocus_common::{EventBus, FocusIndex, GroupId, HostError, HostEvent};
use tokio::sync::broadcast;
use tracing::debug;

use super::{EditorHost, Result};
use crate::tree::LayoutTree;

#[derive(Debug)]
struct Pending {
    tree: LayoutTree,
    reads_left: u32,
}

#[derive(Debug)]
struct State {
    tree: LayoutTree,
    /// Ids of the leaves of `tree`, depth-first.
    groups: Vec<GroupId>,
    pending: Option<Pending>,
    failing: bool,
    focused: Option<GroupId>,
    focus_history: Vec<GroupId>,
    replace_count: usize,
}

pub struct SimulatedHost {
    state: Mutex<State>,
    events: EventBus,
    apply_lag: u32,
    synchronous: bool,
}

impl SimulatedHost {
    /// A host showing a single group with id 1.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                tree: LayoutTree::single(),
                groups: vec![GroupId(1)],
                pending: None,
                failing: false,
                focused: Some(GroupId(1)),
                focus_history: Vec::new(),
                replace_count: 0,
            }),
            events: EventBus::default(),
            apply_lag: 0,
            synchronous: false,
        }
    }

    /// Delay visibility of a replaced layout until it has been read back
    /// `reads` times.
    pub fn with_apply_lag(mut self, reads: u32) -> Self {
        self.apply_lag = reads;
        self
    }

    /// Report `replace_layout` as synchronous.
    pub fn synchronous(mut self) -> Self {
        self.synchronous = true;
        self
    }

    /// Make every query and mutation fail with `HostError::Unavailable`.
    pub fn set_failing(&self, failing: bool) {
        self.lock().failing = failing;
    }

    /// Close an editor group, as if the user closed its last editor.
    pub fn close_group(&self, id: GroupId) -> Result<()> {
        {
            let mut state = self.lock();
            let index = state
                .groups
                .iter()
                .position(|g| *g == id)
                .ok_or(HostError::UnknownGroup(id))?;
            if !state.tree.remove_leaf(index) {
                return Err(HostError::Rejected(format!("cannot close last group {id}")));
            }
            state.groups.remove(index);
            if state.focused == Some(id) {
                state.focused = state.groups.first().copied();
            }
            debug!(%id, "simulated group closed");
        }
        self.events.publish(HostEvent::GroupClosed(id));
        self.events.publish(HostEvent::GroupsChanged);
        Ok(())
    }

    pub fn focused(&self) -> Option<GroupId> {
        self.lock().focused
    }

    pub fn focus_history(&self) -> Vec<GroupId> {
        self.lock().focus_history.clone()
    }

    pub fn replace_count(&self) -> usize {
        self.lock().replace_count
    }

    /// Committed layout, without advancing any pending replace.
    pub fn current_layout(&self) -> LayoutTree {
        self.lock().tree.clone()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        // A poisoned lock only means a test panicked mid-update.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn check_available(state: &State) -> Result<()> {
        if state.failing {
            Err(HostError::Unavailable("simulated outage".into()))
        } else {
            Ok(())
        }
    }

    fn commit(state: &mut State, tree: LayoutTree) {
        state.groups = (1..=tree.leaf_count() as u32).map(GroupId).collect();
        state.tree = tree;
        if state.focused.map_or(true, |id| !state.groups.contains(&id)) {
            state.focused = state.groups.first().copied();
        }
    }

    /// Count one read-back against a pending replace. Returns `true` when
    /// the pending layout was committed by this read.
    fn advance_pending(state: &mut State) -> bool {
        let Some(pending) = state.pending.as_mut() else {
            return false;
        };
        pending.reads_left = pending.reads_left.saturating_sub(1);
        if pending.reads_left > 0 {
            return false;
        }
        if let Some(pending) = state.pending.take() {
            Self::commit(state, pending.tree);
        }
        true
    }
}

impl Default for SimulatedHost {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EditorHost for SimulatedHost {
    async fn layout(&self) -> Result<LayoutTree> {
        let (tree, committed) = {
            let mut state = self.lock();
            Self::check_available(&state)?;
            let committed = Self::advance_pending(&mut state);
            (state.tree.clone(), committed)
        };
        if committed {
            self.events.publish(HostEvent::GroupsChanged);
        }
        Ok(tree)
    }

    async fn groups(&self) -> Result<Vec<GroupId>> {
        let state = self.lock();
        Self::check_available(&state)?;
        Ok(state.groups.clone())
    }

    async fn replace_layout(&self, tree: &LayoutTree) -> Result<()> {
        {
            let mut state = self.lock();
            Self::check_available(&state)?;
            if tree.leaf_count() == 0 {
                return Err(HostError::Rejected("layout has no groups".into()));
            }
            state.replace_count += 1;
            if self.apply_lag > 0 {
                state.pending = Some(Pending {
                    tree: tree.clone(),
                    reads_left: self.apply_lag,
                });
                debug!(lag = self.apply_lag, "simulated replace pending");
                return Ok(());
            }
            state.pending = None;
            Self::commit(&mut state, tree.clone());
        }
        self.events.publish(HostEvent::GroupsChanged);
        Ok(())
    }

    async fn focus_group(&self, index: FocusIndex) -> Result<()> {
        let mut state = self.lock();
        Self::check_available(&state)?;
        let id = GroupId(u32::from(index.get()));
        if !state.groups.contains(&id) {
            return Err(HostError::UnknownGroup(id));
        }
        state.focused = Some(id);
        state.focus_history.push(id);
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<HostEvent> {
        self.events.subscribe()
    }

    fn replace_is_synchronous(&self) -> bool {
        self.synchronous
    }
}

//! Step scripts driven against a simulated editor host.

use std::str::FromStr;
use std::sync::Arc;

use gridfocus_common::{GridFocusError, GroupId};
use gridfocus_config::{keybinds, KeybindConfig, SettleConfig};
use gridfocus_tiling::{
    layout, EditorHost, GridFocus, LayoutKind, LayoutTree, LogicalSlot, SimulatedHost,
    SlotCommand, SlotRegistry,
};
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Focus(LogicalSlot),
    Close(GroupId),
}

impl FromStr for Step {
    type Err = GridFocusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(id) = s.strip_prefix("close:") {
            let id = id
                .trim()
                .parse::<u32>()
                .map_err(|_| GridFocusError::Other(format!("invalid group id in step '{s}'")))?;
            return Ok(Step::Close(GroupId(id)));
        }
        s.parse::<LogicalSlot>()
            .map(Step::Focus)
            .map_err(GridFocusError::Other)
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::Focus(slot) => write!(f, "{slot}"),
            Step::Close(id) => write!(f, "close:{}", id.0),
        }
    }
}

/// Resolve accelerators to focus steps via the keybind table.
pub fn steps_for_keys(
    config: &KeybindConfig,
    keys: &[String],
) -> Result<Vec<Step>, GridFocusError> {
    keys.iter()
        .map(|key| {
            keybinds::command_for_key(config, key)
                .and_then(SlotCommand::from_id)
                .map(|command| Step::Focus(command.slot()))
                .ok_or_else(|| GridFocusError::Other(format!("no command bound to '{key}'")))
        })
        .collect()
}

#[derive(Debug, Serialize)]
pub struct StepReport {
    pub step: String,
    pub kind: Option<LayoutKind>,
    pub registry: SlotRegistry,
    pub groups: Vec<GroupId>,
    pub focused: Option<GroupId>,
}

/// Run `steps` in order against a fresh single-group simulated host.
pub async fn run_steps(steps: &[Step], settle: SettleConfig, apply_lag: u32) -> Vec<StepReport> {
    let host = Arc::new(SimulatedHost::new().with_apply_lag(apply_lag));
    let mut gf = GridFocus::activate(host.clone(), settle);
    let mut reports = Vec::with_capacity(steps.len());

    for step in steps {
        match step {
            Step::Focus(slot) => gf.handle(SlotCommand::from(*slot)).await,
            Step::Close(id) => {
                if let Err(e) = host.close_group(*id) {
                    warn!(%id, "close failed: {e}");
                }
            }
        }
        gf.drain_events().await;

        reports.push(StepReport {
            step: step.to_string(),
            kind: gf.current_kind(),
            registry: gf.registry().clone(),
            groups: host.groups().await.unwrap_or_default(),
            focused: host.focused(),
        });
    }

    gf.deactivate();
    reports
}

#[derive(Debug, Serialize)]
pub struct LayoutReport {
    pub kind: LayoutKind,
    pub tree: LayoutTree,
    pub mapping: SlotRegistry,
}

pub fn layout_reports() -> Vec<LayoutReport> {
    LayoutKind::ALL
        .into_iter()
        .map(|kind| {
            let mut mapping = SlotRegistry::new();
            mapping.replace_with(kind.canonical_mapping());
            LayoutReport {
                kind,
                tree: layout::build(kind),
                mapping,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle() -> SettleConfig {
        SettleConfig {
            initial_delay_ms: 0,
            poll_interval_ms: 1,
            timeout_ms: 50,
        }
    }

    #[test]
    fn parse_steps() {
        assert_eq!(
            "top-right".parse::<Step>().unwrap(),
            Step::Focus(LogicalSlot::TopRight)
        );
        assert_eq!("close:3".parse::<Step>().unwrap(), Step::Close(GroupId(3)));
        assert!("close:x".parse::<Step>().is_err());
        assert!("center".parse::<Step>().is_err());
    }

    #[test]
    fn keys_resolve_to_steps() {
        let config = KeybindConfig::default();
        let keys = vec!["ctrl+alt+2".to_string(), "Ctrl+Alt+4".to_string()];
        let steps = steps_for_keys(&config, &keys).unwrap();
        assert_eq!(
            steps,
            vec![
                Step::Focus(LogicalSlot::BottomLeft),
                Step::Focus(LogicalSlot::BottomRight)
            ]
        );
        assert!(steps_for_keys(&config, &["Ctrl+Z".to_string()]).is_err());
    }

    #[tokio::test]
    async fn run_steps_reports_each_step() {
        let steps = [
            Step::Focus(LogicalSlot::BottomLeft),
            Step::Focus(LogicalSlot::TopRight),
            Step::Close(GroupId(2)),
            Step::Focus(LogicalSlot::BottomLeft),
        ];
        let reports = run_steps(&steps, settle(), 0).await;
        assert_eq!(reports.len(), 4);

        assert_eq!(reports[1].kind, Some(LayoutKind::LeftHeavyThree));
        assert_eq!(reports[1].focused, Some(GroupId(3)));

        assert!(!reports[2].registry.has(LogicalSlot::BottomLeft));
        assert_eq!(reports[2].groups, vec![GroupId(1), GroupId(3)]);

        // Top-right is still registered, so the top-heavy shape is chosen.
        assert_eq!(reports[3].kind, Some(LayoutKind::TopHeavyThree));
        assert_eq!(reports[3].focused, Some(GroupId(3)));
    }

    #[test]
    fn layout_reports_cover_every_kind() {
        let reports = layout_reports();
        assert_eq!(reports.len(), 5);
        let json = serde_json::to_string(&reports[4]).unwrap();
        assert!(json.contains("\"kind\":\"2x2\""));
        assert!(json.contains("\"bottom-right\":4"));
    }
}

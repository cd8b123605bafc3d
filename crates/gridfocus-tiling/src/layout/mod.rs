//! The five fixed layout shapes and the trees that produce them.

mod builder;
mod kind;

pub use builder::build;
pub use kind::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::LogicalSlot;
    use crate::tree::Orientation;

    #[test]
    fn canonical_mapping_follows_depth_first_leaf_order() {
        for kind in LayoutKind::ALL {
            let tree = build(kind);
            for (index, slot) in tree.leaf_slots().into_iter().enumerate() {
                let slot = slot.expect("built trees annotate every leaf");
                let id = kind.canonical_id(slot).map(|id| id.0);
                assert_eq!(id, Some(index as u32 + 1), "{kind} {slot}");
            }
        }
    }

    #[test]
    fn tree_leaf_count_matches_group_count() {
        for kind in LayoutKind::ALL {
            assert_eq!(build(kind).leaf_count(), kind.group_count(), "{kind}");
        }
    }

    #[test]
    fn two_way_vertical_stacks_groups() {
        let tree = build(LayoutKind::TwoWayVertical);
        assert_eq!(tree.orientation, Orientation::Vertical);
        assert_eq!(
            tree.leaf_slots(),
            vec![Some(LogicalSlot::TopLeft), Some(LogicalSlot::BottomLeft)]
        );
    }

    #[test]
    fn grid_is_two_columns_of_two() {
        let tree = build(LayoutKind::Grid2x2);
        let json = serde_json::to_value(&tree).unwrap();
        let half = serde_json::json!({ "size": 0.5 });
        let column = serde_json::json!({ "size": 0.5, "groups": [half, half] });
        assert_eq!(
            json,
            serde_json::json!({ "orientation": 0, "groups": [column, column] })
        );
    }

    #[test]
    fn build_is_deterministic() {
        for kind in LayoutKind::ALL {
            assert_eq!(build(kind), build(kind));
        }
    }
}

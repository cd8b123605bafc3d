mod operations;
mod traversal;
mod types;

pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::LogicalSlot;

    fn column() -> LayoutNode {
        LayoutNode::split(vec![
            LayoutNode::leaf(LogicalSlot::TopLeft),
            LayoutNode::leaf(LogicalSlot::BottomLeft),
        ])
    }

    #[test]
    fn single_group_tree() {
        let tree = LayoutTree::single();
        assert_eq!(tree.leaf_count(), 1);
        assert_eq!(tree.leaf_slots(), vec![Some(LogicalSlot::TopLeft)]);
    }

    #[test]
    fn nested_leaf_count_and_order() {
        let tree = LayoutTree::new(
            Orientation::Horizontal,
            vec![column(), LayoutNode::leaf(LogicalSlot::TopRight)],
        );
        assert_eq!(tree.leaf_count(), 3);
        assert_eq!(
            tree.leaf_slots(),
            vec![
                Some(LogicalSlot::TopLeft),
                Some(LogicalSlot::BottomLeft),
                Some(LogicalSlot::TopRight),
            ]
        );
    }

    #[test]
    fn nested_groups_alternate_orientation() {
        assert_eq!(Orientation::Horizontal.at_depth(0), Orientation::Horizontal);
        assert_eq!(Orientation::Horizontal.at_depth(1), Orientation::Vertical);
        assert_eq!(Orientation::Vertical.at_depth(2), Orientation::Vertical);
    }

    #[test]
    fn serializes_to_host_shape() {
        let tree = LayoutTree::new(
            Orientation::Horizontal,
            vec![column(), LayoutNode::leaf(LogicalSlot::TopRight)],
        );
        let json = serde_json::to_value(&tree).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "orientation": 0,
                "groups": [
                    { "size": 0.5, "groups": [{ "size": 0.5 }, { "size": 0.5 }] },
                    { "size": 0.5 }
                ]
            })
        );
    }

    #[test]
    fn deserializes_host_shape() {
        let json = r#"{"orientation":1,"groups":[{"size":0.3},{"size":0.7,"groups":[{"size":0.5},{"size":0.5}]}]}"#;
        let tree: LayoutTree = serde_json::from_str(json).unwrap();
        assert_eq!(tree.orientation, Orientation::Vertical);
        assert_eq!(tree.leaf_count(), 3);
        assert_eq!(tree.leaf_slots(), vec![None, None, None]);
    }

    #[test]
    fn invalid_orientation_is_rejected() {
        let json = r#"{"orientation":2,"groups":[{"size":1.0}]}"#;
        assert!(serde_json::from_str::<LayoutTree>(json).is_err());
    }

    #[test]
    fn remove_leaf_collapses_single_child_split() {
        let mut tree = LayoutTree::new(
            Orientation::Horizontal,
            vec![column(), LayoutNode::leaf(LogicalSlot::TopRight)],
        );
        assert!(tree.remove_leaf(1));
        assert_eq!(tree.leaf_count(), 2);
        assert_eq!(
            tree.leaf_slots(),
            vec![Some(LogicalSlot::TopLeft), Some(LogicalSlot::TopRight)]
        );
        assert!(matches!(tree.groups[0], LayoutNode::Leaf { size, .. } if size == 0.5));
    }

    #[test]
    fn remove_leaf_out_of_range_fails() {
        let mut tree = LayoutTree::new(Orientation::Vertical, vec![column()]);
        assert!(!tree.remove_leaf(5));
        assert_eq!(tree.leaf_count(), 2);
    }

    #[test]
    fn remove_last_leaf_fails() {
        let mut tree = LayoutTree::single();
        assert!(!tree.remove_leaf(0));
        assert_eq!(tree.leaf_count(), 1);
    }
}

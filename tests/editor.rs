//! Tests for the mapping editor's node set, edits and connections.
mod common;
use common::*;
use fieldmap::editor::DESTINATION_FIELDS;
use fieldmap::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn test_nodes_built_from_headers() {
    let editor = editor_for(&["Merchant", "Amount", "Date"]);

    assert_eq!(
        node_ids(&editor),
        vec![
            "csv-Merchant-0",
            "csv-Amount-1",
            "csv-Date-2",
            "iif-vendor",
            "iif-amount"
        ]
    );
    assert_eq!(editor.sources().count(), 3);
    assert_eq!(editor.destinations().count(), 2);
    assert!(editor.edges().is_empty());

    let date = editor.node("csv-Date-2").unwrap();
    assert_eq!(date.label, "Date");
    assert_eq!(date.role, Role::Source);
    assert_eq!(date.position, Position::new(100.0, 150.0));

    let vendor = editor.node("iif-vendor").unwrap();
    assert_eq!(vendor.label, "Vendor");
    assert_eq!(vendor.role, Role::Destination);
    assert_eq!(vendor.position, Position::new(400.0, 100.0));
    assert_eq!(
        editor.node("iif-amount").unwrap().position,
        Position::new(400.0, 200.0)
    );
}

#[test]
fn test_duplicate_headers_get_distinct_ids() {
    let editor = editor_for(&["Amount", "Amount"]);
    let ids = node_ids(&editor);
    assert_eq!(ids[0], "csv-Amount-0");
    assert_eq!(ids[1], "csv-Amount-1");
    assert_eq!(editor.nodes().len(), 4);
}

#[test]
fn test_empty_headers_leave_only_destinations() {
    let editor = editor_for(&[]);
    assert_eq!(editor.nodes().len(), DESTINATION_FIELDS.len());
    assert_eq!(editor.sources().count(), 0);
}

#[test]
fn test_custom_layout() {
    let layout = EditorLayout {
        source_origin: Position::new(0.0, 10.0),
        source_spacing: 80.0,
    };
    let editor = MappingEditor::with_headers(layout, &["a", "b"]);
    assert_eq!(
        editor.node("csv-b-1").unwrap().position,
        Position::new(0.0, 90.0)
    );
}

#[test]
fn test_set_headers_resets_edges() {
    let mut editor = editor_for(&["Merchant", "Amount"]);
    editor
        .connect(Connection::new("csv-Merchant-0", "iif-vendor"))
        .unwrap();
    editor
        .connect(Connection::new("csv-Amount-1", "iif-amount"))
        .unwrap();
    assert_eq!(editor.edges().len(), 2);

    editor.set_headers(&["Payee", "Total", "Memo"]);
    assert!(editor.edges().is_empty());
    assert_eq!(editor.sources().count(), 3);
    assert_eq!(editor.destinations().count(), 2);
    assert!(editor.node("csv-Merchant-0").is_none());
}

#[test]
fn test_connect_adds_exactly_one_edge() {
    let mut editor = editor_for(&["Merchant"]);
    let edge = editor
        .connect(Connection::new("csv-Merchant-0", "iif-vendor"))
        .unwrap()
        .clone();

    assert_eq!(edge.source, "csv-Merchant-0");
    assert_eq!(edge.target, "iif-vendor");
    assert_eq!(editor.edges(), &[edge]);
}

#[test]
fn test_connect_permits_anything_between_existing_nodes() {
    let mut editor = editor_for(&["Merchant", "Amount"]);
    let pairs = [
        ("csv-Merchant-0", "iif-vendor"),
        ("csv-Merchant-0", "iif-vendor"),
        ("csv-Merchant-0", "csv-Amount-1"),
        ("iif-vendor", "iif-amount"),
        ("iif-amount", "csv-Amount-1"),
        ("csv-Amount-1", "csv-Amount-1"),
    ];
    for (source, target) in pairs {
        editor.connect(Connection::new(source, target)).unwrap();
    }

    assert_eq!(editor.edges().len(), pairs.len());
    for (edge, (source, target)) in editor.edges().iter().zip(pairs) {
        assert_eq!(edge.source, source);
        assert_eq!(edge.target, target);
    }

    let mut ids: Vec<_> = editor.edges().iter().map(|e| e.id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), pairs.len(), "Edge ids must be unique");
}

#[test]
fn test_connect_unknown_node_fails() {
    let mut editor = editor_for(&["Merchant"]);
    let err = editor
        .connect(Connection::new("csv-Merchant-0", "iif-memo"))
        .unwrap_err();
    assert_eq!(err, EditorError::UnknownNode("iif-memo".to_string()));
    assert!(editor.edges().is_empty());
}

#[test]
fn test_move_and_select_node() {
    let mut editor = editor_for(&["Merchant", "Amount"]);
    editor
        .connect(Connection::new("csv-Merchant-0", "iif-vendor"))
        .unwrap();

    editor.apply_node_changes([
        NodeChange::Position {
            id: "csv-Merchant-0".to_string(),
            position: Position::new(12.0, 34.0),
        },
        NodeChange::Select {
            id: "iif-vendor".to_string(),
            selected: true,
        },
    ]);

    let merchant = editor.node("csv-Merchant-0").unwrap();
    assert_eq!(merchant.position, Position::new(12.0, 34.0));
    assert!(!merchant.selected);
    assert!(editor.node("iif-vendor").unwrap().selected);

    let edge = &editor.edges()[0];
    assert_eq!(edge.source, "csv-Merchant-0");
    assert_eq!(edge.target, "iif-vendor");
}

#[test]
fn test_remove_node_drops_touching_edges_only() {
    let mut editor = editor_for(&["Merchant", "Amount"]);
    editor
        .connect(Connection::new("csv-Merchant-0", "iif-vendor"))
        .unwrap();
    editor
        .connect(Connection::new("csv-Amount-1", "iif-amount"))
        .unwrap();
    editor
        .connect(Connection::new("csv-Amount-1", "iif-vendor"))
        .unwrap();

    editor.apply_node_changes([NodeChange::Remove {
        id: "iif-vendor".to_string(),
    }]);

    assert!(editor.node("iif-vendor").is_none());
    assert_eq!(editor.nodes().len(), 3);
    assert_eq!(editor.edges().len(), 1);
    assert_eq!(editor.edges()[0].target, "iif-amount");

    // Remaining nodes are still addressable after removal.
    editor.apply_node_changes([NodeChange::Select {
        id: "iif-amount".to_string(),
        selected: true,
    }]);
    assert!(editor.node("iif-amount").unwrap().selected);
}

#[test]
fn test_unknown_changes_are_ignored() {
    let mut editor = editor_for(&["Merchant"]);
    let before = editor.clone();
    editor.apply_node_changes([
        NodeChange::Remove {
            id: "nope".to_string(),
        },
        NodeChange::Select {
            id: "nope".to_string(),
            selected: true,
        },
    ]);
    editor.apply_edge_changes([EdgeChange::Remove {
        id: "nope".to_string(),
    }]);
    assert_eq!(editor.nodes(), before.nodes());
    assert_eq!(editor.edges(), before.edges());
}

#[test]
fn test_edge_select_and_remove() {
    let mut editor = editor_for(&["Merchant"]);
    let id = editor
        .connect(Connection::new("csv-Merchant-0", "iif-vendor"))
        .unwrap()
        .id
        .clone();

    editor.apply_edge_changes([EdgeChange::Select {
        id: id.clone(),
        selected: true,
    }]);
    assert!(editor.edge(&id).unwrap().selected);

    editor.apply_edge_changes([EdgeChange::Remove { id: id.clone() }]);
    assert!(editor.edge(&id).is_none());
    assert_eq!(editor.nodes().len(), 3);
}

#[test]
fn test_edge_ids_follow_current_edges() {
    let mut editor = editor_for(&["Merchant"]);
    let pair = || Connection::new("csv-Merchant-0", "iif-vendor");

    editor.connect(pair()).unwrap();
    let second = editor.connect(pair()).unwrap().id.clone();
    assert_eq!(second, "edge-csv-Merchant-0-iif-vendor#2");

    editor.apply_edge_changes([EdgeChange::Remove {
        id: "edge-csv-Merchant-0-iif-vendor".to_string(),
    }]);
    let third = editor.connect(pair()).unwrap().id.clone();
    assert_eq!(third, "edge-csv-Merchant-0-iif-vendor");

    editor.apply_node_changes([NodeChange::Remove {
        id: "iif-vendor".to_string(),
    }]);
    assert!(editor.edges().is_empty());
}

#[test]
fn test_changes_deserialize_from_json() {
    let changes: Vec<NodeChange> = serde_json::from_str(
        r#"[
            {"type": "position", "id": "csv-Merchant-0", "position": {"x": 1.0, "y": 2.0}},
            {"type": "remove", "id": "iif-amount"}
        ]"#,
    )
    .expect("Failed to deserialize changes");

    let mut editor = editor_for(&["Merchant"]);
    editor.apply_node_changes(changes);
    assert_eq!(
        editor.node("csv-Merchant-0").unwrap().position,
        Position::new(1.0, 2.0)
    );
    assert!(editor.node("iif-amount").is_none());
}

#[test]
fn test_resolve_by_label() {
    let editor = editor_for(&["Merchant", "Amount"]);
    assert_eq!(editor.resolve("Vendor").unwrap().id, "iif-vendor");
    // Ids win over labels, and the first matching label wins among labels.
    assert_eq!(editor.resolve("Amount").unwrap().id, "csv-Amount-1");
    assert_eq!(editor.resolve("iif-amount").unwrap().label, "Amount");
    assert!(editor.resolve("Memo").is_none());
}

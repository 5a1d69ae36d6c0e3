use super::node::{Node, Position, Role};

/// A fixed target field the source columns can be connected to.
#[derive(Debug, Clone, Copy)]
pub struct DestinationField {
    pub id: &'static str,
    pub label: &'static str,
    pub position: Position,
}

/// Placeholder target fields. The set is fixed.
pub const DESTINATION_FIELDS: [DestinationField; 2] = [
    DestinationField {
        id: "iif-vendor",
        label: "Vendor",
        position: Position::new(400.0, 100.0),
    },
    DestinationField {
        id: "iif-amount",
        label: "Amount",
        position: Position::new(400.0, 200.0),
    },
];

impl DestinationField {
    pub fn to_node(&self) -> Node {
        Node::new(self.id, self.label, self.position, Role::Destination)
    }
}

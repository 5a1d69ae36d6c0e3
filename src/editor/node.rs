use serde::{Deserialize, Serialize};

/// A point on the editor canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Whether a node stands for an input column or a target field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Source,
    Destination,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub id: String,
    pub label: String,
    pub position: Position,
    pub role: Role,
    pub selected: bool,
}

impl Node {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        position: Position,
        role: Role,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            position,
            role,
            selected: false,
        }
    }

    /// Source node for the header column at `index`.
    ///
    /// The index is part of the id so duplicate header names stay distinct.
    pub fn source(header: &str, index: usize, position: Position) -> Self {
        Self::new(format!("csv-{}-{}", header, index), header, position, Role::Source)
    }
}

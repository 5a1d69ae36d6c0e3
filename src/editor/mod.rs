//! The mapping editor: a hand-drawn graph from source columns to destination fields.
//!
//! The editor holds only drawing state. Every operation is a direct update with
//! no validation of what the edges mean.

mod change;
mod destination;
mod edge;
mod node;

pub use change::{EdgeChange, NodeChange};
pub use destination::{DESTINATION_FIELDS, DestinationField};
pub use edge::{Connection, Edge};
pub use node::{Node, Position, Role};

use crate::config::EditorLayout;
use crate::error::EditorError;
use ahash::AHashMap;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct MappingEditor {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    #[serde(skip)]
    layout: EditorLayout,
    #[serde(skip)]
    node_index: AHashMap<String, usize>,
}

impl MappingEditor {
    pub fn new(layout: EditorLayout) -> Self {
        Self {
            layout,
            ..Self::default()
        }
    }

    /// Creates an editor already populated from `headers`.
    pub fn with_headers<S: AsRef<str>>(layout: EditorLayout, headers: &[S]) -> Self {
        let mut editor = Self::new(layout);
        editor.set_headers(headers);
        editor
    }

    /// Rebuilds every node from `headers` and drops all edges.
    pub fn set_headers<S: AsRef<str>>(&mut self, headers: &[S]) {
        let origin = self.layout.source_origin;
        let spacing = self.layout.source_spacing;

        self.nodes = headers
            .iter()
            .enumerate()
            .map(|(index, header)| {
                let position = Position::new(origin.x, origin.y + index as f64 * spacing);
                Node::source(header.as_ref(), index, position)
            })
            .chain(DESTINATION_FIELDS.iter().map(DestinationField::to_node))
            .collect();
        self.edges.clear();
        self.reindex();

        tracing::debug!(
            sources = headers.len(),
            destinations = DESTINATION_FIELDS.len(),
            "rebuilt mapping editor"
        );
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn layout(&self) -> &EditorLayout {
        &self.layout
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.node_index.get(id).map(|&i| &self.nodes[i])
    }

    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }

    pub fn sources(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.role == Role::Source)
    }

    pub fn destinations(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.role == Role::Destination)
    }

    /// Finds a node by id, falling back to the first node with a matching label.
    pub fn resolve(&self, id_or_label: &str) -> Option<&Node> {
        self.node(id_or_label)
            .or_else(|| self.nodes.iter().find(|n| n.label == id_or_label))
    }

    /// Applies node edits in order. Edits naming unknown nodes are ignored.
    ///
    /// Removing a node also removes every edge that touches it.
    pub fn apply_node_changes(&mut self, changes: impl IntoIterator<Item = NodeChange>) {
        for change in changes {
            match change {
                NodeChange::Position { id, position } => {
                    if let Some(node) = self.node_mut(&id) {
                        node.position = position;
                    }
                }
                NodeChange::Select { id, selected } => {
                    if let Some(node) = self.node_mut(&id) {
                        node.selected = selected;
                    }
                }
                NodeChange::Remove { id } => {
                    if self.node_index.contains_key(&id) {
                        self.nodes.retain(|n| n.id != id);
                        self.edges.retain(|e| e.source != id && e.target != id);
                        self.reindex();
                    }
                }
            }
        }
    }

    /// Applies edge edits in order. Edits naming unknown edges are ignored.
    pub fn apply_edge_changes(&mut self, changes: impl IntoIterator<Item = EdgeChange>) {
        for change in changes {
            match change {
                EdgeChange::Select { id, selected } => {
                    if let Some(edge) = self.edges.iter_mut().find(|e| e.id == id) {
                        edge.selected = selected;
                    }
                }
                EdgeChange::Remove { id } => self.edges.retain(|e| e.id != id),
            }
        }
    }

    /// Adds one edge between the chosen endpoints and returns its id.
    ///
    /// Any pair of existing nodes may be connected, including a node with
    /// itself and pairs that are already connected.
    pub fn connect(&mut self, connection: Connection) -> Result<&Edge, EditorError> {
        for endpoint in [&connection.source, &connection.target] {
            if !self.node_index.contains_key(endpoint) {
                return Err(EditorError::UnknownNode(endpoint.clone()));
            }
        }

        let id = self.free_edge_id(&connection);

        tracing::debug!(edge = %id, "connected nodes");
        self.edges.push(Edge {
            id,
            source: connection.source,
            target: connection.target,
            selected: false,
        });
        Ok(&self.edges[self.edges.len() - 1])
    }

    // `edge-<source>-<target>`, then `#2`, `#3`, ... for pairs already drawn.
    // Ids of removed edges are handed out again.
    fn free_edge_id(&self, connection: &Connection) -> String {
        let base = format!("edge-{}-{}", connection.source, connection.target);
        let mut id = base.clone();
        let mut n = 1;
        while self.edge(&id).is_some() {
            n += 1;
            id = format!("{}#{}", base, n);
        }
        id
    }

    fn node_mut(&mut self, id: &str) -> Option<&mut Node> {
        let index = *self.node_index.get(id)?;
        self.nodes.get_mut(index)
    }

    fn reindex(&mut self) {
        self.node_index = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (n.id.clone(), i))
            .collect();
    }
}

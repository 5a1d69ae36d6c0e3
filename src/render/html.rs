use crate::editor::{MappingEditor, Node, Role};
use crate::session::Session;
use crate::table::ParsedTable;
use itertools::Itertools;
use std::fmt::Write;

/// Assumed size of a node box on the canvas.
const NODE_WIDTH: f64 = 150.0;
const NODE_HEIGHT: f64 = 36.0;
const CANVAS_PADDING: f64 = 40.0;

/// Renders a session as a self-contained HTML fragment.
pub struct HtmlRenderer;

impl HtmlRenderer {
    /// Renders the upload/preview card and, when a table is loaded, the mapping card.
    pub fn render_session(session: &Session) -> String {
        let mut html = String::new();
        html.push_str("<section class=\"card upload\">\n");
        html.push_str("<h2>1. Upload or Load Example CSV</h2>\n");

        if let Some(name) = session.source_name() {
            let _ = writeln!(html, "<p class=\"source\">Source: {}</p>", escape(name));
        }
        if let Some(error) = session.error() {
            let _ = writeln!(html, "<p class=\"error\">{}</p>", escape(error));
        }
        if let Some(table) = session.table() {
            let _ = writeln!(
                html,
                "<h3>CSV Preview (Header and first {} rows)</h3>",
                session.preview_rows()
            );
            html.push_str(&Self::render_table(table));
        }
        html.push_str("</section>\n");

        if let Some(editor) = session.editor() {
            html.push_str("<section class=\"card mapping\">\n");
            html.push_str("<h2>2. Define Transformations</h2>\n");
            html.push_str(&Self::render_editor(editor));
            html.push_str("</section>\n");
        }
        html
    }

    /// Renders the header and preview rows as an HTML table.
    pub fn render_table(table: &ParsedTable) -> String {
        let header = table
            .header
            .iter()
            .map(|col| format!("<th>{}</th>", escape(col)))
            .join("");
        let body = table
            .rows
            .iter()
            .map(|row| {
                let cells = row
                    .iter()
                    .map(|cell| format!("<td>{}</td>", escape(cell)))
                    .join("");
                format!("<tr>{}</tr>", cells)
            })
            .join("\n");
        format!(
            "<table>\n<thead><tr>{}</tr></thead>\n<tbody>\n{}\n</tbody>\n</table>\n",
            header, body
        )
    }

    /// Draws nodes as positioned boxes and edges as SVG lines between them.
    pub fn render_editor(editor: &MappingEditor) -> String {
        let width = editor
            .nodes()
            .iter()
            .map(|n| n.position.x + NODE_WIDTH)
            .fold(0.0, f64::max)
            + CANVAS_PADDING;
        let height = editor
            .nodes()
            .iter()
            .map(|n| n.position.y + NODE_HEIGHT)
            .fold(0.0, f64::max)
            + CANVAS_PADDING;

        let mut html = String::new();
        let _ = writeln!(
            html,
            "<div class=\"canvas\" style=\"position:relative;width:{}px;height:{}px\">",
            width, height
        );
        let _ = writeln!(
            html,
            "<svg width=\"{}\" height=\"{}\" style=\"position:absolute;left:0;top:0\">",
            width, height
        );
        for edge in editor.edges() {
            let (Some(source), Some(target)) =
                (editor.node(&edge.source), editor.node(&edge.target))
            else {
                continue;
            };
            let class = if edge.selected { "edge selected" } else { "edge" };
            let _ = writeln!(
                html,
                "<line id=\"{}\" class=\"{}\" x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"#777\"/>",
                escape(&edge.id),
                class,
                source.position.x + NODE_WIDTH,
                source.position.y + NODE_HEIGHT / 2.0,
                target.position.x,
                target.position.y + NODE_HEIGHT / 2.0,
            );
        }
        html.push_str("</svg>\n");

        for node in editor.nodes() {
            html.push_str(&Self::render_node(node));
        }
        html.push_str("</div>\n");
        html
    }

    fn render_node(node: &Node) -> String {
        let role = match node.role {
            Role::Source => "input",
            Role::Destination => "output",
        };
        let selected = if node.selected { " selected" } else { "" };
        format!(
            "<div id=\"{}\" class=\"node {}{}\" style=\"position:absolute;left:{}px;top:{}px;width:{}px;border:1px solid #777;padding:10px;border-radius:3px;background:#fff\">{}</div>\n",
            escape(&node.id),
            role,
            selected,
            node.position.x,
            node.position.y,
            NODE_WIDTH,
            escape(&node.label)
        )
    }
}

/// Escapes text for use in HTML content and attribute values.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

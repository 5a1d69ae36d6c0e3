use crate::editor::{MappingEditor, Node};
use crate::session::Session;
use crate::table::ParsedTable;
use itertools::Itertools;
use std::borrow::Cow;
use unicode_width::UnicodeWidthStr;

const LINE_BREAK: &str = "⏎";

/// Renders a session for a terminal.
pub struct TextRenderer;

impl TextRenderer {
    pub fn render_session(session: &Session) -> String {
        let mut out = String::new();
        if let Some(name) = session.source_name() {
            out.push_str(&format!("Source: {}\n", name));
        }
        if let Some(error) = session.error() {
            out.push_str(&format!("Error: {}\n", error));
        }
        if let Some(table) = session.table() {
            out.push_str(&Self::render_preview(table));
        }
        if let Some(editor) = session.editor() {
            out.push('\n');
            out.push_str(&Self::render_editor(editor));
        }
        out
    }

    /// Draws the header and preview rows as a boxed table.
    ///
    /// Rows shorter than the header are padded with empty cells; extra cells get
    /// their own unnamed columns. Line breaks inside a cell are drawn as `⏎`.
    pub fn render_preview(table: &ParsedTable) -> String {
        let columns = table
            .rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(table.header.len()))
            .max()
            .unwrap_or(0);
        if columns == 0 {
            return String::new();
        }

        let widths: Vec<usize> = (0..columns)
            .map(|i| {
                std::iter::once(&table.header)
                    .chain(&table.rows)
                    .map(|row| display_width(&cell(row, i)))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let border = format!(
            "+{}+",
            widths.iter().map(|w| "-".repeat(w + 2)).join("+")
        );
        let line = |row: &[String]| {
            let cells = widths
                .iter()
                .enumerate()
                .map(|(i, &w)| {
                    let text = cell(row, i);
                    format!(" {}{} ", text, " ".repeat(w - display_width(&text)))
                })
                .join("|");
            format!("|{}|", cells)
        };

        let mut out = Vec::with_capacity(table.rows.len() + 4);
        out.push(border.clone());
        out.push(line(&table.header[..]));
        out.push(border.clone());
        for row in &table.rows {
            out.push(line(&row[..]));
        }
        out.push(border);
        out.join("\n") + "\n"
    }

    /// Lists nodes by role and every edge drawn between them.
    pub fn render_editor(editor: &MappingEditor) -> String {
        let label = |node: &Node| format!("{} [{}]", node.label, node.id);

        let mut out = String::from("Sources:\n");
        for node in editor.sources() {
            out.push_str(&format!("  {}\n", label(node)));
        }
        out.push_str("Destinations:\n");
        for node in editor.destinations() {
            out.push_str(&format!("  {}\n", label(node)));
        }
        out.push_str("Connections:\n");
        if editor.edges().is_empty() {
            out.push_str("  (none)\n");
        }
        for edge in editor.edges() {
            let name = |id: &str| {
                editor
                    .node(id)
                    .map(|n| n.label.clone())
                    .unwrap_or_else(|| id.to_string())
            };
            out.push_str(&format!(
                "  {} -> {}\n",
                name(&edge.source),
                name(&edge.target)
            ));
        }
        out
    }
}

/// The cell at `i`, with line breaks shown as `⏎` so a row stays on one line.
fn cell(row: &[String], i: usize) -> Cow<'_, str> {
    let text = row.get(i).map(String::as_str).unwrap_or("");
    if text.contains(['\n', '\r']) {
        Cow::Owned(text.replace("\r\n", LINE_BREAK).replace(['\n', '\r'], LINE_BREAK))
    } else {
        Cow::Borrowed(text)
    }
}

fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

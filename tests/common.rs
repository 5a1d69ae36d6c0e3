//! Common test utilities: sample inputs and small helpers.
use fieldmap::prelude::*;
use std::fs;
use std::path::PathBuf;

/// Five data records under a three-column header.
#[allow(dead_code)]
pub const LONG_CSV: &str = "\
id,vendor,amount
1,Acme,$10.00
2,Globex,$20.00
3,Initech,$30.00
4,Umbrella,$40.00
5,Hooli,$50.00
";

/// Breaks on the second data record: the quoted field never closes.
#[allow(dead_code)]
pub const UNTERMINATED_CSV: &str = "\
id,vendor,amount
1,Acme,$10.00
2,\"Globex,$20.00
";

#[allow(dead_code)]
pub const SAMPLE_HEADER: [&str; 11] = [
    "Cardholder",
    "Card name",
    "Merchant",
    "Amount",
    "Category",
    "GL code",
    "Project",
    "Cost code",
    "Cost type",
    "Date",
    "Note",
];

/// Writes `contents` to a fresh file under the system temp directory.
#[allow(dead_code)]
pub fn write_temp_file(name: &str, contents: &[u8]) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("fieldmap-tests-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("Failed to create temp dir");
    let path = dir.join(name);
    fs::write(&path, contents).expect("Failed to write temp file");
    path
}

/// An editor built from `headers` with the default layout.
#[allow(dead_code)]
pub fn editor_for(headers: &[&str]) -> MappingEditor {
    MappingEditor::with_headers(EditorLayout::default(), headers)
}

/// Ids of all nodes, in editor order.
#[allow(dead_code)]
pub fn node_ids(editor: &MappingEditor) -> Vec<String> {
    editor.nodes().iter().map(|n| n.id.clone()).collect()
}

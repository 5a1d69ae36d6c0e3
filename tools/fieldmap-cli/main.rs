use clap::{Parser, ValueEnum};
use fieldmap::prelude::*;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Extension the file picker filters for.
const EXPECTED_EXTENSION: &str = "csv";

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Html,
    Text,
}

/// Preview a delimited text file and draw field mappings from its columns
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the delimited text file to load
    file: Option<PathBuf>,

    /// Load the built-in example instead of a file
    #[arg(short, long, conflicts_with = "file")]
    example: bool,

    /// Field delimiter; guessed from the input when omitted
    #[arg(short, long)]
    delimiter: Option<char>,

    /// Path to a JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Connect two nodes, given as SOURCE=TARGET (node ids or labels)
    #[arg(long = "connect", value_name = "SOURCE=TARGET")]
    connections: Vec<String>,

    /// Remove a node (id or label) and the connections touching it
    #[arg(long = "remove", value_name = "NODE")]
    removals: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write the rendering to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => {
            Config::from_file(path).unwrap_or_else(|e| exit_with_error(&e.to_string()))
        }
        None => Config::default(),
    };
    if let Some(delimiter) = cli.delimiter {
        config.loader.delimiter = Some(delimiter);
    }

    let mut session = Session::new(config);
    let loaded = if cli.example {
        session.load_example().is_ok()
    } else {
        let path = cli.file.as_ref().unwrap_or_else(|| {
            exit_with_error("A file path is required unless --example is given.")
        });
        if path.extension().and_then(|e| e.to_str()) != Some(EXPECTED_EXTENSION) {
            tracing::warn!(path = %path.display(), "file does not have a .csv extension");
        }
        session.load_file(path).is_ok()
    };

    if loaded {
        apply_edits(&mut session, &cli.removals, &cli.connections);
    }

    let rendered = match cli.format {
        OutputFormat::Html => HtmlRenderer::render_session(&session),
        OutputFormat::Text => TextRenderer::render_session(&session),
    };
    match &cli.output {
        Some(path) => {
            fs::write(path, rendered).unwrap_or_else(|e| {
                exit_with_error(&format!(
                    "Failed to write output '{}': {}",
                    path.display(),
                    e
                ))
            });
            println!("Wrote {:?} rendering to '{}'", cli.format, path.display());
        }
        None => print!("{}", rendered),
    }

    if !loaded {
        std::process::exit(1);
    }
}

/// Applies node removals, then connections, to the session's editor.
fn apply_edits(session: &mut Session, removals: &[String], connections: &[String]) {
    let Some(editor) = session.editor_mut() else {
        if !removals.is_empty() || !connections.is_empty() {
            exit_with_error("The loaded table has no columns to map.");
        }
        return;
    };

    for name in removals {
        let id = resolve_id(editor, name);
        editor.apply_node_changes([NodeChange::Remove { id }]);
    }

    for spec in connections {
        let (source, target) = spec.split_once('=').unwrap_or_else(|| {
            exit_with_error(&format!(
                "Invalid connection '{}': expected SOURCE=TARGET",
                spec
            ))
        });
        let connection =
            Connection::new(resolve_id(editor, source), resolve_id(editor, target));
        if let Err(e) = editor.connect(connection) {
            exit_with_error(&e.to_string());
        }
    }
}

fn resolve_id(editor: &MappingEditor, name: &str) -> String {
    editor
        .resolve(name.trim())
        .map(|node| node.id.clone())
        .unwrap_or_else(|| exit_with_error(&format!("No node named '{}'", name.trim())))
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}

use clap::Parser;
use fieldmap::sample::SAMPLE_CSV;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fs;

const FIRST_NAMES: &[&str] = &["John", "Jane", "Robert", "Emily", "Ana", "Kenji", "Priya"];
const LAST_NAMES: &[&str] = &["Doe", "Smith", "Johnson", "White", "Silva", "Sato", "Rao"];
const CARD_KINDS: &[&str] = &["Personal", "Business", "Corp", "Travel"];
const MERCHANTS: &[(&str, &str, &str)] = &[
    ("Gas Station Plus", "Fuel", "5010 - Travel Expenses"),
    ("Office Supplies Co.", "Office Supplies", "6020 - Office Supplies"),
    ("Tech Gadgets Inc.", "Electronics", "1500 - Equipment Purchase"),
    ("Cloud Services LLC", "Software Subscription", "7030 - Software & Subscriptions"),
];
const PROJECTS: &[&str] = &[
    "Project Alpha:Phase 1",
    "Project Beta:Setup",
    "Project Gamma:Deployment",
    "Internal:Admin",
];
const COST_TYPES: &[&str] = &["Direct Project Cost", "Overhead", "Capital Expenditure"];

/// A CLI tool to generate expense-report CSV files for the fieldmap previewer
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated CSV file to
    #[arg(short, long, default_value = "generated_expenses.csv")]
    output: String,

    /// The number of data rows to generate
    #[arg(short, long, default_value_t = 100)]
    rows: usize,

    /// Leave a quoted field unterminated on the last row
    #[arg(long)]
    malformed: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    println!("Generating {} expense rows...", cli.rows);

    // Same header as the built-in example.
    let header = SAMPLE_CSV.trim().lines().next().unwrap_or_default();
    let mut lines = vec![header.to_string()];
    lines.extend((0..cli.rows).map(|_| generate_row(&mut rng)));

    if cli.malformed {
        lines.push("Broken Row,\"unterminated card name,Nowhere,$0.00".to_string());
        println!("-> Appended a row with an unterminated quoted field.");
    }

    fs::write(&cli.output, lines.join("\n") + "\n")?;
    println!("Successfully generated and saved CSV to '{}'", cli.output);

    Ok(())
}

fn generate_row(rng: &mut impl Rng) -> String {
    let first = FIRST_NAMES.choose(rng).copied().unwrap_or("John");
    let last = LAST_NAMES.choose(rng).copied().unwrap_or("Doe");
    let kind = CARD_KINDS.choose(rng).copied().unwrap_or("Personal");
    let (merchant, category, gl_code) = MERCHANTS.choose(rng).copied().unwrap_or(MERCHANTS[0]);
    let project = PROJECTS.choose(rng).copied().unwrap_or(PROJECTS[0]);
    let cost_type = COST_TYPES.choose(rng).copied().unwrap_or(COST_TYPES[0]);
    let amount: f64 = rng.random_range(1.0..500.0);
    let month = rng.random_range(1..=12);
    let day = rng.random_range(1..=28);

    [
        format!("{} {}", first, last),
        format!("{} {} {} Card", first, last, kind),
        merchant.to_string(),
        format!("${:.2}", amount),
        category.to_string(),
        gl_code.to_string(),
        format!("\"{}\"", project),
        category.to_string(),
        cost_type.to_string(),
        format!("{:02}/{:02}/2024", month, day),
        format!("Purchase at {}", merchant),
    ]
    .join(",")
}

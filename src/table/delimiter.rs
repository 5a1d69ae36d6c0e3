use super::parser::scan_records;

/// Delimiters tried, in order, when none is configured.
pub const CANDIDATES: [char; 6] = [',', '\t', '|', ';', '\u{1e}', '\u{1f}'];

/// Delimiter used when no candidate yields a consistent table.
pub const FALLBACK: char = ',';

/// Rows read per candidate, blank rows included.
const PREVIEW_ROWS: usize = 10;

/// Outcome of delimiter detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DelimiterGuess {
    pub delimiter: char,
    /// `false` when no candidate qualified and [`FALLBACK`] was chosen.
    pub detected: bool,
}

/// Picks the delimiter that splits the first records most consistently.
///
/// A candidate qualifies when it averages at least two fields per record.
/// Among qualifying candidates the one with the smallest change in field count
/// between consecutive records wins, as long as it also splits into more fields
/// than the current best.
///
/// A candidate whose preview hits a malformed quote is still scored on the
/// records read up to that point.
pub fn guess_delimiter(input: &str) -> DelimiterGuess {
    let mut best: Option<(char, usize, f64)> = None;

    for candidate in CANDIDATES {
        let records = scan_records(input, candidate, Some(PREVIEW_ROWS)).records;
        if records.is_empty() {
            continue;
        }

        let mut delta = 0;
        let mut total_fields = 0;
        let mut previous: Option<usize> = None;
        for record in &records {
            let count = record.len();
            total_fields += count;
            if let Some(prev) = previous {
                delta += count.abs_diff(prev);
            }
            previous = Some(count);
        }
        let average = total_fields as f64 / records.len() as f64;

        let improves = match best {
            None => true,
            Some((_, best_delta, best_average)) => delta <= best_delta && average > best_average,
        };
        if improves && average > 1.99 {
            best = Some((candidate, delta, average));
        }
    }

    match best {
        Some((delimiter, _, _)) => DelimiterGuess {
            delimiter,
            detected: true,
        },
        None => DelimiterGuess {
            delimiter: FALLBACK,
            detected: false,
        },
    }
}

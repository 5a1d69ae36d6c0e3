use winnow::combinator::{alt, opt};
use winnow::prelude::*;
use winnow::token::{any, take_while};

use crate::error::{ParseError, ParseErrorKind};

/// One record of delimited text: every cell kept as a string.
pub type Record = Vec<String>;

const BYTE_ORDER_MARK: char = '\u{feff}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Terminator {
    Delimiter,
    LineEnd,
    Eof,
}

/// Splits `input` into records, stopping at the first structural error.
///
/// Blank lines (records made of a single empty field) are skipped.
pub fn parse_records(input: &str, delimiter: char) -> Result<Vec<Record>, ParseError> {
    let scan = scan_records(input, delimiter, None);
    match scan.error {
        Some(error) => Err(error),
        None => Ok(scan.records),
    }
}

/// Records read up to the first structural error, and that error.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Scan {
    pub records: Vec<Record>,
    pub error: Option<ParseError>,
}

/// Reads at most `limit` rows, blank ones included, without giving up on errors.
///
/// When a row is malformed, the fields read so far are kept as its last record
/// and scanning stops. An unterminated quoted field holds the rest of the input.
pub(crate) fn scan_records(input: &str, delimiter: char, limit: Option<usize>) -> Scan {
    let full = input.strip_prefix(BYTE_ORDER_MARK).unwrap_or(input);
    let mut rest = full;
    let mut records = Vec::new();
    let mut row = 0;

    while !rest.is_empty() {
        if limit.is_some_and(|n| row >= n) {
            break;
        }
        let mut fields = Vec::new();
        let outcome = record(&mut rest, full, delimiter, row, &mut fields);
        row += 1;
        if !is_blank(&fields) {
            records.push(fields);
        }
        if let Err(error) = outcome {
            return Scan {
                records,
                error: Some(error),
            };
        }
    }

    Scan {
        records,
        error: None,
    }
}

fn is_blank(record: &Record) -> bool {
    record.len() == 1 && record[0].is_empty()
}

fn record(
    input: &mut &str,
    full: &str,
    delimiter: char,
    row: usize,
    fields: &mut Record,
) -> Result<(), ParseError> {
    loop {
        let offset = full.len() - input.len();
        let error = |kind| ParseError { kind, row, offset };

        if input.starts_with('"') {
            let start = *input;
            let Ok(value) = quoted_field.parse_next(input) else {
                *input = "";
                fields.push(start[1..].to_string());
                return Err(error(ParseErrorKind::MissingQuotes));
            };
            fields.push(value);
            quote_padding(delimiter)
                .parse_next(input)
                .map_err(|_| error(ParseErrorKind::InvalidQuotes))?;
        } else {
            let value = unquoted_field(delimiter)
                .parse_next(input)
                .map_err(|_| error(ParseErrorKind::InvalidQuotes))?;
            fields.push(value);
        }

        match terminator(delimiter).parse_next(input) {
            Ok(Terminator::Delimiter) => continue,
            Ok(Terminator::LineEnd) | Ok(Terminator::Eof) => return Ok(()),
            Err(_) => return Err(error(ParseErrorKind::InvalidQuotes)),
        }
    }
}

fn quoted_field(input: &mut &str) -> winnow::Result<String> {
    "\"".parse_next(input)?;
    let mut value = String::new();
    loop {
        let chunk = take_while(0.., |c: char| c != '"').parse_next(input)?;
        value.push_str(chunk);
        "\"".parse_next(input)?;
        if opt("\"").parse_next(input)?.is_none() {
            return Ok(value);
        }
        value.push('"');
    }
}

fn unquoted_field(delimiter: char) -> impl FnMut(&mut &str) -> winnow::Result<String> {
    move |input: &mut &str| {
        let text = take_while(0.., move |c: char| {
            c != delimiter && c != '\n' && c != '\r'
        })
        .parse_next(input)?;
        Ok(text.to_string())
    }
}

// Spaces are tolerated between a closing quote and the next delimiter.
fn quote_padding(delimiter: char) -> impl FnMut(&mut &str) -> winnow::Result<()> {
    move |input: &mut &str| {
        take_while(0.., move |c: char| {
            c != delimiter && (c == ' ' || c == '\t')
        })
        .void()
        .parse_next(input)
    }
}

fn terminator(delimiter: char) -> impl FnMut(&mut &str) -> winnow::Result<Terminator> {
    move |input: &mut &str| {
        if input.is_empty() {
            return Ok(Terminator::Eof);
        }
        if input.starts_with(delimiter) {
            let _d: char = any.parse_next(input)?;
            return Ok(Terminator::Delimiter);
        }
        alt(("\r\n", "\n", "\r"))
            .value(Terminator::LineEnd)
            .parse_next(input)
    }
}

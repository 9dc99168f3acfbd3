// csvboy-core/src/table.rs
//! In-memory table model and the CSV codec that fills and drains it.
//!
//! The whole file is read into a [`Table`] before any processing and the
//! whole result is written back in one pass. Both directions use the standard
//! comma-delimited, double-quote-escaped dialect; the first line is data, not
//! a header, and rows may have differing lengths.
//!
//! License: MIT OR APACHE 2.0

use csv::{ByteRecord, ReaderBuilder, Terminator, WriterBuilder};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::ops::Range;
use std::path::Path;

use crate::bom::BOM;
use crate::errors::{CsvboyError, Result};

pub type Cell = String;
pub type Row = Vec<Cell>;

/// An ordered sequence of rows, each an ordered sequence of cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total number of cells across all rows.
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Cell count of each row, in order.
    pub fn shape(&self) -> Vec<usize> {
        self.rows.iter().map(Vec::len).collect()
    }
}

impl From<Vec<Row>> for Table {
    fn from(rows: Vec<Row>) -> Self {
        Self::new(rows)
    }
}

impl<'a> From<Vec<Vec<&'a str>>> for Table {
    fn from(rows: Vec<Vec<&'a str>>) -> Self {
        Self::new(
            rows.into_iter()
                .map(|row| row.into_iter().map(str::to_string).collect())
                .collect(),
        )
    }
}

/// Row terminator used when writing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineTerminator {
    #[default]
    Lf,
    Crlf,
}

impl LineTerminator {
    pub fn as_bytes(&self) -> &'static [u8] {
        match self {
            LineTerminator::Lf => b"\n",
            LineTerminator::Crlf => b"\r\n",
        }
    }
}

impl From<LineTerminator> for Terminator {
    fn from(value: LineTerminator) -> Self {
        match value {
            LineTerminator::Lf => Terminator::Any(b'\n'),
            LineTerminator::Crlf => Terminator::CRLF,
        }
    }
}

/// Stands in for each byte sequence that is not valid UTF-8.
///
/// `U+FFFF` is a Unicode noncharacter reserved for internal use, so a
/// correctly encoded `U+FFFD` in the source keeps its meaning.
pub const INVALID_SEQUENCE: char = '\u{FFFF}';

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Parses CSV bytes into a table.
///
/// Blank lines become empty rows. A leading UTF-8 byte-order mark stays in the
/// first cell so the BOM phase can remove and report it. Invalid UTF-8 byte
/// sequences are decoded to [`INVALID_SEQUENCE`].
pub fn parse_table(data: &[u8]) -> Result<Table> {
    let mut data = data;
    let mut leading_boms = 0;
    while let Some(rest) = data.strip_prefix(UTF8_BOM) {
        data = rest;
        leading_boms += 1;
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data);
    let mut records = reader.byte_records();

    let mut rows = Vec::new();
    for span in record_spans(data) {
        if span.is_empty() {
            rows.push(Row::new());
            continue;
        }
        match records.next() {
            Some(record) => rows.push(decode_record(&record?)),
            None => break,
        }
    }
    for record in records {
        rows.push(decode_record(&record?));
    }

    if leading_boms > 0 {
        let marks: String = std::iter::repeat(BOM).take(leading_boms).collect();
        match rows.first_mut() {
            Some(row) => match row.first_mut() {
                Some(cell) => cell.insert_str(0, &marks),
                None => row.push(marks),
            },
            None => rows.push(vec![marks]),
        }
    }

    debug!("Parsed {} rows.", rows.len());
    Ok(Table::new(rows))
}

fn decode_record(record: &ByteRecord) -> Row {
    record.iter().map(decode_field).collect()
}

fn decode_field(field: &[u8]) -> Cell {
    let mut cell = String::with_capacity(field.len());
    for chunk in field.utf8_chunks() {
        cell.push_str(chunk.valid());
        if !chunk.invalid().is_empty() {
            cell.push(INVALID_SEQUENCE);
        }
    }
    cell
}

/// Byte ranges of the line-level records in `data`.
///
/// The `csv` reader skips blank lines, so this walks the same quoting rules
/// to find them: a blank line yields an empty range, and line breaks inside a
/// quoted field do not end the record. `\r\n`, `\n` and a lone `\r` each end
/// one line.
fn record_spans(data: &[u8]) -> Vec<Range<usize>> {
    #[derive(Clone, Copy, PartialEq, Eq)]
    enum State {
        StartField,
        InField,
        InQuoted,
        QuoteInQuoted,
    }

    let mut spans = Vec::new();
    let mut state = State::StartField;
    let mut start = 0;
    let mut i = 0;
    while i < data.len() {
        let byte = data[i];
        if state != State::InQuoted && (byte == b'\n' || byte == b'\r') {
            spans.push(start..i);
            if byte == b'\r' && data.get(i + 1) == Some(&b'\n') {
                i += 1;
            }
            i += 1;
            start = i;
            state = State::StartField;
            continue;
        }
        state = match (state, byte) {
            (State::StartField, b'"') => State::InQuoted,
            (State::InQuoted, b'"') => State::QuoteInQuoted,
            (State::InQuoted, _) => State::InQuoted,
            (State::QuoteInQuoted, b'"') => State::InQuoted,
            (_, b',') => State::StartField,
            _ => State::InField,
        };
        i += 1;
    }
    if start < data.len() {
        spans.push(start..data.len());
    }
    spans
}

/// Reads and parses the file at `path`.
pub fn read_table(path: &Path) -> Result<Table> {
    debug!("Reading input from {}", path.display());
    let data = fs::read(path).map_err(|source| CsvboyError::MissingInputFile {
        path: path.to_path_buf(),
        source,
    })?;
    parse_table(&data)
}

/// Serializes `table` into `writer` using minimal quoting.
pub fn write_table<W: Write>(mut inner: W, table: &Table, terminator: LineTerminator) -> Result<()> {
    let builder = {
        let mut builder = WriterBuilder::new();
        builder.flexible(true).terminator(terminator.into());
        builder
    };
    let mut writer = builder.from_writer(&mut inner);

    for row in table.rows() {
        if row.is_empty() {
            writer.flush()?;
            let raw = writer
                .into_inner()
                .map_err(|e| std::io::Error::from(e.into_error()))?;
            raw.write_all(terminator.as_bytes())?;
            writer = builder.from_writer(raw);
        } else {
            writer.write_record(row)?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Serializes `table` into a string.
pub fn table_to_string(table: &Table, terminator: LineTerminator) -> Result<String> {
    let mut buffer = Vec::new();
    write_table(&mut buffer, table, terminator)?;
    String::from_utf8(buffer).map_err(|e| CsvboyError::Serialization(e.to_string()))
}

/// Creates (or truncates) the file at `path` and writes `table` to it.
pub fn write_table_to_path(path: &Path, table: &Table, terminator: LineTerminator) -> Result<()> {
    debug!("Writing {} rows to {}", table.len(), path.display());
    let file = File::create(path)?;
    write_table(BufWriter::new(file), table, terminator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_quoted_fields_and_ragged_rows() {
        let table = parse_table(b"a,\"b,c\",d\n\"he said \"\"hi\"\"\"\n").unwrap();
        assert_eq!(table.shape(), vec![3, 1]);
        assert_eq!(table.rows()[0][1], "b,c");
        assert_eq!(table.rows()[1][0], "he said \"hi\"");
    }

    #[test]
    fn first_line_is_data() {
        let table = parse_table(b"name,city\nAnn,Oslo\n").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0], vec!["name", "city"]);
    }

    #[test]
    fn invalid_utf8_is_marked() {
        let table = parse_table(b"ok,caf\xe9\n").unwrap();
        assert_eq!(table.rows()[0][1], format!("caf{}", INVALID_SEQUENCE));
    }

    #[test]
    fn encoded_replacement_character_is_not_marked() {
        let table = parse_table("x\u{FFFD}y\n".as_bytes()).unwrap();
        assert_eq!(table.rows()[0][0], "x\u{FFFD}y");
    }

    #[test]
    fn blank_lines_are_empty_rows() {
        let table = parse_table(b"a\n\nb\n").unwrap();
        assert_eq!(table.shape(), vec![1, 0, 1]);
        assert_eq!(table_to_string(&table, LineTerminator::Lf).unwrap(), "a\n\nb\n");
    }

    #[test]
    fn blank_lines_with_crlf_and_leading_blank() {
        let table = parse_table(b"\r\na\r\n\r\nb").unwrap();
        assert_eq!(table.shape(), vec![0, 1, 0, 1]);
        assert_eq!(table_to_string(&table, LineTerminator::Crlf).unwrap(), "\r\na\r\n\r\nb\r\n");
    }

    #[test]
    fn line_breaks_inside_quotes_do_not_split_rows() {
        let table = parse_table(b"\"one\n\ntwo\",x\n\ny\n").unwrap();
        assert_eq!(table.shape(), vec![2, 0, 1]);
        assert_eq!(table.rows()[0][0], "one\n\ntwo");
    }

    #[test]
    fn stray_quote_inside_unquoted_field_is_literal() {
        let table = parse_table(b"a\"b\n\nc\n").unwrap();
        assert_eq!(table.shape(), vec![1, 0, 1]);
        assert_eq!(table.rows()[0][0], "a\"b");
    }

    #[test]
    fn leading_bom_stays_in_first_cell() {
        let table = parse_table("\u{FEFF}a,b\nc,d\n".as_bytes()).unwrap();
        assert_eq!(table.rows()[0], vec!["\u{FEFF}a", "b"]);
        assert_eq!(table.rows()[1], vec!["c", "d"]);
    }

    #[test]
    fn bom_only_line_is_a_row() {
        let table = parse_table("\u{FEFF}\n".as_bytes()).unwrap();
        assert_eq!(table.shape(), vec![1]);
        assert_eq!(table.rows()[0][0], "\u{FEFF}");
    }

    #[test]
    fn writes_minimal_quoting() {
        let table = Table::from(vec![vec!["plain", "with,comma", "with \"quote\""]]);
        let out = table_to_string(&table, LineTerminator::Lf).unwrap();
        assert_eq!(out, "plain,\"with,comma\",\"with \"\"quote\"\"\"\n");
    }

    #[test]
    fn crlf_terminator() {
        let table = Table::from(vec![vec!["a"], vec!["b", "c"]]);
        let out = table_to_string(&table, LineTerminator::Crlf).unwrap();
        assert_eq!(out, "a\r\nb,c\r\n");
    }

    #[test]
    fn empty_input_gives_empty_table() {
        let table = parse_table(b"").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.cell_count(), 0);
    }
}

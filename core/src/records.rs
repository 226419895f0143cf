//! Fixed-width text records.
//!
//! Every field is right-justified and space-padded. Text is truncated to its
//! width; numbers saturate at the largest value their digits can hold. Records
//! are Latin-1 encoded, so each record kind has a constant byte length and a
//! reader can seek to `line * len`.

use std::io::{self, Write};

use crate::latin1;

pub const TERM_WIDTH: usize = 14;
pub const DOCS_WIDTH: usize = 3;
pub const START_WIDTH: usize = 7;
pub const FREQ_WIDTH: usize = 4;
pub const NAME_WIDTH: usize = 11;

/// Bytes per dictionary line, newline included.
pub const DICT_RECORD_LEN: usize = TERM_WIDTH + 1 + DOCS_WIDTH + 1 + START_WIDTH + 1;
pub const POST_RECORD_LEN: usize = DOCS_WIDTH + 1 + FREQ_WIDTH + 1;
pub const MAP_RECORD_LEN: usize = NAME_WIDTH + 1;

/// Term field of a slot whose term was pruned.
pub const REMOVED: &str = "REMOVED";
/// Term field of a slot that was never used.
pub const NULL: &str = "NULL";
/// Counter value written for sentinel records.
pub const SENTINEL_COUNT: i64 = -1;

pub fn field_max(width: usize) -> i64 {
    10i64.pow(width as u32) - 1
}

pub fn clamp(value: i64, width: usize) -> i64 {
    value.min(field_max(width))
}

fn truncate(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

pub fn dict_record(term: &str, num_docs: i64, start: i64) -> String {
    format!(
        "{:>tw$} {:>dw$} {:>sw$}\n",
        truncate(term, TERM_WIDTH),
        clamp(num_docs, DOCS_WIDTH),
        clamp(start, START_WIDTH),
        tw = TERM_WIDTH,
        dw = DOCS_WIDTH,
        sw = START_WIDTH,
    )
}

/// A recorded term occurs at least once, so `value` is floored to 1.
pub fn post_record(doc_id: i64, value: i64) -> String {
    format!(
        "{:>dw$} {:>fw$}\n",
        clamp(doc_id, DOCS_WIDTH),
        clamp(value, FREQ_WIDTH).max(1),
        dw = DOCS_WIDTH,
        fw = FREQ_WIDTH,
    )
}

pub fn map_record(name: &str) -> String {
    format!("{:>nw$}\n", truncate(name, NAME_WIDTH), nw = NAME_WIDTH)
}

pub fn sentinel_record(marker: &str) -> String {
    dict_record(marker, SENTINEL_COUNT, SENTINEL_COUNT)
}

pub fn write_record<W: Write>(w: &mut W, record: &str) -> io::Result<()> {
    w.write_all(&latin1::encode(record))
}

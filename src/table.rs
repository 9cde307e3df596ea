use crate::qint::{Qint, DIGIT_BITS, QINT_MASK, TON_DECIMALS};
use std::fmt;
use std::io::{self, Write};
use tracing::debug;

/// First packed value of the default table, exponent 6 digit 0
pub const DEFAULT_START: u8 = 0b11_0000;
pub const DEFAULT_COUNT: usize = 17;

/// One printed line of the lookup table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableRow {
    pub qint: Qint,
    pub ton: f64,
}

impl TableRow {
    pub fn new(qint: Qint) -> Self {
        TableRow {
            qint,
            ton: qint.to_ton(),
        }
    }
}

impl fmt::Display for TableRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            ";; 0x{:X} {:05b} {:0width$b} -> {:.decimals$} TON",
            self.qint.bits(),
            self.qint.exponent(),
            self.qint.digit(),
            self.ton,
            width = DIGIT_BITS as usize,
            decimals = TON_DECIMALS as usize,
        )
    }
}

/// Rows for `count` consecutive packed values starting at `start`.
/// Stops early rather than wrapping past the last 7-bit value.
pub fn rows(start: u8, count: usize) -> Vec<TableRow> {
    let start = (start & QINT_MASK) as usize;
    let end = start.saturating_add(count);
    let last = end.min(QINT_MASK as usize + 1);
    if end > last {
        debug!("table truncated to {} rows", last - start);
    }
    (start..last)
        .map(|bits| TableRow::new(Qint::new(bits as u8)))
        .collect()
}

pub fn default_rows() -> Vec<TableRow> {
    rows(DEFAULT_START, DEFAULT_COUNT)
}

pub fn write_table<W: Write>(writer: &mut W, rows: &[TableRow]) -> io::Result<()> {
    for row in rows {
        writeln!(writer, "{}", row)?;
    }
    writer.flush()
}

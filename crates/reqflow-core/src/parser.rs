//! Line parser — validates one raw reqlog line and splits it into a [`Row`].
//!
//! Only the structure is checked here: the `REQ` marker, the field count and
//! the head field. Field contents are decoded lazily by the row getters.

use crate::error::ParseError;
use crate::row::Row;

/// Literal token every reqlog row starts with.
pub const MARKER: &str = "REQ";

/// Field counts of the two known reqlog layouts.
pub const FIELD_COUNTS: [usize; 2] = [12, 14];

/// Parse one raw line into a [`Row`].
///
/// Anything before the first `REQ` (syslog prefixes, file offsets, …) is
/// discarded before splitting on `\t`.
pub fn parse_line(line: &str) -> Result<Row, ParseError> {
    let idx = line.find(MARKER).ok_or(ParseError::MarkerNotFound)?;
    let fields: Vec<String> = line[idx..].split('\t').map(str::to_owned).collect();

    if !FIELD_COUNTS.contains(&fields.len()) {
        return Err(ParseError::FieldCountMismatch(fields.len()));
    }
    if fields[0] != MARKER {
        return Err(ParseError::HeaderMismatch(fields[0].clone()));
    }

    Ok(Row::new(fields))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

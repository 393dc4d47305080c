//! Miscellaneous project utilities.

use crate::EDGE_LENGTH;
use std::fmt::{self, Formatter};
use std::iter::Iterator;

/// Header naming the columns above a [`format_grid`] diagram.
pub const COLUMN_HEADER: &str = "   A B C D E F G H";

/// Format 64 characters into the transcript grid format, one row per line.
/// `piece_iter` must yield exactly 64 items.
pub fn format_grid<T: Iterator<Item = char>>(mut piece_iter: T, f: &mut Formatter) -> fmt::Result {
    for row in 0..EDGE_LENGTH {
        write!(f, "{} ", row)?;
        for _ in 0..EDGE_LENGTH {
            write!(f, " {}", piece_iter.next().ok_or(fmt::Error)?)?;
        }
        writeln!(f)?;
    }

    match piece_iter.next() {
        None => Ok(()),
        _ => Err(fmt::Error),
    }
}

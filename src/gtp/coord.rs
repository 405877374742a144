//! GTP coordinate text codec
//!
//! Columns are letters `a..z` with `i` skipped, rows are 1-based integers;
//! the literal `pass` is a move of its own. `b3` is column 2, row 3.

use crate::board::Pos;
use crate::game::Move;
use thiserror::Error;

/// Column letters in order; note the missing `i`
const COLUMN_LETTERS: &[u8] = b"abcdefghjklmnopqrstuvwxyz";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoordError {
    #[error("invalid point: '{0}'")]
    Invalid(String),
    #[error("point off board: '{0}'")]
    OffBoard(String),
}

/// Parse a GTP move token (`pass` or a point like `a1`) for a board of the
/// given size
pub fn parse_move(token: &str, board_size: usize) -> Result<Move, CoordError> {
    let s = token.to_ascii_lowercase();
    if s == "pass" {
        return Ok(Move::Pass);
    }

    let mut chars = s.chars();
    let col_c = chars.next().ok_or_else(|| CoordError::Invalid(s.clone()))?;
    if !col_c.is_ascii_lowercase() || col_c == 'i' {
        return Err(CoordError::Invalid(s));
    }
    let mut col = col_c as usize - 'a' as usize;
    if col_c < 'i' {
        col += 1;
    }

    let row: usize = chars
        .as_str()
        .parse()
        .map_err(|_| CoordError::Invalid(s.clone()))?;
    if row < 1 {
        return Err(CoordError::Invalid(s));
    }
    if row > board_size || col > board_size {
        return Err(CoordError::OffBoard(s));
    }
    Ok(Move::Place(Pos::new(row as u8, col as u8)))
}

/// Format a point as GTP text, e.g. `a1`
pub fn format_point(pos: Pos) -> String {
    let letter = COLUMN_LETTERS[pos.col as usize - 1] as char;
    format!("{letter}{}", pos.row)
}

/// Format a move as GTP text (`pass` or a point)
pub fn format_move(mv: Move) -> String {
    match mv {
        Move::Pass => "pass".to_string(),
        Move::Place(pos) => format_point(pos),
    }
}

//! Go Text Protocol front end
//!
//! Everything wire-facing lives here: the command vocabulary, the coordinate
//! codec, and the connection loop. The game rules know nothing about text.

pub mod command;
pub mod connection;
pub mod coord;

// Re-exports
pub use command::Command;
pub use connection::GtpConnection;
pub use coord::{format_move, format_point, parse_move, CoordError};

//! Raw IRC line parsing.

mod line;
mod nom_parser;
pub mod tags;

pub use self::line::ParsedLine;
pub use self::tags::Tags;

pub mod csv_writer;
pub mod json;
pub mod markdown;
pub mod terminal;

pub use csv_writer::CsvWriter;
pub use json::JsonWriter;
pub use markdown::MarkdownWriter;
pub use terminal::TerminalWriter;

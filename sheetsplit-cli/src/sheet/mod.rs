//! Spreadsheet read/write adapters

pub mod reader;
pub mod writer;

pub use reader::read_table;
pub use writer::write_table;

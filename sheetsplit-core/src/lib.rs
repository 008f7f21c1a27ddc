//! Row-range partitioning for spreadsheet splitting
//!
//! This crate holds the pure chunking logic behind the `sheetsplit` tool: an
//! ordered-row table model, the partitioner that cuts a table into contiguous
//! chunks of bounded row count, and the fixed output-naming contract. All I/O
//! lives in the CLI crate; everything here is pure over in-memory tables.
//!
//! # Example
//!
//! ```rust
//! use sheetsplit_core::{Partitioner, PartitionOutcome, SplitParameters, Table};
//!
//! let table = Table::from_rows(vec![
//!     vec!["id".into(), "name".into()],
//!     vec!["1".into(), "ada".into()],
//!     vec!["2".into(), "grace".into()],
//!     vec!["3".into(), "edsger".into()],
//! ]);
//!
//! let params = SplitParameters::new(2, true).unwrap();
//! let outcome = Partitioner::new(params).partition(&table);
//!
//! match outcome {
//!     PartitionOutcome::Chunks(chunks) => {
//!         assert_eq!(chunks.len(), 2);
//!         // every chunk repeats the header row
//!         assert_eq!(chunks[1].table.row(0), table.row(0));
//!     }
//!     PartitionOutcome::EmptyTable => unreachable!(),
//! }
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod naming;
pub mod partition;
pub mod table;

pub use error::{CoreError, Result};
pub use partition::{Chunk, PartitionOutcome, Partitioner, SplitParameters};
pub use table::Table;

//! Row-range partitioning
//!
//! Splits a loaded table into contiguous chunks of at most `chunk_size` data
//! rows, optionally repeating the header row at the top of every chunk.

use crate::{
    error::{CoreError, Result},
    naming,
    table::Table,
};

/// Parameters governing one split run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitParameters {
    chunk_size: usize,
    keep_header: bool,
}

impl SplitParameters {
    /// Validate and build split parameters
    ///
    /// `chunk_size` counts data rows only; a repeated header row does not
    /// count toward it.
    pub fn new(chunk_size: usize, keep_header: bool) -> Result<Self> {
        if chunk_size == 0 {
            return Err(CoreError::InvalidChunkSize);
        }
        Ok(Self {
            chunk_size,
            keep_header,
        })
    }

    /// Maximum number of data rows per chunk
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Whether the header row is repeated in every chunk
    pub fn keep_header(&self) -> bool {
        self.keep_header
    }
}

/// One output chunk: a contiguous run of data rows, with the header on top
/// when header retention is on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// 1-based sequence index used in output naming
    pub index: usize,
    /// 0-based offset of the first data row within the data-row pool
    pub start: usize,
    /// Number of data rows (a prepended header is not counted)
    pub data_rows: usize,
    /// Assembled output table, header first when retained
    pub table: Table,
}

impl Chunk {
    /// Output file name for this chunk
    pub fn file_name(&self, basename: &str) -> String {
        naming::part_file_name(basename, self.index)
    }
}

/// Result of partitioning one table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartitionOutcome {
    /// The table had no rows at all; nothing to write, not a failure
    EmptyTable,
    /// Chunks in ascending contiguous order; empty when header retention
    /// consumed the only row
    Chunks(Vec<Chunk>),
}

/// Splits tables according to fixed parameters
#[derive(Debug, Clone, Copy)]
pub struct Partitioner {
    params: SplitParameters,
}

impl Partitioner {
    /// Create a partitioner for one run
    pub fn new(params: SplitParameters) -> Self {
        Self { params }
    }

    /// Partition a table into chunks
    ///
    /// Pure over the table; no I/O happens here. Every data row lands in
    /// exactly one chunk, in original order, and the final chunk may be
    /// shorter than `chunk_size`.
    pub fn partition(&self, table: &Table) -> PartitionOutcome {
        if table.is_empty() {
            return PartitionOutcome::EmptyTable;
        }

        let (header, pool_start) = if self.params.keep_header() {
            (table.row(0), 1)
        } else {
            (None, 0)
        };
        let pool_len = table.row_count() - pool_start;

        let chunk_size = self.params.chunk_size();
        let mut chunks = Vec::with_capacity(pool_len.div_ceil(chunk_size));
        let mut start = 0;
        while start < pool_len {
            let end = (start + chunk_size).min(pool_len);
            let data = table.slice(pool_start + start..pool_start + end);

            let mut rows = Vec::with_capacity(data.len() + usize::from(header.is_some()));
            if let Some(header) = header {
                rows.push(header.to_vec());
            }
            rows.extend(data.iter().cloned());

            chunks.push(Chunk {
                index: chunks.len() + 1,
                start,
                data_rows: end - start,
                table: Table::from_rows(rows),
            });

            start = end;
        }

        PartitionOutcome::Chunks(chunks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_table(rows: usize) -> Table {
        Table::from_rows(
            (0..rows)
                .map(|i| vec![format!("r{i}"), format!("v{i}")])
                .collect(),
        )
    }

    fn headed_table(data_rows: usize) -> Table {
        let mut rows = vec![vec!["id".to_string(), "value".to_string()]];
        rows.extend((0..data_rows).map(|i| vec![format!("r{i}"), format!("v{i}")]));
        Table::from_rows(rows)
    }

    fn partition(table: &Table, chunk_size: usize, keep_header: bool) -> Vec<Chunk> {
        let params = SplitParameters::new(chunk_size, keep_header).unwrap();
        match Partitioner::new(params).partition(table) {
            PartitionOutcome::Chunks(chunks) => chunks,
            PartitionOutcome::EmptyTable => panic!("expected chunks, table was empty"),
        }
    }

    #[test]
    fn test_zero_chunk_size_is_rejected() {
        assert!(matches!(
            SplitParameters::new(0, false),
            Err(CoreError::InvalidChunkSize)
        ));
        assert!(SplitParameters::new(1, true).is_ok());
    }

    #[test]
    fn test_example_250_rows_in_chunks_of_100() {
        let chunks = partition(&data_table(250), 100, false);

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].data_rows, 100);
        assert_eq!(chunks[1].data_rows, 100);
        assert_eq!(chunks[2].data_rows, 50);
        assert_eq!(chunks[0].file_name("data"), "data_part_1.xlsx");
        assert_eq!(chunks[1].file_name("data"), "data_part_2.xlsx");
        assert_eq!(chunks[2].file_name("data"), "data_part_3.xlsx");
    }

    #[test]
    fn test_exact_multiple_produces_full_chunks_only() {
        let chunks = partition(&data_table(6), 3, false);

        assert_eq!(chunks.len(), 2);
        assert!(chunks.iter().all(|c| c.data_rows == 3));
    }

    #[test]
    fn test_indices_are_one_based_and_contiguous() {
        let chunks = partition(&data_table(10), 3, false);

        let indices: Vec<usize> = chunks.iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![1, 2, 3, 4]);

        let mut expected_start = 0;
        for chunk in &chunks {
            assert_eq!(chunk.start, expected_start);
            expected_start += chunk.data_rows;
        }
        assert_eq!(expected_start, 10);
    }

    #[test]
    fn test_concatenated_chunks_reproduce_the_table() {
        let table = data_table(25);
        let chunks = partition(&table, 4, false);

        let mut rebuilt: Vec<Vec<String>> = Vec::new();
        for chunk in &chunks {
            rebuilt.extend(chunk.table.rows().iter().cloned());
        }
        assert_eq!(rebuilt, table.rows());
    }

    #[test]
    fn test_header_is_repeated_in_every_chunk() {
        let table = headed_table(5);
        let chunks = partition(&table, 2, true);

        assert_eq!(chunks.len(), 3);
        for chunk in &chunks {
            assert_eq!(chunk.table.row(0), table.row(0));
        }
        assert_eq!(chunks[0].data_rows, 2);
        assert_eq!(chunks[1].data_rows, 2);
        assert_eq!(chunks[2].data_rows, 1);
        // header rides on top of chunk_size, never inside it
        assert_eq!(chunks[0].table.row_count(), 3);
        assert_eq!(chunks[2].table.row_count(), 2);
    }

    #[test]
    fn test_header_rows_strip_back_to_original_data() {
        let table = headed_table(7);
        let chunks = partition(&table, 3, true);

        let mut rebuilt: Vec<Vec<String>> = Vec::new();
        for chunk in &chunks {
            rebuilt.extend(chunk.table.rows().iter().skip(1).cloned());
        }
        assert_eq!(rebuilt, table.rows()[1..]);
    }

    #[test]
    fn test_empty_table_signals_skip() {
        let params = SplitParameters::new(10, false).unwrap();
        let outcome = Partitioner::new(params).partition(&Table::new());
        assert_eq!(outcome, PartitionOutcome::EmptyTable);

        let params = SplitParameters::new(10, true).unwrap();
        let outcome = Partitioner::new(params).partition(&Table::new());
        assert_eq!(outcome, PartitionOutcome::EmptyTable);
    }

    #[test]
    fn test_header_only_table_produces_zero_chunks() {
        let table = headed_table(0);
        let chunks = partition(&table, 10, true);
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_single_row_without_header_is_one_chunk() {
        let chunks = partition(&data_table(1), 10, false);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].data_rows, 1);
    }

    #[test]
    fn test_oversized_chunk_size_yields_a_single_chunk() {
        let chunks = partition(&data_table(5), 100, false);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].data_rows, 5);
    }
}

//! Output naming contract for split files
//!
//! The names are fixed: a source file `report.xlsx` gets a sibling folder
//! `report_splits` holding `report_part_1.xlsx`, `report_part_2.xlsx`, ...

/// Folder name holding all chunks of one source file
pub fn splits_dir_name(basename: &str) -> String {
    format!("{basename}_splits")
}

/// File name of one chunk file; `index` is 1-based with no gaps
///
/// Chunks are always written as `.xlsx` regardless of the source extension.
pub fn part_file_name(basename: &str, index: usize) -> String {
    format!("{basename}_part_{index}.xlsx")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_dir_name_appends_suffix() {
        assert_eq!(splits_dir_name("report"), "report_splits");
    }

    #[test]
    fn test_part_file_name_is_one_based_and_unpadded() {
        assert_eq!(part_file_name("report", 1), "report_part_1.xlsx");
        assert_eq!(part_file_name("report", 10), "report_part_10.xlsx");
    }

    #[test]
    fn test_basename_with_dots_survives() {
        assert_eq!(part_file_name("2024.q1", 2), "2024.q1_part_2.xlsx");
        assert_eq!(splits_dir_name("2024.q1"), "2024.q1_splits");
    }
}

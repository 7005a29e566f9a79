//! Shared constants for data layout and file naming

/// Environment variable pointing at the root of the static benchmark data.
pub const DATA_ROOT_ENV: &str = "OPTBENCH_DATA";

/// Default suite version used when a caller does not name one.
pub const DEFAULT_SUITE_VERSION: &str = "2022";

/// File name of a rotation matrix table: `M_<fn>_D<dim>.txt`.
pub fn matrix_file_name(function: u16, dimension: usize) -> String {
    format!("M_{}_D{}.txt", function, dimension)
}

/// File name of a shift vector table: `shift_data_<fn>.txt`.
pub fn shift_file_name(function: u16) -> String {
    format!("shift_data_{}.txt", function)
}

/// File name of a shuffle table: `shuffle_data_<fn>_D<dim>.txt`.
pub fn shuffle_file_name(function: u16, dimension: usize) -> String {
    format!("shuffle_data_{}_D{}.txt", function, dimension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_conventions() {
        assert_eq!(matrix_file_name(1, 2), "M_1_D2.txt");
        assert_eq!(shift_file_name(7), "shift_data_7.txt");
        assert_eq!(shuffle_file_name(6, 20), "shuffle_data_6_D20.txt");
    }
}

//! CSV reading utilities.

mod reader;

pub use reader::{
    MAX_CSV_FILE_SIZE, check_file_size_with_limit, read_csv_bytes, read_csv_file,
    validate_dataframe_shape,
};

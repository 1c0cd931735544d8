pub mod date_utils;
pub mod progress_utils;
pub mod test_utils;

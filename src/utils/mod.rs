pub mod cmd_utils;
pub mod log_utils;
pub mod path_utils;

pub mod error;
pub mod exit_code;
pub mod formatter;

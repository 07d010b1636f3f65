//! Terminal output formatting
//!
//! Display utilities for the line-based game and CLI results.

pub mod display;
pub mod formatters;

pub use display::{
    print_check_result, write_banner, write_board, write_check_result, write_keyboard,
    write_statistics,
};

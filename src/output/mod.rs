pub mod formatter;

pub use formatter::{format_breakdown, format_result_line, should_use_colors};

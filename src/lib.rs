pub mod dataset;
pub mod index;
pub mod output;

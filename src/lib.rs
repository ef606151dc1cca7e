pub mod chart;
pub mod config;
pub mod input;
pub mod output;
pub mod plotting;
pub mod stats;
pub mod utils;

pub mod config;
pub mod level;
pub mod report;
pub mod result_type;
pub mod state;

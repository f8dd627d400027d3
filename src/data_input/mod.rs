// src/data_input/mod.rs

pub mod run_recordings;
pub mod steering_data;
pub mod steering_parser;

// src/data_input/mod.rs

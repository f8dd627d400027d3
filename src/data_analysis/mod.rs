// src/data_analysis/mod.rs

pub mod accuracy;

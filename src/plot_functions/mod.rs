// src/plot_functions/mod.rs

pub mod plot_steering_comparison;

// src/plot_functions/mod.rs

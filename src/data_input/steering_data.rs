// src/data_input/steering_data.rs

/// One row of a steering recording.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteeringSample {
    pub sample_time_stamp: f64, // Microseconds. Only the chart uses it.
    pub ground_steering: f64,   // Recorded reference steering, treated as ground truth.
    pub output: f64,            // Steering produced by the algorithm under test.
}

impl SteeringSample {
    pub fn new(sample_time_stamp: f64, ground_steering: f64, output: f64) -> Self {
        Self {
            sample_time_stamp,
            ground_steering,
            output,
        }
    }

    /// A zero reference means the recording carries no ground truth for this instant.
    pub fn has_reference(&self) -> bool {
        self.ground_steering != 0.0
    }
}

// src/data_input/steering_data.rs

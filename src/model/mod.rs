pub mod inputs;
pub mod metrics;
pub mod recommendations;
pub mod scores;
pub mod thresholds;
pub mod weights;

// Adapters layer: process spawning and report output.

pub mod process;
pub mod report;

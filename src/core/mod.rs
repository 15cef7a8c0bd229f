pub mod cancel;
pub mod discovery;
pub mod runner;

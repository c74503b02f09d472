//! The sequential rotation-probing loop.
mod prober;
mod record;


pub use prober::{ProbeReporter, ProbeRun, ProbeSettings, Prober};
pub use record::run_and_record;

//! Process orchestration: runner, run configuration, and result aggregate.

mod parameters;
mod result;
mod runner;

pub use parameters::ProcessConfig;
pub use result::{MoranProcessResult, Outcome};
pub use runner::MoranProcessRunner;

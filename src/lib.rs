pub mod blastp;
pub mod errors;
mod runner;
pub mod tool;

use crate::errors::RunnerError;

pub use crate::runner::{confirmation_message, run_alignment};

pub fn run() -> Result<(), RunnerError> {
    runner::run()
}

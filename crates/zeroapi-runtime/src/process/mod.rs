//! Subprocess helpers shared by the executor and the toolchain.

mod capture;

pub use capture::{CapturedOutput, configure_command_no_window, run_merged};

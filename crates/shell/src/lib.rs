//! `qchaos-shell` — the operator menu.
//!
//! Reads commands from any `BufRead`, writes reports to any `Write`, and
//! forwards every decision to `qchaos-inventory`.

pub mod config;
pub mod session;

pub use config::ShellConfig;
pub use session::Session;

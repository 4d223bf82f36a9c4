//! LeakGuard command-line front end
//!
//! ```text
//! leakguard predict --model line.json [--input request.json] [--top 5] [--pretty]
//! leakguard model-info --model line.json
//! ```
//!
//! `predict` reads a request from `--input` or stdin and prints exactly one
//! JSON envelope on stdout. Diagnostics go to stderr.

pub mod cli;
pub mod commands;
pub mod logging;

pub use cli::{Cli, Command, ModelArgs, PredictArgs};

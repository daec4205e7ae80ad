//! coldload command-line front end
//!
//! The binary is a thin wrapper over [`cli`]; commands write to any
//! `io::Write` so they can be exercised directly from tests.

pub mod cli;
pub mod render;

//! Common test utilities for mddbl CLI tests.
//!
//! This module provides:
//! - `TestEnv`: an isolated project folder plus helpers to run the binary
//! - Fixtures: sample `mddbl.json` contents

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;

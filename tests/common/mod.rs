//! Common test utilities for stackctl integration tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project/home directories and a CLI runner
//! - `FakeAws`: A scripted stand-in for the `aws` executable (unix only)
//! - Fixtures: Reusable template content

#![allow(dead_code)]

pub mod env;
#[cfg(unix)]
pub mod fake_aws;
pub mod fixtures;

pub use env::*;
#[cfg(unix)]
pub use fake_aws::*;
pub use fixtures::*;

//! Termfolio Library
//!
//! This module exposes the crate's modules for use by the binary and the
//! integration tests.

pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod content;
pub mod provider;
pub mod refresh;
pub mod transform;
pub mod ui;

//! Input adapters for the Julia renderer.
//!
//! This module contains adapters that receive input from various sources
//! and translate them into render configuration.

pub mod cli;
pub mod text;

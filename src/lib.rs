//! Five-color harmony palette generator.
//!
//! The core is pure: color conversion ([`models`]), contrast evaluation
//! ([`contrast`]), harmony generation ([`generator`]) and export
//! ([`export`]). [`services`] persists the current session and saved
//! favorites, and [`cli`] exposes everything as commands.

pub mod cli;
pub mod config;
pub mod constants;
pub mod contrast;
pub mod export;
pub mod generator;
pub mod models;
pub mod services;

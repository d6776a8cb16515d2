//! Core library components.
//!
//! This module contains the reusable sync logic: comparing environments,
//! copying secrets between them, and managing version history. Nothing here
//! prints or prompts; the CLI layer owns all interaction.

pub mod compare;
pub mod config;
pub mod constants;
pub mod copy;
pub mod domain;
pub mod history;
pub mod registry;
pub mod session;
pub mod store;
pub mod types;

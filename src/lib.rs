//! # Taskdesk - console task tracker
//!
//! A menu-driven command-line utility for tracking tasks in a local
//! SQLite database.
//!
//! ## Features
//!
//! - **Task management**: add, list, update, and delete task records
//! - **Status tracking**: Not started / In progress / Completed lifecycle
//! - **Universal cancel**: type `exit` at any prompt to abort the current operation
//! - **Single-file storage**: embedded SQLite database, created on first run
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdesk::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;

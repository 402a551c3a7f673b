//! # Crumb Architecture
//!
//! Crumb is a **UI-agnostic inventory library**. This is not a CLI application
//! that happens to have some library code; it's a library that happens to have
//! an interactive CLI client.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Runs the menu loop, reads prompts, formats output        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the session's Inventory                             │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic: add, list, sell                          │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core Model (model.rs, inventory.rs)                        │
//! │  - Product records and the ordered Inventory collection     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, model), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! Domain rejections (product not found, insufficient stock) are carried
//! inside `CmdResult` as messages, not as `Err` values. Only real failures
//! (I/O, malformed config) travel as errors.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): thorough unit tests of business logic
//!    against in-memory inventories. This is where the lion's share of
//!    testing lives.
//! 2. **Validation** (`validate.rs`): pure parsers, tested without
//!    simulating input streams.
//! 3. **CLI** (`cli/` + thin `main.rs`): scripted full sessions through the
//!    compiled binary, piping stdin and asserting the visible transcript.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`model`]: The Product record
//! - [`inventory`]: The ordered product collection
//! - [`validate`]: Pure boundary validation of operator input
//! - [`config`]: Display configuration
//! - [`error`]: Error types
//! - `cli`: Menu loop, argument parsing, and printing for the binary (not
//!   part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod inventory;
pub mod model;
pub mod validate;

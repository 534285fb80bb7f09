//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `manifest.rs` — manifest/policy loading, short names, address and model indexes.
//! - `authorization.rs` — policy/embedded grant compilation and token rendering.
//! - `command.rs` — `sozo auth grant writer` assembly, redaction, digest.
//! - `profile.rs` — deploy target file layout + credential resolution.
//! - `runner.rs` — executes the assembled command.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod authorization;
pub mod command;
pub mod manifest;
pub mod output;
pub mod profile;
pub mod runner;

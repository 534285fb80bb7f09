//! Shared data model layer (types/constants only).
//!
//! ## Purpose
//! - Keep manifest, policy and report structs in one place.
//! - Make the JSON output schema explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — manifest/policy records, grants, report/output structs.
//! - `errors.rs` — the `GrantError` taxonomy and its machine codes.
//! - `constants.rs` — file layout, env variable names, the grant command template.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/process side effects.
//!
//! ## Compatibility note
//! Changes in these structs can affect `--json` outputs.
//! Keep schema-impacting changes synchronized with `docs/contracts/*`.

pub mod constants;
pub mod errors;
pub mod models;

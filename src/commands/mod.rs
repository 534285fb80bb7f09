//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `authorize.rs` — compile/grant.
//! - `inspect.rs` — manifest inspection and authorization decoding.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Resolve files and credentials here, once, and pass them down.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod authorize;
pub mod inspect;

pub use authorize::handle_authorize_commands;
pub use inspect::handle_inspect_commands;

use crate::cli::Cli;
use crate::services::profile::DeployTarget;

pub fn deploy_target(cli: &Cli) -> DeployTarget {
    DeployTarget {
        project_dir: cli.project_dir.clone(),
        profile: cli.profile.clone(),
        env_file: cli.env_file.clone(),
    }
}

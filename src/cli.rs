use crate::domain::constants::{DEFAULT_PROFILE, DEFAULT_PROGRAM};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "dojo-grant",
    version,
    about = "Grant Dojo model writer permissions from a deployment manifest"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = ".",
        help = "Dojo project root holding manifests/, authorisations.json and env files"
    )]
    pub project_dir: PathBuf,
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_PROFILE,
        help = "Deployment profile (selects manifest, env file and default source)"
    )]
    pub profile: String,
    #[arg(long, global = true, help = "Env file to read credentials from")]
    pub env_file: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        default_value = "info",
        help = "Log filter (tracing EnvFilter syntax), written to stderr"
    )]
    pub log: String,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the grant command without running it.
    Compile {
        #[command(flatten)]
        inputs: GrantInputs,
        #[arg(long, default_value_t = false, help = "Print the private key unredacted")]
        reveal_key: bool,
    },
    /// Build the grant command and run it.
    Grant {
        #[command(flatten)]
        inputs: GrantInputs,
    },
    /// Show the world address, contract address index and model index.
    Inspect {
        #[arg(long)]
        manifest: Option<PathBuf>,
    },
    /// Split an authorization string back into (model, grantee) pairs.
    Decode {
        #[arg(required = true, num_args = 1..)]
        authorizations: Vec<String>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct GrantInputs {
    #[arg(
        long,
        value_enum,
        help = "Where permissions come from [default: policy for dev, embedded otherwise]"
    )]
    pub source: Option<SourceKind>,
    #[arg(long)]
    pub manifest: Option<PathBuf>,
    #[arg(long)]
    pub policy: Option<PathBuf>,
    #[arg(long, default_value = DEFAULT_PROGRAM)]
    pub program: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Contract → models mapping from the policy file.
    Policy,
    /// `writes` lists carried by the manifest contracts.
    Embedded,
}

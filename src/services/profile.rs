use crate::cli::SourceKind;
use crate::domain::constants::{
    ACCOUNT_ADDRESS_VAR, DEFAULT_PROFILE, MANIFESTS_DIR, MANIFEST_FILE, POLICY_FILE,
    PRIVATE_KEY_VAR, RPC_URL_VAR, REDACTED,
};
use crate::services::manifest::read_file;
use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Project root plus the profile that picks which files to read.
#[derive(Debug, Clone)]
pub struct DeployTarget {
    pub project_dir: PathBuf,
    pub profile: String,
    pub env_file: Option<PathBuf>,
}

impl DeployTarget {
    pub fn manifest_path(&self) -> PathBuf {
        self.project_dir
            .join(MANIFESTS_DIR)
            .join(&self.profile)
            .join(MANIFEST_FILE)
    }

    pub fn policy_path(&self) -> PathBuf {
        self.project_dir.join(POLICY_FILE)
    }

    pub fn env_file_path(&self) -> PathBuf {
        if let Some(p) = &self.env_file {
            return p.clone();
        }
        if self.profile == DEFAULT_PROFILE {
            self.project_dir.join(".env")
        } else {
            self.project_dir.join(format!(".env.{}", self.profile))
        }
    }

    pub fn dojo_profile_path(&self) -> PathBuf {
        self.project_dir.join(format!("dojo_{}.toml", self.profile))
    }

    /// Development deployments keep permissions in the policy file; every
    /// other profile ships them inside the manifest.
    pub fn default_source(&self) -> SourceKind {
        if self.profile == DEFAULT_PROFILE {
            SourceKind::Policy
        } else {
            SourceKind::Embedded
        }
    }
}

#[derive(Debug, Deserialize, Default)]
struct DojoProfile {
    #[serde(default)]
    env: DojoEnv,
}

#[derive(Debug, Deserialize, Default)]
struct DojoEnv {
    rpc_url: Option<String>,
    account_address: Option<String>,
    private_key: Option<String>,
}

#[derive(Clone, Default)]
pub struct Credentials {
    pub rpc_url: Option<String>,
    pub account_address: Option<String>,
    pub private_key: Option<String>,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("rpc_url", &self.rpc_url)
            .field("account_address", &self.account_address)
            .field("private_key", &self.private_key.as_ref().map(|_| REDACTED))
            .finish()
    }
}

impl Credentials {
    /// Each variable comes from `lookup` (the process environment in
    /// production) first, then the env file, then the dojo profile `[env]`
    /// table. Empty values count as unset. A derived env file or dojo profile
    /// that does not exist is skipped; an `--env-file` path must exist.
    pub fn resolve(
        target: &DeployTarget,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<Self> {
        let env_file = read_env_file(&target.env_file_path(), target.env_file.is_some())?;
        let dojo = read_dojo_profile(&target.dojo_profile_path())?;

        let set = |v: Option<String>| v.filter(|v| !v.is_empty());
        let pick = |var: &str, from_toml: &Option<String>| {
            set(lookup(var))
                .or_else(|| set(env_file.get(var).cloned()))
                .or_else(|| set(from_toml.clone()))
        };

        let creds = Self {
            rpc_url: pick(RPC_URL_VAR, &dojo.env.rpc_url),
            account_address: pick(ACCOUNT_ADDRESS_VAR, &dojo.env.account_address),
            private_key: pick(PRIVATE_KEY_VAR, &dojo.env.private_key),
        };
        tracing::info!(
            rpc_url = creds.rpc_url.as_deref().unwrap_or("-"),
            account = creds.account_address.as_deref().unwrap_or("-"),
            private_key = creds.private_key.is_some(),
            "resolved credentials"
        );
        Ok(creds)
    }

    /// Variables exported to the grant process.
    pub fn child_env(&self) -> Vec<(&'static str, String)> {
        [
            (RPC_URL_VAR, &self.rpc_url),
            (ACCOUNT_ADDRESS_VAR, &self.account_address),
            (PRIVATE_KEY_VAR, &self.private_key),
        ]
        .into_iter()
        .filter_map(|(k, v)| v.clone().map(|v| (k, v)))
        .collect()
    }
}

fn read_env_file(path: &Path, required: bool) -> anyhow::Result<HashMap<String, String>> {
    if !required && !path.exists() {
        tracing::debug!(path = %path.display(), "no env file");
        return Ok(HashMap::new());
    }
    let raw = read_file(path)?;
    let mut vars = HashMap::new();
    for item in dotenvy::from_read_iter(raw.as_bytes()) {
        let (k, v) = item.with_context(|| format!("malformed env file {}", path.display()))?;
        vars.insert(k, v);
    }
    tracing::info!(path = %path.display(), "loaded env file");
    Ok(vars)
}

fn read_dojo_profile(path: &Path) -> anyhow::Result<DojoProfile> {
    if !path.exists() {
        return Ok(DojoProfile::default());
    }
    let raw = read_file(path)?;
    toml::from_str(&raw).with_context(|| format!("malformed dojo profile {}", path.display()))
}

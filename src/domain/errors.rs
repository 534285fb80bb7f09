use std::path::PathBuf;

/// Every failure of the manifest/policy pipeline. All of them abort the run.
#[derive(thiserror::Error, Debug)]
pub enum GrantError {
    #[error("malformed manifest {}", .path.display())]
    MalformedManifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("malformed policy {}", .path.display())]
    MalformedPolicy {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("no struct entry in abi of model {0}")]
    NoStructFound(String),
    #[error("policy references unknown contract: {0}")]
    UnknownContract(String),
    #[error("malformed write entry {entry:?} on contract {contract}")]
    MalformedWriteEntry { contract: String, entry: String },
    #[error("malformed authorization token: {0:?}")]
    MalformedToken(String),
    #[error("missing credential: {0}")]
    MissingCredential(&'static str),
    #[error("cannot read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GrantError {
    pub fn code(&self) -> &'static str {
        match self {
            GrantError::MalformedManifest { .. } => "MALFORMED_MANIFEST",
            GrantError::MalformedPolicy { .. } => "MALFORMED_POLICY",
            GrantError::NoStructFound(_) => "NO_STRUCT_FOUND",
            GrantError::UnknownContract(_) => "UNKNOWN_CONTRACT",
            GrantError::MalformedWriteEntry { .. } => "MALFORMED_WRITE_ENTRY",
            GrantError::MalformedToken(_) => "MALFORMED_TOKEN",
            GrantError::MissingCredential(_) => "MISSING_CREDENTIAL",
            GrantError::Io { .. } => "IO",
        }
    }
}

use crate::cli::SourceKind;
use crate::domain::constants::{MODEL_TOKEN_PREFIX, WRITE_ENTRY_DELIMITER};
use crate::domain::errors::GrantError;
use crate::domain::models::{ContractRecord, Grant, Manifest, PolicyDocument};
use crate::services::manifest::contract_address_index;
use indexmap::IndexMap;

/// Where the writer permissions come from.
#[derive(Debug, Clone)]
pub enum AuthorizationSource {
    /// Contract → models mapping read from the policy file.
    PolicyFile(PolicyDocument),
    /// `writes` lists carried by the manifest contracts.
    EmbeddedWrites,
}

impl AuthorizationSource {
    pub fn kind(&self) -> SourceKind {
        match self {
            AuthorizationSource::PolicyFile(_) => SourceKind::Policy,
            AuthorizationSource::EmbeddedWrites => SourceKind::Embedded,
        }
    }
}

/// How a grant is spelled on the `sozo` command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenStyle {
    /// `<model>,<address>`
    Bare,
    /// `model:<model>,<address>`
    ModelPrefixed,
}

#[derive(Debug, Clone)]
pub struct CompiledAuthorizations {
    pub style: TokenStyle,
    pub grants: Vec<Grant>,
}

impl CompiledAuthorizations {
    pub fn tokens(&self) -> Vec<String> {
        self.grants
            .iter()
            .map(|g| match self.style {
                TokenStyle::Bare => format!("{},{}", g.model, g.grantee),
                TokenStyle::ModelPrefixed => {
                    format!("{}{},{}", MODEL_TOKEN_PREFIX, g.model, g.grantee)
                }
            })
            .collect()
    }

    pub fn render(&self) -> String {
        self.tokens().join(" ")
    }

    pub fn is_empty(&self) -> bool {
        self.grants.is_empty()
    }
}

pub fn compile(
    source: &AuthorizationSource,
    manifest: &Manifest,
) -> Result<CompiledAuthorizations, GrantError> {
    let compiled = match source {
        AuthorizationSource::PolicyFile(policy) => CompiledAuthorizations {
            style: TokenStyle::Bare,
            grants: policy_grants(&policy.writer, &contract_address_index(manifest))?,
        },
        AuthorizationSource::EmbeddedWrites => CompiledAuthorizations {
            style: TokenStyle::ModelPrefixed,
            grants: embedded_grants(&manifest.contracts)?,
        },
    };
    tracing::info!(
        source = ?source.kind(),
        grants = compiled.grants.len(),
        "compiled authorizations"
    );
    Ok(compiled)
}

/// Each contract in the policy is granted write access to each of its
/// models; the grantee is the contract's own address.
pub fn policy_grants(
    writer: &IndexMap<String, Vec<String>>,
    index: &IndexMap<String, String>,
) -> Result<Vec<Grant>, GrantError> {
    let mut grants = Vec::new();
    for (contract, models) in writer {
        let address = index
            .get(contract)
            .ok_or_else(|| GrantError::UnknownContract(contract.clone()))?;
        grants.extend(models.iter().map(|m| Grant {
            model: m.clone(),
            grantee: address.clone(),
        }));
    }
    Ok(grants)
}

pub fn embedded_grants(contracts: &[ContractRecord]) -> Result<Vec<Grant>, GrantError> {
    let mut grants = Vec::new();
    for c in contracts {
        for entry in &c.writes {
            let model = entry
                .split(WRITE_ENTRY_DELIMITER)
                .nth(1)
                .filter(|m| !m.is_empty())
                .ok_or_else(|| GrantError::MalformedWriteEntry {
                    contract: c.name.clone(),
                    entry: entry.clone(),
                })?;
            grants.push(Grant {
                model: model.to_string(),
                grantee: c.address.clone(),
            });
        }
    }
    Ok(grants)
}

/// Inverse of [`CompiledAuthorizations::render`] for either token style.
pub fn parse_authorizations(text: &str) -> Result<Vec<Grant>, GrantError> {
    text.split_whitespace()
        .map(|token| {
            let bare = token.strip_prefix(MODEL_TOKEN_PREFIX).unwrap_or(token);
            bare.split_once(',')
                .map(|(model, grantee)| Grant {
                    model: model.to_string(),
                    grantee: grantee.to_string(),
                })
                .ok_or_else(|| GrantError::MalformedToken(token.to_string()))
        })
        .collect()
}

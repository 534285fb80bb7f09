use crate::domain::constants::{NAMESPACE_SEPARATOR, STRUCT_ABI_TYPE};
use crate::domain::errors::GrantError;
use crate::domain::models::{Manifest, ModelRecord, PolicyDocument};
use indexmap::IndexMap;
use std::path::Path;

pub(crate) fn read_file(path: &Path) -> Result<String, GrantError> {
    std::fs::read_to_string(path).map_err(|source| GrantError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_manifest(path: &Path) -> Result<Manifest, GrantError> {
    let raw = read_file(path)?;
    let manifest: Manifest =
        serde_json::from_str(&raw).map_err(|source| GrantError::MalformedManifest {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::info!(
        path = %path.display(),
        contracts = manifest.contracts.len(),
        models = manifest.models.len(),
        "loaded manifest"
    );
    Ok(manifest)
}

pub fn load_policy(path: &Path) -> Result<PolicyDocument, GrantError> {
    let raw = read_file(path)?;
    let policy: PolicyDocument =
        serde_json::from_str(&raw).map_err(|source| GrantError::MalformedPolicy {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::info!(
        path = %path.display(),
        contracts = policy.writer.len(),
        "loaded policy"
    );
    Ok(policy)
}

/// Substring after the last `::`, or the whole name when there is none.
pub fn short_name(name: &str) -> &str {
    name.rsplit_once(NAMESPACE_SEPARATOR)
        .map(|(_, tail)| tail)
        .unwrap_or(name)
}

pub fn world_address(manifest: &Manifest) -> &str {
    &manifest.world.address
}

/// Contract short name → address. A later contract with the same short
/// name replaces the earlier address.
pub fn contract_address_index(manifest: &Manifest) -> IndexMap<String, String> {
    let mut index = IndexMap::with_capacity(manifest.contracts.len());
    for c in &manifest.contracts {
        let name = short_name(&c.name).to_string();
        if let Some(previous) = index.insert(name, c.address.clone()) {
            tracing::warn!(
                contract = %c.name,
                replaced = %previous,
                "duplicate contract short name, keeping the later address"
            );
        }
    }
    index
}

/// The model's own struct is the last `struct` entry of its ABI; supporting
/// types are listed before it.
pub fn model_short_name(model: &ModelRecord) -> Result<&str, GrantError> {
    model
        .abi
        .iter()
        .rev()
        .find(|entry| entry.kind == STRUCT_ABI_TYPE)
        .map(|entry| short_name(&entry.name))
        .ok_or_else(|| GrantError::NoStructFound(model.name.clone()))
}

/// Model short name → qualified manifest name.
pub fn model_index(manifest: &Manifest) -> Result<IndexMap<String, String>, GrantError> {
    let mut index = IndexMap::with_capacity(manifest.models.len());
    for m in &manifest.models {
        index.insert(model_short_name(m)?.to_string(), m.name.clone());
    }
    Ok(index)
}

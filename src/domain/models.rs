use crate::cli::SourceKind;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct JsonErr {
    pub ok: bool,
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Manifest {
    pub world: WorldRecord,
    pub contracts: Vec<ContractRecord>,
    #[serde(default)]
    pub models: Vec<ModelRecord>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WorldRecord {
    pub address: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ContractRecord {
    pub name: String,
    pub address: String,
    /// `"<discriminant>-<model>"` entries; only present in release manifests.
    #[serde(default)]
    pub writes: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ModelRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub abi: Vec<AbiEntry>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AbiEntry {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub name: String,
}

/// Policy file. Keys other than `writer` are ignored.
#[derive(Debug, Deserialize, Clone)]
pub struct PolicyDocument {
    pub writer: IndexMap<String, Vec<String>>,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Grant {
    pub model: String,
    pub grantee: String,
}

#[derive(Serialize, Clone)]
pub struct CompileReport {
    pub profile: String,
    pub source: SourceKind,
    pub world_address: String,
    pub grants: Vec<Grant>,
    pub authorizations: String,
    pub command: String,
    pub digest: String,
}

#[derive(Serialize)]
pub struct GrantReport {
    #[serde(flatten)]
    pub compiled: CompileReport,
    pub executed: bool,
    pub exit_code: Option<i32>,
}

#[derive(Serialize)]
pub struct ContractEntry {
    pub name: String,
    pub address: String,
}

#[derive(Serialize)]
pub struct ModelEntry {
    pub name: String,
    pub qualified_name: String,
}

#[derive(Serialize)]
pub struct InspectReport {
    pub world_address: String,
    pub contracts: Vec<ContractEntry>,
    pub models: Vec<ModelEntry>,
}

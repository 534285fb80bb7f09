pub const DEFAULT_PROFILE: &str = "dev";
pub const DEFAULT_PROGRAM: &str = "sozo";

/// Subcommand words preceding `--world` in every grant invocation.
pub const GRANT_SUBCOMMAND: [&str; 3] = ["auth", "grant", "writer"];

pub const NAMESPACE_SEPARATOR: &str = "::";
pub const WRITE_ENTRY_DELIMITER: char = '-';
pub const MODEL_TOKEN_PREFIX: &str = "model:";
pub const STRUCT_ABI_TYPE: &str = "struct";
pub const REDACTED: &str = "<redacted>";

pub const POLICY_FILE: &str = "authorisations.json";
pub const MANIFESTS_DIR: &str = "manifests";
pub const MANIFEST_FILE: &str = "manifest.json";

pub const RPC_URL_VAR: &str = "STARKNET_RPC_URL";
pub const ACCOUNT_ADDRESS_VAR: &str = "DOJO_ACCOUNT_ADDRESS";
pub const PRIVATE_KEY_VAR: &str = "DOJO_PRIVATE_KEY";

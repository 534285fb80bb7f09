use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const WORLD: &str = "0xW0RLD";
pub const DEV_POLICY_AUTHS: &str = "Position,0x111 Health,0x111 Lobby,0x222";
pub const RELEASE_AUTHS: &str = "model:Position,0x333 model:Health,0x333 model:Lobby,0x444";

pub struct TestEnv {
    _tmp: TempDir,
    pub project: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let project = tmp.path().join("contracts");
        make_fixture_project(&project);
        Self { _tmp: tmp, project }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("dojo-grant");
        cmd.env_remove("STARKNET_RPC_URL")
            .env_remove("DOJO_ACCOUNT_ADDRESS")
            .env_remove("DOJO_PRIVATE_KEY")
            .env_remove("RUST_LOG")
            .arg("--project-dir")
            .arg(&self.project);
        cmd
    }

    pub fn write(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.project.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create fixture dir");
        }
        fs::write(&path, contents).expect("write fixture file");
        path
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn run_json_failure(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .failure()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("error json output")
    }
}

fn write_json(path: &Path, value: &Value) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create fixture dir");
    }
    fs::write(
        path,
        serde_json::to_string_pretty(value).expect("serialize fixture"),
    )
    .expect("write fixture");
}

fn models() -> Value {
    serde_json::json!([
        {
            "name": "blob_arena::models::position",
            "abi": [
                {"type": "impl", "name": "blob_arena::models::PositionImpl"},
                {"type": "struct", "name": "blob_arena::core::Vec2"},
                {"type": "struct", "name": "blob_arena::models::Position"},
                {"type": "event", "name": "blob_arena::models::position::Event"}
            ]
        },
        {
            "name": "blob_arena::models::health",
            "abi": [
                {"type": "enum", "name": "blob_arena::core::Status"},
                {"type": "struct", "name": "blob_arena::models::Health"}
            ]
        }
    ])
}

fn make_fixture_project(project: &Path) {
    write_json(
        &project.join("manifests/dev/manifest.json"),
        &serde_json::json!({
            "world": {"address": WORLD, "class_hash": "0xC1A55"},
            "contracts": [
                {"name": "blob_arena::systems::game::game_actions", "address": "0x111"},
                {"name": "blob_arena::systems::lobby::lobby_actions", "address": "0x222"}
            ],
            "models": models()
        }),
    );
    write_json(
        &project.join("authorisations.json"),
        &serde_json::json!({
            "writer": {
                "game_actions": ["Position", "Health"],
                "lobby_actions": ["Lobby"]
            },
            "owner": {"game_actions": ["Position"]}
        }),
    );

    write_json(
        &project.join("manifests/release/manifest.json"),
        &serde_json::json!({
            "world": {"address": WORLD},
            "contracts": [
                {
                    "name": "blob_arena::systems::game::game_actions",
                    "address": "0x333",
                    "writes": ["blob_arena-Position", "blob_arena-Health"]
                },
                {
                    "name": "blob_arena::systems::lobby::lobby_actions",
                    "address": "0x444",
                    "writes": ["blob_arena-Lobby"]
                }
            ],
            "models": models()
        }),
    );
    fs::write(
        project.join(".env.release"),
        "STARKNET_RPC_URL=http://localhost:5050\nDOJO_ACCOUNT_ADDRESS=0xACC\nDOJO_PRIVATE_KEY=0xKEY\n",
    )
    .expect("write release env");
}

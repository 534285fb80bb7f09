mod common;

use common::{TestEnv, DEV_POLICY_AUTHS};
use predicates::prelude::*;
use predicates::str::{contains, diff};

#[test]
fn compile_prints_policy_command() {
    let env = TestEnv::new();
    env.cmd()
        .arg("compile")
        .assert()
        .success()
        .stdout(diff(format!(
            "sozo auth grant writer --world 0xW0RLD {}\n",
            DEV_POLICY_AUTHS
        )));
}

#[test]
fn compile_release_redacts_key_unless_revealed() {
    let env = TestEnv::new();
    env.cmd()
        .args(["--profile", "release", "compile"])
        .assert()
        .success()
        .stdout(contains("--private-key <redacted>"))
        .stdout(contains("0xKEY").not());

    env.cmd()
        .args(["--profile", "release", "compile", "--reveal-key"])
        .assert()
        .success()
        .stdout(contains("--profile release --private-key 0xKEY model:Position,0x333"));
}

#[test]
fn inspect_lists_contracts_and_models() {
    let env = TestEnv::new();
    env.cmd()
        .arg("inspect")
        .assert()
        .success()
        .stdout(contains("world: 0xW0RLD"))
        .stdout(contains("contract\tgame_actions\t0x111"))
        .stdout(contains("model\tPosition\tblob_arena::models::position"));
}

#[test]
fn decode_splits_tokens() {
    let env = TestEnv::new();
    env.cmd()
        .args(["decode", "model:Position,0x333", "Health,0x111"])
        .assert()
        .success()
        .stdout("Position\t0x333\nHealth\t0x111\n");
}

#[test]
fn errors_go_to_stderr_without_json() {
    let env = TestEnv::new();
    env.cmd()
        .args(["compile", "--manifest", "does/not/exist.json"])
        .assert()
        .failure()
        .stderr(contains("error: cannot read"));
}

use crate::*;

struct Prepared {
    target: DeployTarget,
    compiled: CompiledAuthorizations,
    command: GrantCommand,
    credentials: Credentials,
    report: CompileReport,
}

fn prepare(cli: &Cli, inputs: &GrantInputs, reveal_key: bool) -> anyhow::Result<Prepared> {
    let target = deploy_target(cli);
    let manifest_path = inputs
        .manifest
        .clone()
        .unwrap_or_else(|| target.manifest_path());
    let manifest = load_manifest(&manifest_path)?;

    let source = match inputs.source.unwrap_or_else(|| target.default_source()) {
        SourceKind::Policy => {
            let policy_path = inputs.policy.clone().unwrap_or_else(|| target.policy_path());
            AuthorizationSource::PolicyFile(load_policy(&policy_path)?)
        }
        SourceKind::Embedded => AuthorizationSource::EmbeddedWrites,
    };
    let compiled = compile(&source, &manifest)?;

    let credentials = Credentials::resolve(&target, |var| std::env::var(var).ok())?;
    let command = GrantCommand::assemble(
        &inputs.program,
        world_address(&manifest),
        &compiled,
        &target.profile,
        &credentials,
    )?;

    let report = CompileReport {
        profile: target.profile.clone(),
        source: source.kind(),
        world_address: world_address(&manifest).to_string(),
        grants: compiled.grants.clone(),
        authorizations: compiled.render(),
        command: if reveal_key {
            command.command_line()
        } else {
            command.redacted()
        },
        digest: command.digest(),
    };

    Ok(Prepared {
        target,
        compiled,
        command,
        credentials,
        report,
    })
}

pub fn handle_authorize_commands(cli: &Cli) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Compile { inputs, reveal_key } => {
            let prepared = prepare(cli, inputs, *reveal_key)?;
            print_one(cli.json, prepared.report, |r| r.command.clone())?;
        }
        Commands::Grant { inputs } => {
            let prepared = prepare(cli, inputs, false)?;
            let (executed, exit_code) = if prepared.compiled.is_empty() {
                tracing::warn!(
                    profile = %prepared.target.profile,
                    "no authorizations to grant, not running the grant command"
                );
                (false, None)
            } else {
                let code = run_grant(
                    &prepared.command,
                    &prepared.target.project_dir,
                    &prepared.credentials.child_env(),
                    cli.json,
                )?;
                (true, code)
            };
            let report = GrantReport {
                compiled: prepared.report,
                executed,
                exit_code,
            };
            print_one(cli.json, report, |r| {
                if r.executed {
                    format!(
                        "granted {} authorizations (exit code {})",
                        r.compiled.grants.len(),
                        r.exit_code
                            .map(|c| c.to_string())
                            .unwrap_or_else(|| "none".to_string())
                    )
                } else {
                    "nothing to grant".to_string()
                }
            })?;
        }
        _ => return Ok(false),
    }

    Ok(true)
}

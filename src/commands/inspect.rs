use crate::*;

pub fn handle_inspect_commands(cli: &Cli) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Inspect { manifest } => {
            let target = deploy_target(cli);
            let path = manifest.clone().unwrap_or_else(|| target.manifest_path());
            let m = load_manifest(&path)?;

            let report = InspectReport {
                world_address: world_address(&m).to_string(),
                contracts: contract_address_index(&m)
                    .into_iter()
                    .map(|(name, address)| ContractEntry { name, address })
                    .collect(),
                models: model_index(&m)?
                    .into_iter()
                    .map(|(name, qualified_name)| ModelEntry {
                        name,
                        qualified_name,
                    })
                    .collect(),
            };

            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: report
                    })?
                );
            } else {
                println!("world: {}", report.world_address);
                for c in &report.contracts {
                    println!("contract\t{}\t{}", c.name, c.address);
                }
                for md in &report.models {
                    println!("model\t{}\t{}", md.name, md.qualified_name);
                }
            }
        }
        Commands::Decode { authorizations } => {
            let grants = parse_authorizations(&authorizations.join(" "))?;
            print_out(cli.json, &grants, |g| format!("{}\t{}", g.model, g.grantee))?;
        }
        _ => return Ok(false),
    }

    Ok(true)
}

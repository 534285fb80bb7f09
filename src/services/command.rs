use crate::domain::constants::{GRANT_SUBCOMMAND, PRIVATE_KEY_VAR, REDACTED};
use crate::domain::errors::GrantError;
use crate::services::authorization::{CompiledAuthorizations, TokenStyle};
use crate::services::profile::Credentials;
use sha2::{Digest, Sha256};

/// `sozo auth grant writer ...` as an argument vector. The private key, when
/// present, is kept out of `redacted()`.
#[derive(Clone)]
pub struct GrantCommand {
    pub program: String,
    pub args: Vec<String>,
    secret_arg: Option<usize>,
}

impl GrantCommand {
    /// Policy grants only name the world. Embedded grants are issued with the
    /// release profile and the deployer key.
    pub fn assemble(
        program: &str,
        world_address: &str,
        compiled: &CompiledAuthorizations,
        profile: &str,
        credentials: &Credentials,
    ) -> Result<Self, GrantError> {
        let mut args: Vec<String> = GRANT_SUBCOMMAND.iter().map(|s| s.to_string()).collect();
        args.push("--world".to_string());
        args.push(world_address.to_string());

        let mut secret_arg = None;
        if compiled.style == TokenStyle::ModelPrefixed {
            let key = credentials
                .private_key
                .as_deref()
                .ok_or(GrantError::MissingCredential(PRIVATE_KEY_VAR))?;
            args.push("--profile".to_string());
            args.push(profile.to_string());
            args.push("--private-key".to_string());
            secret_arg = Some(args.len());
            args.push(key.to_string());
        }

        args.extend(compiled.tokens());
        Ok(Self {
            program: program.to_string(),
            args,
            secret_arg,
        })
    }

    pub fn command_line(&self) -> String {
        self.render(|_, a| a)
    }

    pub fn redacted(&self) -> String {
        self.render(|i, a| if Some(i) == self.secret_arg { REDACTED } else { a })
    }

    /// Hex SHA-256 of the redacted command line.
    pub fn digest(&self) -> String {
        hex::encode(Sha256::digest(self.redacted().as_bytes()))
    }

    fn render<'a>(&'a self, show: impl Fn(usize, &'a str) -> &'a str) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().enumerate().map(|(i, a)| show(i, a.as_str())))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl std::fmt::Debug for GrantCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("GrantCommand").field(&self.redacted()).finish()
    }
}

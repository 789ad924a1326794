use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use multicall_common::{ContractAddress, Fee, TransactionNonce, TransactionVersion};
use multicall_signer::{parse_felt, parse_hex_felt, SigningKey};

#[derive(Parser)]
#[command(name = "multicall")]
#[command(author = "Equilibrium Labs")]
#[command(version)]
#[command(about = "Signs batches of calls for execution by a Starknet account contract.")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sign a batch of calls and print the signed request as JSON.
    Sign(SignCli),
    /// Print the public key belonging to a private key.
    PublicKey(KeyCli),
}

#[derive(clap::Args)]
struct KeyCli {
    #[arg(
        long = "private-key",
        value_name = "HEX",
        long_help = "The account's STARK private key as a 0x-prefixed hex value",
        env = "MULTICALL_PRIVATE_KEY",
        hide_env_values = true
    )]
    private_key: String,
}

#[derive(clap::Args)]
struct SignCli {
    #[clap(flatten)]
    key: KeyCli,

    #[arg(
        long = "account",
        value_name = "ADDRESS",
        long_help = "Address of the account contract that will execute the calls",
        env = "MULTICALL_ACCOUNT_ADDRESS"
    )]
    account: String,

    #[arg(
        long = "calls",
        value_name = "FILE",
        value_hint = clap::ValueHint::FilePath,
        long_help = r#"JSON file containing the calls to sign, in order.

Example:
    [{"to": "0xaa", "method": "transfer", "calldata": ["0x1", "100"]}]"#,
        env = "MULTICALL_CALLS_FILE"
    )]
    calls: PathBuf,

    #[arg(
        long = "nonce",
        long_help = "The account nonce the request is valid for, hex or decimal",
        env = "MULTICALL_NONCE"
    )]
    nonce: String,

    #[arg(
        long = "max-fee",
        long_help = "The maximum fee the account pays for the request, hex or decimal",
        default_value = "0",
        env = "MULTICALL_MAX_FEE"
    )]
    max_fee: String,

    #[arg(
        long = "transaction-version",
        long_help = "The transaction version bound into the signed hash",
        default_value = "0",
        env = "MULTICALL_TRANSACTION_VERSION"
    )]
    version: String,
}

#[derive(Debug)]
pub enum Configuration {
    Sign(SignConfig),
    PublicKey(SigningKey),
}

#[derive(Debug)]
pub struct SignConfig {
    pub key: SigningKey,
    pub account: ContractAddress,
    pub calls: PathBuf,
    pub nonce: TransactionNonce,
    pub max_fee: Fee,
    pub version: TransactionVersion,
}

impl Configuration {
    pub fn parse_cmd_line() -> anyhow::Result<Self> {
        Self::from_cli(Cli::parse())
    }

    fn from_cli(cli: Cli) -> anyhow::Result<Self> {
        match cli.command {
            Command::PublicKey(key) => Ok(Self::PublicKey(key.into_signing_key()?)),
            Command::Sign(sign) => {
                let key = sign.key.into_signing_key()?;
                let account = parse_hex_felt("--account", &sign.account)?;
                Ok(Self::Sign(SignConfig {
                    key,
                    account: ContractAddress(account),
                    calls: sign.calls,
                    nonce: TransactionNonce(parse_felt("--nonce", &sign.nonce)?),
                    max_fee: Fee(parse_felt("--max-fee", &sign.max_fee)?),
                    version: TransactionVersion(parse_felt(
                        "--transaction-version",
                        &sign.version,
                    )?),
                }))
            }
        }
    }
}

impl KeyCli {
    fn into_signing_key(self) -> anyhow::Result<SigningKey> {
        let secret = parse_hex_felt("--private-key", &self.private_key)?;
        SigningKey::from_secret(secret).context("Invalid --private-key")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use multicall_common::macro_prelude::*;
    use pretty_assertions_sorted::assert_eq;

    const KEY: &str = "0x3c1e9550e66958296d11b60f8e8e7a7ad990d07fa65d5f7652c4a6c87d4e3cc";

    fn parse(args: &[&str]) -> anyhow::Result<Configuration> {
        let cli = Cli::try_parse_from(std::iter::once("multicall").chain(args.iter().copied()))?;
        Configuration::from_cli(cli)
    }

    #[test]
    fn public_key() {
        let config = parse(&["public-key", "--private-key", KEY]).unwrap();
        assert_matches!(config, Configuration::PublicKey(key) => {
            assert_eq!(
                key.public_key().0,
                felt!("0x77a3b314db07c45076d11f62b6f9e748a39790441823307743cf00d6597ea43")
            );
        });
    }

    #[test]
    fn sign_defaults() {
        let config = parse(&[
            "sign",
            "--private-key",
            KEY,
            "--account",
            "0x123",
            "--calls",
            "calls.json",
            "--nonce",
            "7",
        ])
        .unwrap();

        assert_matches!(config, Configuration::Sign(sign) => {
            assert_eq!(sign.account, ContractAddress(felt!("0x123")));
            assert_eq!(sign.calls, PathBuf::from("calls.json"));
            assert_eq!(sign.nonce, TransactionNonce::new(7));
            assert_eq!(sign.max_fee, Fee::ZERO);
            assert_eq!(sign.version, TransactionVersion::ZERO);
        });
    }

    #[test]
    fn sign_with_fee_and_version() {
        let config = parse(&[
            "sign",
            "--private-key",
            KEY,
            "--account",
            "0x123",
            "--calls",
            "calls.json",
            "--nonce",
            "0x0",
            "--max-fee",
            "0x2386f26fc10000",
            "--transaction-version",
            "1",
        ])
        .unwrap();

        assert_matches!(config, Configuration::Sign(sign) => {
            assert_eq!(sign.nonce, TransactionNonce::ZERO);
            assert_eq!(sign.max_fee, Fee::new(10_000_000_000_000_000));
            assert_eq!(sign.version, TransactionVersion::ONE);
        });
    }

    #[test]
    fn nonce_is_required() {
        let result = parse(&[
            "sign",
            "--private-key",
            KEY,
            "--account",
            "0x123",
            "--calls",
            "calls.json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_invalid_keys() {
        assert!(parse(&["public-key", "--private-key", "0x0"]).is_err());
        assert!(parse(&["public-key", "--private-key", "zz"]).is_err());
        // The curve order itself is out of range.
        assert!(parse(&[
            "public-key",
            "--private-key",
            "0x800000000000010ffffffffffffffffb781126dcae7b2321e66a241adc64d2f"
        ])
        .is_err());
    }

    #[test]
    fn empty_values_are_rejected() {
        let sign = |nonce: &str, account: &str| {
            parse(&[
                "sign",
                "--private-key",
                KEY,
                "--account",
                account,
                "--calls",
                "calls.json",
                "--nonce",
                nonce,
            ])
        };
        assert_eq!(sign("", "0x123").unwrap_err().to_string(), "Malformed input: --nonce is empty");
        assert_eq!(sign("0x", "0x123").unwrap_err().to_string(), "Malformed input: --nonce is empty");
        assert_eq!(sign("1", "").unwrap_err().to_string(), "Malformed input: --account is empty");
        assert!(parse(&["public-key", "--private-key", ""]).is_err());
    }

    #[test]
    fn rejects_overflowing_nonce() {
        let error = parse(&[
            "sign",
            "--private-key",
            KEY,
            "--account",
            "0x123",
            "--calls",
            "calls.json",
            "--nonce",
            "0x800000000000011000000000000000000000000000000000000000000000001",
        ])
        .unwrap_err();
        assert_eq!(error.to_string(), "--nonce is not below the field modulus");
    }
}

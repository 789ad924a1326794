#![deny(rust_2018_idioms)]

use anyhow::Context;
use multicall_signer::{parse_calls, MulticallRequest, MulticallSigner, RawCall, SignedRequest};
use tracing::info;

mod config;

use config::{Configuration, SignConfig};

fn main() -> anyhow::Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "info");
    }

    setup_tracing();

    let config = Configuration::parse_cmd_line().context("Parsing configuration")?;

    match config {
        Configuration::PublicKey(key) => println!("{}", key.public_key()),
        Configuration::Sign(config) => {
            let request = sign(config)?;
            let json = serde_json::to_string_pretty(&request).context("Serializing request")?;
            println!("{json}");
        }
    }

    Ok(())
}

fn sign(config: SignConfig) -> anyhow::Result<SignedRequest> {
    let calls = std::fs::read_to_string(&config.calls)
        .with_context(|| format!("Reading calls from {}", config.calls.display()))?;
    let calls: Vec<RawCall> = serde_json::from_str(&calls).context("Parsing calls")?;
    let calls = parse_calls(calls).context("Encoding calls")?;

    let request = MulticallRequest::new(config.account, calls, config.nonce, config.max_fee)
        .with_version(config.version);
    let signer = MulticallSigner::new(config.key);
    let signed = signer.sign_request(request).context("Signing request")?;

    info!(
        account=%signed.sender,
        nonce=%signed.nonce,
        message_hash=%signed.message_hash,
        "Signed multicall"
    );

    Ok(signed)
}

// Logs go to stderr so that stdout only carries the command's output.
fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

//! # Tezos Bridge CLI
use crate::{
    bridge::TezosBridge,
    config::BridgeConfig,
    constants::MAX_PREPARE_ROUNDS,
    types::{Account, Transaction},
};
use clap::{Parser, Subcommand};
use eyre::WrapErr;
use serde::{Serialize, de::DeserializeOwned};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Prepares Tezos transactions and evaluates their status against an offline engine.
#[derive(Debug, Parser)]
#[command(author, version = crate::version::SHORT_VERSION, about = "Tezos Bridge")]
pub struct Args {
    /// The configuration file.
    ///
    /// If missing, a default one will be used and stored under the given path.
    #[arg(long, value_name = "CONFIG", env = "BRIDGE_CONFIG", default_value = "bridge.yaml")]
    pub config: PathBuf,
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Commands offered by the CLI.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Prepare a draft until it is stable and print it.
    Prepare(DraftArgs),
    /// Prepare a draft and print its status.
    Status(DraftArgs),
    /// Print the largest amount the account can send.
    MaxSpendable {
        /// JSON file holding the account snapshot.
        #[arg(long, value_name = "FILE")]
        account: PathBuf,
        /// JSON file holding a draft to estimate with.
        #[arg(long, value_name = "FILE")]
        transaction: Option<PathBuf>,
    },
}

/// An account and a draft to work on.
#[derive(Debug, clap::Args)]
pub struct DraftArgs {
    /// JSON file holding the account snapshot.
    #[arg(long, value_name = "FILE")]
    pub account: PathBuf,
    /// JSON file holding the draft transaction.
    #[arg(long, value_name = "FILE")]
    pub transaction: PathBuf,
}

impl DraftArgs {
    fn load(&self) -> eyre::Result<(Account, Transaction)> {
        Ok((read_json(&self.account)?, read_json(&self.transaction)?))
    }
}

impl Args {
    /// Run the requested command.
    pub async fn run(self) -> eyre::Result<()> {
        let config = BridgeConfig::load_or_create(&self.config)?;
        debug!(?config, "Loaded configuration");
        let bridge = TezosBridge::offline(&config);

        match self.command {
            Command::Prepare(args) => {
                let (account, transaction) = args.load()?;
                let prepared =
                    bridge.prepare_until_stable(&account, transaction, MAX_PREPARE_ROUNDS).await?;
                print_json(&prepared)
            }
            Command::Status(args) => {
                let (account, transaction) = args.load()?;
                let prepared =
                    bridge.prepare_until_stable(&account, transaction, MAX_PREPARE_ROUNDS).await?;
                print_json(&bridge.get_transaction_status(&account, &prepared).await)
            }
            Command::MaxSpendable { account, transaction } => {
                let account: Account = read_json(&account)?;
                let transaction: Option<Transaction> =
                    transaction.as_deref().map(read_json::<Transaction>).transpose()?;
                let amount = bridge.estimate_max_spendable(&account, transaction.as_ref()).await?;
                println!("{amount}");
                Ok(())
            }
        }
    }
}

/// Reads and parses a JSON file.
fn read_json<T: DeserializeOwned>(path: &Path) -> eyre::Result<T> {
    let content = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read file: {}", path.display()))?;
    serde_json::from_str(&content)
        .wrap_err_with(|| format!("failed to parse file: {}", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> eyre::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

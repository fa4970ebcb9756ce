//! Permadrop CLI — upload files and static builds to permanent storage.
//!
//! Wallet selection: --wallet <path>, else PERMADROP_WALLET_FILE, else an
//! inline JWK in PERMADROP_WALLET.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use permadrop_cli::{init_tracing, progress_line};
use permadrop_client::{Deployer, NameResolver, Uploader};
use permadrop_core::models::UploadRequest;
use permadrop_core::{format_bytes, Config};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "permadrop", about = "Permanent storage upload CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload one file, or several published under a path manifest
    Upload {
        /// Files to upload
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Wallet keyfile path (overrides PERMADROP_WALLET_FILE)
        #[arg(long)]
        wallet: Option<PathBuf>,
    },
    /// Upload a static build directory and publish its path manifest
    Deploy {
        /// Build output directory
        #[arg(long, default_value = "./out")]
        dir: PathBuf,
        /// Wallet keyfile path
        #[arg(long, default_value = "./wallet.json")]
        wallet: PathBuf,
    },
    /// Resolve the primary name of a wallet address
    Resolve {
        /// Wallet address
        address: String,
    },
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize response")?;
    println!("{}", out);
    Ok(())
}

fn log_progress(percent: u8) {
    eprintln!("{}", progress_line(percent));
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = Config::from_env()?;

    match cli.command {
        Commands::Upload { files, wallet } => {
            if let Some(path) = wallet {
                config.wallet_path = Some(path);
            }
            let wallet = permadrop_wallet::create_wallet(&config).await?;
            let uploader = Uploader::new(wallet, config);

            if let [file] = files.as_slice() {
                if let Ok(meta) = std::fs::metadata(file) {
                    tracing::info!(
                        file = %file.display(),
                        size = %format_bytes(meta.len()),
                        "uploading file"
                    );
                }
                let result = uploader.upload_path(file, log_progress).await?;
                print_json(&result)?;
            } else {
                let mut requests = Vec::with_capacity(files.len());
                for file in &files {
                    let data = tokio::fs::read(file)
                        .await
                        .with_context(|| format!("Failed to read {}", file.display()))?;
                    let file_name = file
                        .file_name()
                        .and_then(|name| name.to_str())
                        .unwrap_or("file.bin")
                        .to_string();
                    let request = UploadRequest::new(file_name, data);
                    tracing::info!(
                        file = %request.file_name,
                        size = %format_bytes(request.size()),
                        "queued"
                    );
                    requests.push(request);
                }
                let result = uploader.upload_batch(requests, log_progress).await?;
                print_json(&result)?;
            }
        }
        Commands::Deploy { dir, wallet } => {
            let credential = std::fs::read_to_string(&wallet)
                .with_context(|| format!("Wallet keyfile not found: {}", wallet.display()))?;
            let deployer = Deployer::from_credential(&credential, &config)?;
            let result = deployer.deploy(&dir).await?;
            // The retrieval URL is the one piece of output scripts consume.
            println!("{}", result.url);
        }
        Commands::Resolve { address } => {
            let resolver = NameResolver::new(&config)?;
            let name = resolver.primary_name(&address).await;
            if name.is_none() {
                tracing::warn!(address = %address, "address has no primary name");
            }
            print_json(&serde_json::json!({ "address": address, "name": name }))?;
        }
    }

    Ok(())
}

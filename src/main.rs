//! `vk-link` command-line entry point.
//!
//! Shortens a link, or prints the click count when the link is already short.
//!
//! # Usage
//!
//! ```bash
//! # Link as an argument
//! vk-link https://example.com
//!
//! # Interactive prompt, or the first line of piped stdin
//! vk-link
//! echo https://example.com | vk-link
//!
//! # Decide "already short" by host instead of asking the API
//! vk-link --check host https://vk.cc/cKz1a
//! ```
//!
//! # Environment Variables
//!
//! - `VK_TOKEN` (required): VK access token
//!
//! See [`vk_link::config`] for the optional ones. A `.env` file in the working
//! directory or its parents is loaded first.
//!
//! # Exit Status
//!
//! `0` when a short link or click count was printed, `1` when the printed line
//! is an error message.

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use dialoguer::Input;
use std::io::{BufRead, IsTerminal};
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use vk_link::LinkService;
use vk_link::config::{self, Config};
use vk_link::domain::entities::ShortLinkCheck;
use vk_link::infrastructure::vk::VkClient;

/// Получение короткой ссылки или получение статистики переходов для существующей.
#[derive(Parser)]
#[command(name = "vk-link")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Ссылка в формате: https://example.com (asked for when omitted)
    link: Option<String>,

    /// How to tell whether the link is already short: `remote` or `host`.
    /// Overrides SHORT_LINK_CHECK.
    #[arg(long, value_name = "STRATEGY")]
    check: Option<ShortLinkCheck>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Failed to load configuration")?;
    init_tracing(&config);
    config.print_summary();

    let check = cli.check.unwrap_or(config.link_check);

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let link = match cli.link {
        Some(link) => link,
        None => read_link().context("Failed to read link")?,
    };

    let client = Arc::new(VkClient::from_config(&config)?);
    let service = LinkService::new(client, check, config.short_domain.clone());

    match service.process(&link).await {
        Ok(report) => {
            println!("{report}");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::warn!(code = e.code(), details = %e.details(), "Link processing failed");
            println!("{}", e.to_string().red());
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Asks for the link on a terminal, or takes the first line of piped stdin.
fn read_link() -> Result<String> {
    let stdin = std::io::stdin();

    if stdin.is_terminal() {
        return Ok(Input::<String>::new().with_prompt("Ссылка").interact_text()?);
    }

    let mut line = String::new();
    stdin.lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Installs the global subscriber. Logs go to stderr so stdout carries only
/// the result line.
fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

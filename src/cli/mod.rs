//! Command-line interface for the Zora coins tool
//!
//! A single positional command selects one of a closed set of actions. The
//! [`Dispatcher`] owns the whole invocation: it validates configuration,
//! connects the SDK once, runs the handler and maps its outcome to an exit
//! status. Console text goes to the dispatcher's writer, logs go to stderr.

use crate::config::Config;
use crate::handlers::{self, CommandResult};
use crate::sdk::{Connector, ZoraConnector};
use crate::secrets::SecretsProvider;
use crate::telemetry;
use clap::error::ErrorKind;
use clap::{Arg, ArgAction, Command};
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Token that prints usage without touching configuration
pub const HELP_COMMAND: &str = "help";

const BANNER: &str = "🌟 Zora Coins SDK Example\n========================\n";

/// Process outcome of one invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Failure,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Success => "success",
            Status::Failure => "failure",
        }
    }
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => ExitCode::SUCCESS,
            Status::Failure => ExitCode::FAILURE,
        }
    }
}

/// What `query` looks up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryTarget {
    /// Coins on the configured chain plus the creator's balances
    Explore,
    /// Details and activity of one coin
    Coin(String),
    /// Balances of any profile
    Profile(String),
}

/// Commands that run a handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandKind {
    Create,
    CreateWithMetadata { image: Option<PathBuf> },
    BuildMetadata { image: Option<PathBuf> },
    Query(QueryTarget),
}

fn hex_address(value: Option<&str>) -> Option<String> {
    value.filter(|v| v.starts_with("0x")).map(str::to_string)
}

impl CommandKind {
    /// Match a command token; `None` for anything outside the known set
    ///
    /// `query` targets and profiles are only used when they look like hex
    /// addresses, and a coin target wins over a profile.
    pub fn parse(command: &str, target: Option<&str>, profile: Option<&str>) -> Option<Self> {
        let image = || target.map(PathBuf::from);
        match command {
            "create" => Some(Self::Create),
            "create-with-metadata" => Some(Self::CreateWithMetadata { image: image() }),
            "build-metadata" => Some(Self::BuildMetadata { image: image() }),
            "query" => {
                let target = match (hex_address(target), hex_address(profile)) {
                    (Some(coin), _) => QueryTarget::Coin(coin),
                    (None, Some(profile)) => QueryTarget::Profile(profile),
                    (None, None) => QueryTarget::Explore,
                };
                Some(Self::Query(target))
            }
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::CreateWithMetadata { .. } => "create-with-metadata",
            Self::BuildMetadata { .. } => "build-metadata",
            Self::Query(QueryTarget::Explore) => "query",
            Self::Query(QueryTarget::Coin(_)) => "analyze",
            Self::Query(QueryTarget::Profile(_)) => "profile",
        }
    }

    fn announcement(&self) -> String {
        match self {
            Self::Create => "🚀 Creating a basic token...".to_string(),
            Self::CreateWithMetadata { .. } => {
                "🎨 Creating a token with custom metadata...".to_string()
            }
            Self::BuildMetadata { .. } => "📋 Building metadata only...".to_string(),
            Self::Query(QueryTarget::Explore) => "🔍 Querying coins...".to_string(),
            Self::Query(QueryTarget::Coin(address)) => {
                format!("🔍 Analyzing token {}...", address)
            }
            Self::Query(QueryTarget::Profile(address)) => {
                format!("💰 Querying profile balances for: {}", address)
            }
        }
    }

    fn success_message(&self) -> &'static str {
        match self {
            Self::Create => "Token creation completed successfully!",
            Self::CreateWithMetadata { .. } => {
                "Token with metadata creation completed successfully!"
            }
            Self::BuildMetadata { .. } => "Metadata built and uploaded:",
            Self::Query(QueryTarget::Explore) => "Query completed successfully!",
            Self::Query(QueryTarget::Coin(_)) => "Token analysis completed successfully!",
            Self::Query(QueryTarget::Profile(_)) => "Profile query completed successfully!",
        }
    }

    fn failure_message(&self) -> &'static str {
        match self {
            Self::Create | Self::CreateWithMetadata { .. } => "Token creation failed",
            Self::BuildMetadata { .. } => "Metadata building failed",
            Self::Query(QueryTarget::Explore) => "Query failed",
            Self::Query(QueryTarget::Coin(_)) => "Token analysis failed",
            Self::Query(QueryTarget::Profile(_)) => "Profile query failed",
        }
    }

    /// Whether the rendered output reads better before the completion line
    fn output_first(&self) -> bool {
        matches!(self, Self::Query(_))
    }
}

/// Build the argument parser
pub fn build_cli() -> Command {
    Command::new("zora-coins")
        .about("Create and query Zora coins")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("command")
                .index(1)
                .value_name("COMMAND")
                .help("create, create-with-metadata, build-metadata, query or help"),
        )
        .arg(
            Arg::new("target")
                .index(2)
                .value_name("TARGET")
                .help("Coin address for `query`, image path for the metadata commands"),
        )
        .arg(
            Arg::new("profile")
                .long("profile")
                .value_name("PROFILE_ADDRESS")
                .help("Profile whose balances `query` lists"),
        )
        .arg(
            Arg::new("metrics")
                .long("metrics")
                .action(ArgAction::SetTrue)
                .help("Print command and API counters after the command"),
        )
}

/// Usage text printed for help and unknown commands
pub fn usage() -> &'static str {
    "Available commands:
  create                              - Create a basic token
  create-with-metadata [IMAGE_PATH]   - Create a token with custom metadata
  build-metadata [IMAGE_PATH]         - Build and upload metadata without creating a token
  query [COIN_ADDRESS]                - Query existing coins, or analyze one coin
  query --profile <PROFILE_ADDRESS>   - Query the balances of a profile
  help                                - Show this help message

Options:
  --metrics                           - Print command and API counters after the command

Usage examples:
  zora-coins create
  zora-coins create-with-metadata ./logo.png
  zora-coins build-metadata
  zora-coins query
  zora-coins query 0x...
  zora-coins query --profile 0x...

⚠️  Note: You need to set up your .env file before running create/query commands
   Set ZORA_API_KEY, PRIVATE_KEY and CREATOR_ADDRESS (RPC_URL and PLATFORM_REFERRER are optional)"
}

/// Runs one command against injected configuration and SDK sources
pub struct Dispatcher<'a, W: Write> {
    secrets: &'a dyn SecretsProvider,
    connector: &'a dyn Connector,
    out: W,
}

impl<'a, W: Write> Dispatcher<'a, W> {
    pub fn new(secrets: &'a dyn SecretsProvider, connector: &'a dyn Connector, out: W) -> Self {
        Self {
            secrets,
            connector,
            out,
        }
    }

    /// Dispatch a full argument list (program name first)
    pub async fn dispatch<I, T>(&mut self, args: I) -> Status
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match self.try_dispatch(args).await {
            Ok(status) => status,
            Err(e) => {
                tracing::error!(error = %e, "Failed to write command output");
                Status::Failure
            }
        }
    }

    /// Consume the dispatcher, returning its writer
    pub fn into_output(self) -> W {
        self.out
    }

    async fn try_dispatch<I, T>(&mut self, args: I) -> io::Result<Status>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        writeln!(self.out, "{}", BANNER)?;

        let matches = match build_cli().try_get_matches_from(args) {
            Ok(matches) => matches,
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                write!(self.out, "{}", e.render())?;
                return Ok(Status::Success);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Unrecognized arguments");
                return self.print_usage();
            }
        };

        let command = matches.get_one::<String>("command").map(String::as_str);
        let target = matches.get_one::<String>("target").map(String::as_str);
        let profile = matches.get_one::<String>("profile").map(String::as_str);
        let show_metrics = matches.get_flag("metrics");

        let Some(command) = command.filter(|c| *c != HELP_COMMAND) else {
            return self.print_usage();
        };

        let config = match Config::load(self.secrets) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!(command, error = %e, "Configuration invalid");
                writeln!(self.out, "❌ {}", e)?;
                telemetry::record_command(command, "config_error");
                return Ok(Status::Failure);
            }
        };
        self.print_config(&config)?;

        let Some(kind) = CommandKind::parse(command, target, profile) else {
            tracing::debug!(command, "Unknown command");
            return self.print_usage();
        };

        let ctx = match self.connector.connect(&config) {
            Ok(ctx) => ctx,
            Err(e) => {
                tracing::error!(command = kind.name(), error = %e, "SDK initialization failed");
                writeln!(self.out, "❌ SDK initialization failed: {}", e)?;
                telemetry::record_command(kind.name(), Status::Failure.as_str());
                return Ok(Status::Failure);
            }
        };

        writeln!(self.out, "{}", kind.announcement())?;
        let result = match &kind {
            CommandKind::Create => handlers::create_coin(&ctx).await,
            CommandKind::CreateWithMetadata { image } => {
                handlers::create_coin_with_metadata(&ctx, image.as_deref()).await
            }
            CommandKind::BuildMetadata { image } => {
                handlers::build_metadata(&ctx, image.as_deref()).await
            }
            CommandKind::Query(QueryTarget::Explore) => handlers::explore(&ctx).await,
            CommandKind::Query(QueryTarget::Coin(address)) => {
                handlers::analyze_token(&ctx, address).await
            }
            CommandKind::Query(QueryTarget::Profile(address)) => {
                handlers::profile_balances(&ctx, address).await
            }
        };

        let status = self.report(&kind, &result)?;
        telemetry::record_command(kind.name(), status.as_str());
        if show_metrics {
            self.print_metrics()?;
        }
        Ok(status)
    }

    fn report(&mut self, kind: &CommandKind, result: &CommandResult) -> io::Result<Status> {
        match result {
            Ok(output) => {
                if kind.output_first() {
                    writeln!(self.out, "{}", output)?;
                    writeln!(self.out, "✅ {}", kind.success_message())?;
                } else {
                    writeln!(self.out, "✅ {}", kind.success_message())?;
                    writeln!(self.out, "{}", output)?;
                }
                Ok(Status::Success)
            }
            Err(failure) => {
                writeln!(self.out, "❌ {}: {}", kind.failure_message(), failure)?;
                Ok(Status::Failure)
            }
        }
    }

    fn print_usage(&mut self) -> io::Result<Status> {
        writeln!(self.out, "{}", usage())?;
        Ok(Status::Success)
    }

    fn print_metrics(&mut self) -> io::Result<()> {
        match telemetry::get_metrics() {
            Ok(metrics) => {
                writeln!(self.out)?;
                writeln!(self.out, "📊 Metrics:")?;
                write!(self.out, "{}", metrics)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to render metrics");
                Ok(())
            }
        }
    }

    fn print_config(&mut self, config: &Config) -> io::Result<()> {
        writeln!(self.out, "Configuration loaded successfully")?;
        writeln!(self.out, "Creator address: {}", config.creator_address())?;
        writeln!(self.out, "Chain ID: {}", config.chain_id())?;
        writeln!(self.out, "RPC URL: {}", config.rpc_url())?;
        writeln!(self.out)
    }
}

/// Main CLI entry point
pub async fn run(secrets: &dyn SecretsProvider) -> Status {
    let connector = ZoraConnector;
    let mut dispatcher = Dispatcher::new(secrets, &connector, io::stdout());
    let status = dispatcher.dispatch(std::env::args_os()).await;

    match telemetry::get_metrics() {
        Ok(metrics) => tracing::debug!(status = status.as_str(), %metrics, "Invocation finished"),
        Err(e) => tracing::warn!(error = %e, "Failed to render metrics"),
    }
    status
}

#[cfg(test)]
mod cli_test;

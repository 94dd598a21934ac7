use super::*;
use crate::CoinsError;
use crate::sdk::SdkContext;
use crate::secrets::StaticSecretsProvider;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counts lookups so tests can tell whether configuration was read
#[derive(Default)]
struct CountingSecrets {
    inner: StaticSecretsProvider,
    lookups: AtomicUsize,
}

impl CountingSecrets {
    fn configured() -> Self {
        Self {
            inner: StaticSecretsProvider::new()
                .with("ZORA_API_KEY", "zora-key")
                .with("PRIVATE_KEY", "0xprivate")
                .with("CREATOR_ADDRESS", "0xcreator"),
            lookups: AtomicUsize::new(0),
        }
    }

    fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl SecretsProvider for CountingSecrets {
    fn get_secret(&self, key: &str) -> Option<String> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.get_secret(key)
    }
}

/// Connector that always fails, counting attempts
#[derive(Default)]
struct FailingConnector {
    attempts: AtomicUsize,
}

impl Connector for FailingConnector {
    fn connect(&self, _config: &Config) -> crate::Result<SdkContext> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(CoinsError::chain("PRIVATE_KEY is not a valid secp256k1 key"))
    }
}

async fn run_with(secrets: &CountingSecrets, connector: &FailingConnector, args: &[&str]) -> (Status, String) {
    let mut dispatcher = Dispatcher::new(secrets, connector, Vec::new());
    let status = dispatcher.dispatch(args.iter().copied()).await;
    let text = String::from_utf8(dispatcher.into_output()).unwrap();
    (status, text)
}

#[test]
fn test_parse_command_kinds() {
    assert_eq!(CommandKind::parse("create", None, None), Some(CommandKind::Create));
    assert_eq!(
        CommandKind::parse("create-with-metadata", None, None),
        Some(CommandKind::CreateWithMetadata { image: None })
    );
    assert_eq!(
        CommandKind::parse("build-metadata", Some("logo.png"), None),
        Some(CommandKind::BuildMetadata {
            image: Some(PathBuf::from("logo.png"))
        })
    );
    assert_eq!(
        CommandKind::parse("query", None, None),
        Some(CommandKind::Query(QueryTarget::Explore))
    );
    assert_eq!(CommandKind::parse("deploy", None, None), None);
    assert_eq!(CommandKind::parse("CREATE", None, None), None);
}

#[test]
fn test_parse_query_target() {
    assert_eq!(
        CommandKind::parse("query", Some("0xabc"), None),
        Some(CommandKind::Query(QueryTarget::Coin("0xabc".to_string())))
    );
    assert_eq!(
        CommandKind::parse("query", Some("latest"), None),
        Some(CommandKind::Query(QueryTarget::Explore))
    );
    assert_eq!(
        CommandKind::parse("query", Some("0xabc"), None).map(|k| k.name()),
        Some("analyze")
    );
}

#[test]
fn test_parse_query_profile() {
    assert_eq!(
        CommandKind::parse("query", None, Some("0xdef")),
        Some(CommandKind::Query(QueryTarget::Profile("0xdef".to_string())))
    );
    // A coin target takes precedence over a profile
    assert_eq!(
        CommandKind::parse("query", Some("0xabc"), Some("0xdef")),
        Some(CommandKind::Query(QueryTarget::Coin("0xabc".to_string())))
    );
    assert_eq!(
        CommandKind::parse("query", None, Some("alice")),
        Some(CommandKind::Query(QueryTarget::Explore))
    );
    assert_eq!(
        CommandKind::parse("query", None, Some("0xdef")).map(|k| k.name()),
        Some("profile")
    );
}

#[test]
fn test_status_exit_codes() {
    assert_eq!(ExitCode::from(Status::Success), ExitCode::SUCCESS);
    assert_eq!(ExitCode::from(Status::Failure), ExitCode::FAILURE);
    assert_eq!(Status::Failure.as_str(), "failure");
}

#[test]
fn test_build_cli_positionals() {
    let matches = build_cli()
        .try_get_matches_from(["zora-coins", "query", "0x1234"])
        .unwrap();
    assert_eq!(matches.get_one::<String>("command").unwrap(), "query");
    assert_eq!(matches.get_one::<String>("target").unwrap(), "0x1234");

    let matches = build_cli().try_get_matches_from(["zora-coins"]).unwrap();
    assert!(matches.get_one::<String>("command").is_none());
    assert!(!matches.get_flag("metrics"));
}

#[test]
fn test_build_cli_options() {
    let matches = build_cli()
        .try_get_matches_from(["zora-coins", "query", "--profile", "0x99", "--metrics"])
        .unwrap();
    assert_eq!(matches.get_one::<String>("profile").unwrap(), "0x99");
    assert!(matches.get_flag("metrics"));
}

#[tokio::test]
async fn test_absent_command_prints_usage_without_config() {
    let secrets = CountingSecrets::default();
    let connector = FailingConnector::default();

    let (status, text) = run_with(&secrets, &connector, &["zora-coins"]).await;

    assert_eq!(status, Status::Success);
    assert!(text.contains("Available commands:"));
    assert_eq!(secrets.lookups(), 0);
}

#[tokio::test]
async fn test_help_command_prints_usage_without_config() {
    let secrets = CountingSecrets::default();
    let connector = FailingConnector::default();

    let (status, text) = run_with(&secrets, &connector, &["zora-coins", "help"]).await;

    assert_eq!(status, Status::Success);
    assert!(text.contains("create-with-metadata"));
    assert!(!text.contains("Configuration loaded"));
    assert_eq!(secrets.lookups(), 0);
}

#[tokio::test]
async fn test_help_flag_renders_clap_help() {
    let secrets = CountingSecrets::default();
    let connector = FailingConnector::default();

    let (status, text) = run_with(&secrets, &connector, &["zora-coins", "--help"]).await;

    assert_eq!(status, Status::Success);
    assert!(text.contains("[TARGET]"));
    assert!(text.contains("--profile <PROFILE_ADDRESS>"));
    assert!(text.contains("--metrics"));
    assert_eq!(secrets.lookups(), 0);
}

#[tokio::test]
async fn test_extra_arguments_degrade_to_usage() {
    let secrets = CountingSecrets::default();
    let connector = FailingConnector::default();

    let (status, text) = run_with(&secrets, &connector, &["zora-coins", "query", "0x1", "extra"]).await;

    assert_eq!(status, Status::Success);
    assert!(text.contains("Available commands:"));
    assert_eq!(secrets.lookups(), 0);
}

#[tokio::test]
async fn test_unknown_command_never_connects() {
    let secrets = CountingSecrets::configured();
    let connector = FailingConnector::default();

    let (status, text) = run_with(&secrets, &connector, &["zora-coins", "deploy"]).await;

    assert_eq!(status, Status::Success);
    assert!(text.contains("Configuration loaded successfully"));
    assert!(text.contains("Available commands:"));
    assert_eq!(connector.attempts.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_missing_api_key_fails() {
    let secrets = CountingSecrets::default();
    let connector = FailingConnector::default();

    let (status, text) = run_with(&secrets, &connector, &["zora-coins", "query"]).await;

    assert_eq!(status, Status::Failure);
    assert!(text.contains("❌ ZORA_API_KEY is required"));
    assert!(secrets.lookups() > 0);
    assert_eq!(connector.attempts.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_connect_failure_is_reported() {
    let secrets = CountingSecrets::configured();
    let connector = FailingConnector::default();

    let (status, text) = run_with(&secrets, &connector, &["zora-coins", "create"]).await;

    assert_eq!(status, Status::Failure);
    assert!(text.contains(
        "❌ SDK initialization failed: Chain error: PRIVATE_KEY is not a valid secp256k1 key"
    ));
    assert!(text.contains("Creator address: 0xcreator"));
    assert_eq!(connector.attempts.load(Ordering::SeqCst), 1);
}

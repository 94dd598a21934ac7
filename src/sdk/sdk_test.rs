use super::*;
use std::sync::Mutex;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Records sent calls and answers with scripted outcomes
struct ScriptedSender {
    sent: Mutex<Vec<TransactionCall>>,
    success: bool,
}

impl ScriptedSender {
    fn new(success: bool) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            success,
        }
    }
}

#[async_trait]
impl TransactionSender for ScriptedSender {
    async fn send(&self, call: &TransactionCall) -> Result<SubmittedTransaction> {
        let mut sent = self.sent.lock().unwrap();
        sent.push(call.clone());
        Ok(SubmittedTransaction {
            hash: format!("0xhash{}", sent.len()),
            block_number: Some(100 + sent.len() as u64),
            gas_used: 21_000,
            success: self.success,
        })
    }
}

fn params() -> CreateCoinParams {
    CreateCoinParams {
        creator: "0xcreator".to_string(),
        name: "My Awesome Token".to_string(),
        symbol: "MAT".to_string(),
        metadata: MetadataSource::RawUri {
            uri: "ipfs://bafymeta".to_string(),
        },
        currency: Currency::Zora,
        chain_id: 84532,
        starting_market_cap: StartingMarketCap::Low,
        platform_referrer: None,
        skip_metadata_validation: true,
    }
}

async fn sdk_with(calls: serde_json::Value, sender: Arc<ScriptedSender>) -> (MockServer, ZoraSdk) {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/create/content"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "calls": calls,
            "predictedCoinAddress": "0xdef"
        })))
        .mount(&mock_server)
        .await;

    let client = ZoraClient::new(&mock_server.uri(), "k").unwrap();
    let uploader = IpfsUploader::new(&mock_server.uri(), "k").unwrap();
    let sdk = ZoraSdk::new(client, uploader, sender, 84532);
    (mock_server, sdk)
}

#[tokio::test]
async fn test_create_coin_submits_every_call() {
    let sender = Arc::new(ScriptedSender::new(true));
    let (_server, sdk) = sdk_with(
        serde_json::json!([
            {"to": "0x01", "data": "0xaa", "value": "0"},
            {"to": "0x02", "data": "0xbb"}
        ]),
        sender.clone(),
    )
    .await;

    let creation = sdk.create_coin(&params()).await.unwrap();

    assert_eq!(creation.hash, "0xhash2");
    assert_eq!(creation.address, "0xdef");
    assert_eq!(creation.deployment.chain_id, 84532);
    assert_eq!(creation.deployment.block_number, Some(102));
    assert_eq!(creation.deployment.gas_used, 42_000);
    assert_eq!(creation.deployment.transaction_count, 2);

    let sent = sender.sent.lock().unwrap();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[1].value, "0");
}

#[tokio::test]
async fn test_create_coin_reverted() {
    let sender = Arc::new(ScriptedSender::new(false));
    let (_server, sdk) = sdk_with(
        serde_json::json!([{"to": "0x01", "data": "0xaa", "value": "0"}]),
        sender,
    )
    .await;

    let err = sdk.create_coin(&params()).await.unwrap_err();
    assert_eq!(err.to_string(), "Chain error: transaction 0xhash1 reverted");
}

#[tokio::test]
async fn test_create_coin_without_calls() {
    let sender = Arc::new(ScriptedSender::new(true));
    let (_server, sdk) = sdk_with(serde_json::json!([]), sender.clone()).await;

    let err = sdk.create_coin(&params()).await.unwrap_err();
    assert!(matches!(err, CoinsError::Chain(_)));
    assert!(sender.sent.lock().unwrap().is_empty());
}

#[test]
fn test_query_response_into_data() {
    let ok: QueryResponse<u8> = QueryResponse::ok(7);
    assert_eq!(ok.into_data().unwrap(), Some(7));

    let failed: QueryResponse<u8> = QueryResponse::failed("nope");
    assert_eq!(failed.into_data().unwrap_err().to_string(), "nope");
}

#[test]
fn test_metadata_uri_accessor() {
    assert_eq!(params().metadata_uri(), "ipfs://bafymeta");
}

use super::*;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const COIN: &str = "0x1111111111111111111111111111111111111111";

fn params() -> CreateCoinParams {
    CreateCoinParams {
        creator: "0x70997970C51812dc3A010C7d01b50e0d17dc79C8".to_string(),
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

#[tokio::test]
async fn test_get_coin_sends_api_key_and_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/coin"))
        .and(header("api-key", "test-key"))
        .and(query_param("address", COIN))
        .and(query_param("chain", "84532"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "zora20Token": {
                "address": COIN,
                "name": "Test Coin",
                "symbol": "TEST",
                "creatorAddress": "0xabc",
                "totalSupply": "1000000000",
                "marketCap": "1234.5"
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ZoraClient::new(&mock_server.uri(), "test-key").unwrap();
    let response = client
        .get_coin(&CoinQuery {
            address: COIN.to_string(),
            chain_id: 84532,
        })
        .await
        .unwrap();

    assert!(response.error.is_none());
    let coin = response.data.unwrap().zora20_token.unwrap();
    assert_eq!(coin.name.as_deref(), Some("Test Coin"));
    assert_eq!(coin.creator.as_deref(), Some("0xabc"));
    assert_eq!(coin.total_supply.as_deref(), Some("1000000000"));
    assert_eq!(coin.price, None);
}

#[tokio::test]
async fn test_api_error_fills_error_field() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/coin"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(serde_json::json!({"error": "Coin not found"})),
        )
        .mount(&mock_server)
        .await;

    let client = ZoraClient::new(&mock_server.uri(), "test-key").unwrap();
    let response = client
        .get_coin(&CoinQuery {
            address: COIN.to_string(),
            chain_id: 8453,
        })
        .await
        .unwrap();

    assert_eq!(response.data, None);
    assert_eq!(response.error.as_deref(), Some("Coin not found"));
    assert_eq!(
        response.into_data().unwrap_err().to_string(),
        "Coin not found"
    );
}

#[tokio::test]
async fn test_plain_text_error_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/coinSwaps"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&mock_server)
        .await;

    let client = ZoraClient::new(&mock_server.uri(), "k").unwrap();
    let response = client
        .get_coin_swaps(&CoinSwapsQuery {
            address: COIN.to_string(),
            chain_id: 8453,
            count: 10,
        })
        .await
        .unwrap();

    assert_eq!(response.error.as_deref(), Some("upstream exploded"));
}

#[tokio::test]
async fn test_connection_failure_is_err() {
    // Nothing listens on port 9 locally
    let client = ZoraClient::new("http://127.0.0.1:9", "k").unwrap();
    let result = client
        .get_coins(&CoinsQuery {
            chain_id: 8453,
            collection_address: crate::constants::ZERO_ADDRESS.to_string(),
            count: 5,
        })
        .await;

    assert!(matches!(result, Err(CoinsError::Network(_))));
}

#[tokio::test]
async fn test_get_coins_empty_listing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/coins"))
        .and(query_param("count", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&mock_server)
        .await;

    let client = ZoraClient::new(&mock_server.uri(), "k").unwrap();
    let response = client
        .get_coins(&CoinsQuery {
            chain_id: 84532,
            collection_address: crate::constants::ZERO_ADDRESS.to_string(),
            count: 5,
        })
        .await
        .unwrap();

    assert!(response.data.unwrap().zora20_tokens.is_empty());
}

#[tokio::test]
async fn test_profile_balances_joins_chain_ids() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/profileBalances"))
        .and(query_param("identifier", "0xabc"))
        .and(query_param("count", "20"))
        .and(query_param("chainIds", "8453,84532"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "profile": {
                "handle": "creator",
                "balances": [
                    {"balance": "42", "value": "1.5", "coin": {"name": "Held", "symbol": "HLD", "address": COIN}}
                ]
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ZoraClient::new(&mock_server.uri(), "k").unwrap();
    let response = client
        .get_profile_balances(&ProfileBalancesQuery {
            identifier: "0xabc".to_string(),
            count: 20,
            chain_ids: vec![8453, 84532],
        })
        .await
        .unwrap();

    let profile = response.data.unwrap().profile.unwrap();
    assert_eq!(profile.balances.len(), 1);
    assert_eq!(profile.balances[0].balance.as_deref(), Some("42"));
}

#[tokio::test]
async fn test_create_coin_call() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/create/content"))
        .and(header("api-key", "test-key"))
        .and(body_partial_json(serde_json::json!({
            "creator": "0x70997970C51812dc3A010C7d01b50e0d17dc79C8",
            "symbol": "MAT",
            "metadata": {"type": "RAW_URI", "uri": "ipfs://bafymeta"},
            "currency": "ZORA",
            "chainId": 84532,
            "startingMarketCap": "LOW"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "calls": [{"to": "0x777777751622c0d3258f214F9DF38E35BF45baF3", "data": "0xabcdef", "value": "0"}],
            "predictedCoinAddress": COIN
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ZoraClient::new(&format!("{}/", mock_server.uri()), "test-key").unwrap();
    let call = client.create_coin_call(&params()).await.unwrap();

    assert_eq!(call.calls.len(), 1);
    assert_eq!(call.calls[0].data, "0xabcdef");
    assert_eq!(call.predicted_coin_address, COIN);
}

#[tokio::test]
async fn test_create_coin_call_rejection() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/create/content"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(serde_json::json!({"message": "symbol too long"})),
        )
        .mount(&mock_server)
        .await;

    let client = ZoraClient::new(&mock_server.uri(), "test-key").unwrap();
    let err = client.create_coin_call(&params()).await.unwrap_err();

    assert_eq!(err.to_string(), "API error (400): symbol too long");
}

#[test]
fn test_params_omit_absent_referrer() {
    let json = serde_json::to_value(params()).unwrap();
    assert!(json.get("platformReferrer").is_none());

    let mut with_referrer = params();
    with_referrer.platform_referrer = Some("0xref".to_string());
    let json = serde_json::to_value(with_referrer).unwrap();
    assert_eq!(json["platformReferrer"], "0xref");
}

#[test]
fn test_rejects_unusable_api_key() {
    assert!(ZoraClient::new("http://localhost", "bad\nkey").is_err());
}

//! Tool host integration tests
//!
//! Feed line-delimited JSON-RPC into McpServer::serve and inspect the lines
//! it writes back.

mod common;

use common::{StubResponse, StubServer};
use lolgpt::mcp::McpServer;
use lolgpt::tools::CANONICAL_TOOL;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::time::{Duration, Instant};

async fn exchange(stub: &StubServer, input: &str) -> Vec<Value> {
    exchange_bytes(stub, input.as_bytes()).await
}

async fn exchange_bytes(stub: &StubServer, input: &[u8]) -> Vec<Value> {
    let server = McpServer::new(stub.registry());
    let output = server.serve(input, Vec::new()).await.unwrap();

    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

fn by_id(responses: &[Value]) -> HashMap<String, Value> {
    responses
        .iter()
        .map(|r| (r["id"].to_string(), r.clone()))
        .collect()
}

fn line(message: Value) -> String {
    format!("{}\n", message)
}

#[tokio::test]
async fn test_session_round_trip() {
    let stub = StubServer::start(StubResponse::ok_json(json!({"summoners": {
        "avg_kills": 5.2, "p1": "Lane phase."
    }})))
    .await;

    let input = [
        line(json!({"jsonrpc": "2.0", "id": 1, "method": "initialize",
                    "params": {"protocolVersion": "2024-11-05"}})),
        line(json!({"jsonrpc": "2.0", "method": "notifications/initialized"})),
        line(json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"})),
        line(json!({"jsonrpc": "2.0", "id": 3, "method": "tools/call", "params": {
            "name": "summoners_rift_simulation",
            "arguments": {"riot_id_a": "Faker", "tag_a": "KR1",
                          "riot_id_b": "Doublelift", "tag_b": "NA1"}
        }})),
        line(json!({"jsonrpc": "2.0", "id": 4, "method": "ping"})),
    ]
    .concat();

    let responses = exchange(&stub, &input).await;
    assert_eq!(responses.len(), 4, "notification gets no reply");
    let responses = by_id(&responses);

    let init = &responses["1"]["result"];
    assert_eq!(init["serverInfo"]["name"], "lolgpt");
    assert_eq!(init["protocolVersion"], "2024-11-05");

    let tools = responses["2"]["result"]["tools"].as_array().unwrap();
    assert_eq!(tools.len(), 6);
    assert!(tools
        .iter()
        .all(|t| t["inputSchema"]["type"] == "object" && t["description"].is_string()));

    let call = &responses["3"]["result"];
    assert_eq!(call["isError"], false);
    let text = call["content"][0]["text"].as_str().unwrap();
    assert!(text.contains("**📊 Summoner A (Faker#KR1) - Last 10 Games Statistics:**"));
    assert!(text.contains("• Average Kills: 5.2\n"));
    assert!(text.contains("**Phase 1:** Lane phase.\n"));

    assert_eq!(responses["4"]["result"], json!({}));

    let sent = stub.requests();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].field("lang"), Some("EN"));
}

#[tokio::test]
async fn test_simulation_failure_is_text_not_rpc_error() {
    let stub = StubServer::start(StubResponse::status(503)).await;

    let input = line(json!({"jsonrpc": "2.0", "id": "a", "method": "tools/call", "params": {
        "name": "league_match_predictor",
        "arguments": {"summoner_a_id": "Faker", "summoner_a_tag": "KR1",
                      "summoner_b_id": "Doublelift", "summoner_b_tag": "NA1"}
    }}));

    let responses = exchange(&stub, &input).await;

    assert_eq!(responses.len(), 1);
    assert!(responses[0].get("error").is_none());
    assert_eq!(
        responses[0]["result"]["content"][0]["text"],
        "Error: Failed to fetch match simulation (Status: 503)"
    );
    assert_eq!(stub.requests()[0].field("lang"), Some("ENGLISH"));
}

#[tokio::test]
async fn test_protocol_errors() {
    let stub = StubServer::start(StubResponse::ok_json(json!({"summoners": {}}))).await;

    let input = [
        "this is not json\n".to_string(),
        line(json!([1, 2, 3])),
        line(json!({"jsonrpc": "1.0", "id": 10, "method": "ping"})),
        line(json!({"jsonrpc": "2.0", "id": 11, "method": "resources/list"})),
        line(json!({"jsonrpc": "2.0", "id": 12, "method": "tools/call",
                    "params": {"name": "no_such_tool", "arguments": {}}})),
        line(json!({"jsonrpc": "2.0", "id": 13, "method": "tools/call",
                    "params": {"name": "league_summoner_comparison",
                               "arguments": {"player1_riot_id": "Faker"}}})),
        line(json!({"jsonrpc": "2.0", "id": 14, "method": "tools/call", "params": {}})),
        "\n".to_string(),
    ]
    .concat();

    let responses = exchange(&stub, &input).await;
    assert_eq!(responses.len(), 7, "blank lines are skipped");

    let mut null_ids: Vec<_> = responses
        .iter()
        .filter(|r| r["id"].is_null())
        .map(|r| r["error"]["code"].as_i64().unwrap())
        .collect();
    null_ids.sort();
    assert_eq!(null_ids, vec![-32700, -32600]);

    let responses = by_id(&responses);
    assert_eq!(responses["10"]["error"]["code"], -32600);
    assert_eq!(responses["11"]["error"]["code"], -32601);
    assert_eq!(responses["12"]["error"]["code"], -32602);
    assert_eq!(responses["13"]["error"]["code"], -32602);
    assert!(responses["13"]["error"]["message"]
        .as_str()
        .unwrap()
        .contains("player1_tag"));
    assert_eq!(responses["14"]["error"]["code"], -32602);

    assert!(stub.requests().is_empty());
}

#[tokio::test]
async fn test_non_utf8_line_does_not_end_session() {
    let stub = StubServer::start(StubResponse::ok_json(json!({"summoners": {}}))).await;

    let mut input = line(json!({"jsonrpc": "2.0", "id": 1, "method": "ping"})).into_bytes();
    input.extend_from_slice(b"\xff\xfe garbage\n");
    input.extend_from_slice(line(json!({"jsonrpc": "2.0", "id": 2, "method": "ping"})).as_bytes());

    let responses = exchange_bytes(&stub, &input).await;
    assert_eq!(responses.len(), 3);

    let parse_errors: Vec<_> = responses.iter().filter(|r| r["id"].is_null()).collect();
    assert_eq!(parse_errors.len(), 1);
    assert_eq!(parse_errors[0]["error"]["code"], -32700);

    let responses = by_id(&responses);
    assert_eq!(responses["1"]["result"], json!({}));
    assert_eq!(responses["2"]["result"], json!({}));
}

#[tokio::test]
async fn test_crlf_line_endings_are_accepted() {
    let stub = StubServer::start(StubResponse::ok_json(json!({"summoners": {}}))).await;

    let input = format!(
        "{}\r\n\r\n",
        json!({"jsonrpc": "2.0", "id": 7, "method": "ping"})
    );
    let responses = exchange(&stub, &input).await;

    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0]["id"], 7);
    assert_eq!(responses[0]["result"], json!({}));
}

#[tokio::test]
async fn test_slow_calls_do_not_block_the_session() {
    let delay = Duration::from_millis(600);
    let stub = StubServer::start(
        StubResponse::ok_json(json!({"summoners": {"p1": "Slow start."}})).delayed(delay),
    )
    .await;

    let call = |id: u64| {
        line(json!({"jsonrpc": "2.0", "id": id, "method": "tools/call", "params": {
            "name": CANONICAL_TOOL,
            "arguments": {"uidA": "Faker", "tagA": "KR1", "uidB": "Doublelift", "tagB": "NA1"}
        }}))
    };
    let input = [
        call(1),
        call(2),
        line(json!({"jsonrpc": "2.0", "id": 3, "method": "ping"})),
    ]
    .concat();

    let started = Instant::now();
    let responses = exchange(&stub, &input).await;
    let elapsed = started.elapsed();

    assert_eq!(responses.len(), 3);
    // The ping was read last but answered first
    assert_eq!(responses[0]["id"], 3);
    assert!(
        elapsed < delay * 2,
        "calls ran one after another: {:?}",
        elapsed
    );

    let responses = by_id(&responses);
    for id in ["1", "2"] {
        let text = responses[id]["result"]["content"][0]["text"].as_str().unwrap();
        assert!(text.contains("**Phase 1:** Slow start.\n"));
    }
    assert_eq!(stub.requests().len(), 2);
}

//! Line-delimited JSON-RPC tool host
//!
//! Reads one message per line, answers one message per line. Every message is
//! handled on its own task, so slow simulations do not hold up other calls;
//! a single writer task keeps output lines whole.

use crate::core::error::{Result, SimError};
use crate::mcp::protocol::{
    error_response, success_response, text_result, RpcError, PROTOCOL_VERSION, SERVER_NAME,
};
use crate::tools::ToolRegistry;
use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinSet;

#[derive(Clone)]
pub struct McpServer {
    registry: ToolRegistry,
}

impl McpServer {
    pub fn new(registry: ToolRegistry) -> Self {
        Self { registry }
    }

    /// Serve on the process's stdin/stdout until stdin closes
    pub async fn serve_stdio(self) -> Result<()> {
        let reader = BufReader::new(tokio::io::stdin());
        self.serve(reader, tokio::io::stdout()).await?;
        Ok(())
    }

    /// Serve on arbitrary streams, returning the writer once input is exhausted
    /// and every in-flight call has answered
    pub async fn serve<R, W>(self, reader: R, writer: W) -> Result<W>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<Value>();

        let writer_task = tokio::spawn(async move {
            let mut writer = writer;
            while let Some(message) = rx.recv().await {
                let mut line = serde_json::to_string(&message)?;
                line.push('\n');
                writer.write_all(line.as_bytes()).await?;
                writer.flush().await?;
            }
            Ok::<W, SimError>(writer)
        });

        // Split on raw bytes so a line that is not UTF-8 is a parse error,
        // not a read error
        let mut lines = reader.split(b'\n');
        let mut in_flight = JoinSet::new();

        loop {
            tokio::select! {
                line = lines.next_segment() => {
                    let Some(line) = line? else { break };
                    if line.iter().all(u8::is_ascii_whitespace) {
                        continue;
                    }
                    let server = self.clone();
                    let tx = tx.clone();
                    in_flight.spawn(async move {
                        if let Some(response) = server.handle_line(&line).await {
                            // Receiver only closes after this loop ends
                            let _ = tx.send(response);
                        }
                    });
                }
                Some(done) = in_flight.join_next(), if !in_flight.is_empty() => {
                    if let Err(e) = done {
                        tracing::error!("Request task failed: {}", e);
                    }
                }
            }
        }

        while let Some(done) = in_flight.join_next().await {
            if let Err(e) = done {
                tracing::error!("Request task failed: {}", e);
            }
        }
        drop(tx);

        writer_task
            .await
            .map_err(|e| SimError::Unexpected(e.to_string()))?
    }

    /// Handle one raw input line; `None` for notifications
    pub async fn handle_line(&self, line: &[u8]) -> Option<Value> {
        match serde_json::from_slice::<Value>(line) {
            Ok(message) => self.handle_message(message).await,
            Err(e) => {
                tracing::warn!("Unparseable message: {}", e);
                Some(error_response(Value::Null, RpcError::parse_error(e)))
            }
        }
    }

    pub async fn handle_message(&self, incoming: Value) -> Option<Value> {
        let Some(obj) = incoming.as_object() else {
            return Some(error_response(
                Value::Null,
                RpcError::invalid_request("Request must be a JSON object"),
            ));
        };

        if obj.get("jsonrpc").and_then(Value::as_str) != Some("2.0") {
            let id = obj.get("id").cloned().unwrap_or(Value::Null);
            return Some(error_response(
                id,
                RpcError::invalid_request("jsonrpc must be '2.0'"),
            ));
        }

        let Some(method) = obj.get("method").and_then(Value::as_str) else {
            // A response to something we never sent
            return None;
        };

        let params = obj.get("params").cloned().unwrap_or(Value::Null);
        match obj.get("id").cloned() {
            Some(id) => {
                let result = self.handle_request(method, params).await;
                Some(match result {
                    Ok(payload) => success_response(id, payload),
                    Err(err) => error_response(id, err),
                })
            }
            None => {
                tracing::debug!(method, "Notification received");
                None
            }
        }
    }

    async fn handle_request(
        &self,
        method: &str,
        params: Value,
    ) -> std::result::Result<Value, RpcError> {
        match method {
            "initialize" => Ok(initialize_payload(&params)),
            "ping" => Ok(json!({})),
            "tools/list" => Ok(json!({ "tools": self.registry.list() })),
            "tools/call" => self.handle_tools_call(params).await,
            _ => Err(RpcError::method_not_found(method)),
        }
    }

    async fn handle_tools_call(&self, params: Value) -> std::result::Result<Value, RpcError> {
        let name = params
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| RpcError::invalid_params("tools/call requires a string 'name'"))?;
        let arguments = params.get("arguments").cloned().unwrap_or(Value::Null);

        match self.registry.call(name, &arguments).await {
            Ok(text) => Ok(text_result(text)),
            Err(e) => {
                tracing::warn!(tool = name, "Rejected tool call: {}", e);
                Err(RpcError::invalid_params(e.to_string()))
            }
        }
    }
}

fn initialize_payload(params: &Value) -> Value {
    let version = params
        .get("protocolVersion")
        .and_then(Value::as_str)
        .unwrap_or(PROTOCOL_VERSION);

    json!({
        "protocolVersion": version,
        "capabilities": {
            "tools": { "listChanged": false }
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION"),
        },
    })
}

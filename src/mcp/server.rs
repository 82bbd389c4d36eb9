//! MCP server implementation.

use super::protocol::*;
use super::tools::{get_tools, LATEST_VIDEOS_TOOL};
use crate::config::Settings;
use crate::fetcher::VideoListFetcher;
use crate::youtube::YouTubeClient;
use serde_json::{json, Value};
use std::io::{self, BufRead, Write};

const PROTOCOL_VERSION: &str = "2024-11-05";
const SERVER_NAME: &str = "siste";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// MCP Server for Siste.
pub struct McpServer {
    settings: Settings,
    fetcher: Option<VideoListFetcher>,
}

impl McpServer {
    /// Create a new MCP server.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            fetcher: None,
        }
    }

    /// Run the MCP server (reads from stdin, writes to stdout).
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        // Log to stderr so it doesn't interfere with JSON-RPC
        eprintln!("Siste MCP server starting...");

        for line in stdin.lock().lines() {
            let line = line?;
            if line.is_empty() {
                continue;
            }

            let request: Request = match serde_json::from_str(&line) {
                Ok(req) => req,
                Err(e) => {
                    eprintln!("Failed to parse request: {}", e);
                    let response = Response::error(None, -32700, "Parse error");
                    writeln!(stdout, "{}", serde_json::to_string(&response)?)?;
                    stdout.flush()?;
                    continue;
                }
            };

            let response = self.handle_request(request).await;
            writeln!(stdout, "{}", serde_json::to_string(&response)?)?;
            stdout.flush()?;
        }

        Ok(())
    }

    /// Handle a single JSON-RPC request.
    async fn handle_request(&mut self, request: Request) -> Response {
        match request.method.as_str() {
            "initialize" => self.handle_initialize(request.id),
            "initialized" => {
                // Notification, no response needed but we'll send empty success
                Response::success(request.id, json!({}))
            }
            "tools/list" => self.handle_tools_list(request.id),
            "tools/call" => self.handle_tools_call(request.id, request.params).await,
            _ => Response::error(
                request.id,
                -32601,
                &format!("Method not found: {}", request.method),
            ),
        }
    }

    /// Handle initialize request.
    fn handle_initialize(&mut self, id: Option<Value>) -> Response {
        // Explicit construction from settings; a missing API key is not an
        // error here, it surfaces through the tool's warning string.
        let client = YouTubeClient::new(self.settings.youtube.resolve_api_key());
        self.fetcher = Some(VideoListFetcher::new(client));
        eprintln!("Video fetcher initialized");

        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: ToolsCapability {
                    list_changed: false,
                },
            },
            server_info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: SERVER_VERSION.to_string(),
            },
        };

        Response::success(id, serde_json::to_value(result).unwrap())
    }

    /// Handle tools/list request.
    fn handle_tools_list(&self, id: Option<Value>) -> Response {
        let result = ToolsListResult { tools: get_tools() };
        Response::success(id, serde_json::to_value(result).unwrap())
    }

    /// Handle tools/call request.
    async fn handle_tools_call(&self, id: Option<Value>, params: Option<Value>) -> Response {
        let params: ToolCallParams = match params {
            Some(p) => match serde_json::from_value(p) {
                Ok(params) => params,
                Err(e) => return Response::error(id, -32602, &format!("Invalid params: {}", e)),
            },
            None => return Response::error(id, -32602, "Missing params"),
        };

        let result = match params.name.as_str() {
            LATEST_VIDEOS_TOOL => self.tool_latest_videos(params.arguments).await,
            _ => ToolCallResult::error(format!("Unknown tool: {}", params.name)),
        };

        Response::success(id, serde_json::to_value(result).unwrap())
    }

    /// Latest-videos tool.
    async fn tool_latest_videos(&self, args: Option<Value>) -> ToolCallResult {
        let args = match args {
            Some(a) => a,
            None => return ToolCallResult::error("Missing arguments".to_string()),
        };

        let limit = match args.get("limit").and_then(|v| v.as_i64()) {
            Some(l) => l,
            None => return ToolCallResult::error("Missing 'limit' argument".to_string()),
        };

        let fetcher = match &self.fetcher {
            Some(f) => f,
            None => return ToolCallResult::error("Server not initialized".to_string()),
        };

        // Failures come back as the warning-marker string; that is still an
        // ordinary text result, not a protocol error.
        ToolCallResult::text(fetcher.fetch(limit).await)
    }
}

//! MCP tool definitions for Siste.

use super::protocol::Tool;
use serde_json::json;

/// Name of the latest-videos tool, as registered with the host.
pub const LATEST_VIDEOS_TOOL: &str = "CS50 latest videos";

/// Get all available tools.
pub fn get_tools() -> Vec<Tool> {
    vec![Tool {
        name: LATEST_VIDEOS_TOOL.to_string(),
        description: "Fetches the latest CS50 videos from YouTube".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "limit": {
                    "type": "integer",
                    "description": "Maximum number of videos to return"
                }
            },
            "required": ["limit"]
        }),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_table() {
        let tools = get_tools();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, "CS50 latest videos");
        assert_eq!(tools[0].input_schema["required"][0], "limit");
    }
}

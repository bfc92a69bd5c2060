use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};
use serde::Deserialize;
use serde_json::json;

use rickmorty_client::{ClientError, RickAndMortyClient};

/// Parameters for the `get_episodes` tool
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetEpisodesRequest {
    #[schemars(description = "Id of the episode to fetch")]
    pub episode_id: u32,
}

/// Parameters for the `get_character` tool
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetCharacterRequest {
    #[schemars(description = "Id of the character to fetch")]
    pub character_id: u32,
}

/// MCP service exposing the two Rick and Morty lookup tools
///
/// Each invocation is stateless: one upstream GET, then the trimmed record
/// as the tool result. Client failures map straight into MCP errors.
#[derive(Clone)]
pub struct RickMortyService {
    client: RickAndMortyClient,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl RickMortyService {
    pub fn new(client: RickAndMortyClient) -> Self {
        Self {
            client,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(description = "Fetch an episode from the Rick and Morty API")]
    pub async fn get_episodes(
        &self,
        Parameters(GetEpisodesRequest { episode_id }): Parameters<GetEpisodesRequest>,
    ) -> Result<CallToolResult, McpError> {
        let episode = self
            .client
            .episode(episode_id)
            .await
            .map_err(tool_error)?;

        Ok(CallToolResult::success(vec![Content::json(episode)?]))
    }

    #[tool(description = "Fetch a character from the Rick and Morty API")]
    pub async fn get_character(
        &self,
        Parameters(GetCharacterRequest { character_id }): Parameters<GetCharacterRequest>,
    ) -> Result<CallToolResult, McpError> {
        let character = self
            .client
            .character(character_id)
            .await
            .map_err(tool_error)?;

        Ok(CallToolResult::success(vec![Content::json(character)?]))
    }
}

/// Map a client failure into an MCP error, carrying the upstream HTTP
/// status in the error data when there is one
fn tool_error(err: ClientError) -> McpError {
    let data = err
        .upstream_status()
        .map(|status| json!({ "status": status.as_u16() }));

    McpError::internal_error(err.to_string(), data)
}

#[tool_handler]
impl ServerHandler for RickMortyService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Look up Rick and Morty data by id with the get_episodes and \
                 get_character tools."
                    .to_string(),
            ),
        }
    }
}

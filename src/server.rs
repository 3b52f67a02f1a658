//! MCP server surface: tools, resources, and prompts

use std::sync::Arc;

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        AnnotateAble, CallToolResult, GetPromptRequestParam, GetPromptResult, ListPromptsResult,
        ListResourceTemplatesResult, ListResourcesResult, PaginatedRequestParam, Prompt,
        PromptMessage, PromptMessageRole, RawResource, RawResourceTemplate,
        ReadResourceRequestParam, ReadResourceResult, Resource, ResourceContents,
        ResourceTemplate, ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::collect;
use crate::netstat::{self, CommandRunner, NetstatRunner};
use crate::provider::{MetricsProvider, SysinfoMetrics};
use crate::response::json_success;

const PLATFORM_URI: &str = "system://platform";
const UPTIME_URI: &str = "system://uptime";
const GREETING_SCHEME: &str = "greeting://";

const SYSTEM_STATUS_PROMPT: &str = "Please provide a comprehensive system status report including:
1. Current date and time in IST
2. Memory usage statistics
3. CPU usage and load
4. Disk space availability
5. System uptime and platform information

Format the response in a clear, readable manner with proper sections.";

const PERFORMANCE_CHECK_PROMPT: &str = "Check the current system performance and provide analysis on:
1. Is the memory usage within acceptable limits?
2. Is the CPU usage normal?
3. Is there sufficient disk space available?
4. Any performance concerns or recommendations?";

/// The host telemetry MCP server
#[derive(Clone)]
pub struct HostInfoServer {
    metrics: Arc<dyn MetricsProvider>,
    runner: Arc<dyn CommandRunner>,
    tool_router: ToolRouter<Self>,
}

// ============================================================================
// Parameter Types
// ============================================================================

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct PortInfoParams {
    #[schemars(description = "TCP/UDP port number to look up (0-65535)")]
    pub port: u32,
}

// ============================================================================
// Tool Router Implementation
// ============================================================================

#[tool_router]
impl HostInfoServer {
    pub fn new() -> Self {
        Self::with_capabilities(Arc::new(SysinfoMetrics::new()), Arc::new(NetstatRunner))
    }

    /// Build a server around explicit capability implementations.
    pub fn with_capabilities(
        metrics: Arc<dyn MetricsProvider>,
        runner: Arc<dyn CommandRunner>,
    ) -> Self {
        Self {
            metrics,
            runner,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(description = "Get the current time in IST (India Standard Time) and UTC")]
    async fn get_current_time(&self) -> Result<CallToolResult, McpError> {
        json_success(&collect::time::current_time())
    }

    #[tool(description = "Get current system memory usage statistics in GB")]
    async fn get_memory_usage(&self) -> Result<CallToolResult, McpError> {
        let snapshot = collect::memory::memory_usage(self.metrics.as_ref()).await?;
        json_success(&snapshot)
    }

    #[tool(
        description = "Get current CPU usage, core count, frequency, and load average. \
                       Samples usage over a 1-second window, so the call takes about a second."
    )]
    async fn get_cpu_usage(&self) -> Result<CallToolResult, McpError> {
        let snapshot = collect::cpu::cpu_usage(self.metrics.as_ref()).await?;
        json_success(&snapshot)
    }

    #[tool(description = "Get disk usage for the root partition in GB")]
    async fn get_disk_usage(&self) -> Result<CallToolResult, McpError> {
        let snapshot = collect::disk::disk_usage(self.metrics.as_ref()).await?;
        json_success(&snapshot)
    }

    #[tool(
        description = "Get comprehensive system information including time, memory, CPU, \
                       disk usage, and platform identity"
    )]
    async fn get_system_info(&self) -> Result<CallToolResult, McpError> {
        let snapshot = collect::system_info(self.metrics.as_ref()).await?;
        json_success(&snapshot)
    }

    #[tool(
        description = "Use netstat to find the process using a given port. Always returns a \
                       record; a failed netstat run or a miss is reported in the raw_line field."
    )]
    async fn get_port_info_netstat(
        &self,
        Parameters(params): Parameters<PortInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!(port = params.port, "port lookup requested");
        let record = netstat::port_info(self.runner.as_ref(), params.port).await?;
        json_success(&record)
    }
}

impl Default for HostInfoServer {
    fn default() -> Self {
        Self::new()
    }
}

fn greeting(name: &str) -> String {
    format!("Hello unga bunga, {name}!")
}

// ============================================================================
// Resource and Prompt Dispatch
// ============================================================================

impl HostInfoServer {
    /// Resolve a resource URI to its plain-text payload.
    async fn resource_text(&self, uri: &str) -> Result<String, McpError> {
        if uri == PLATFORM_URI {
            Ok(collect::platform::platform_text(self.metrics.as_ref()).await)
        } else if uri == UPTIME_URI {
            Ok(collect::uptime::uptime_text(self.metrics.as_ref()).await)
        } else if let Some(name) = uri.strip_prefix(GREETING_SCHEME) {
            Ok(greeting(name))
        } else {
            Err(McpError::resource_not_found(
                format!("unknown resource: {uri}"),
                None,
            ))
        }
    }

    fn static_resources() -> Vec<Resource> {
        vec![
            RawResource::new(PLATFORM_URI, "platform").no_annotation(),
            RawResource::new(UPTIME_URI, "uptime").no_annotation(),
        ]
    }

    fn greeting_template() -> ResourceTemplate {
        RawResourceTemplate {
            uri_template: format!("{GREETING_SCHEME}{{name}}"),
            name: "greeting".to_string(),
            title: None,
            description: Some("Personalized greeting for the given name".to_string()),
            mime_type: Some("text/plain".to_string()),
            icons: None,
        }
        .no_annotation()
    }

    /// Resolve a prompt name to its fixed instructional text.
    fn prompt_text(name: &str) -> Result<&'static str, McpError> {
        match name {
            "system_status_prompt" => Ok(SYSTEM_STATUS_PROMPT),
            "performance_check_prompt" => Ok(PERFORMANCE_CHECK_PROMPT),
            _ => Err(McpError::invalid_params(
                format!("unknown prompt: {name}"),
                None,
            )),
        }
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for HostInfoServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Host telemetry MCP server - provides current time (IST/UTC), memory, CPU, \
                 and disk usage, combined system information, a netstat port lookup tool, \
                 and platform/uptime resources."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .enable_prompts()
                .build(),
            ..Default::default()
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        Ok(ListResourcesResult {
            resources: Self::static_resources(),
            next_cursor: None,
            meta: Default::default(),
        })
    }

    async fn read_resource(
        &self,
        ReadResourceRequestParam { uri }: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        let text = self.resource_text(&uri).await?;
        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(text, uri)],
        })
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, McpError> {
        Ok(ListResourceTemplatesResult {
            resource_templates: vec![Self::greeting_template()],
            next_cursor: None,
            meta: Default::default(),
        })
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        Ok(ListPromptsResult {
            prompts: vec![
                Prompt::new(
                    "system_status_prompt",
                    Some("Generate a prompt for getting comprehensive system status"),
                    None,
                ),
                Prompt::new(
                    "performance_check_prompt",
                    Some("Generate a prompt for performance monitoring"),
                    None,
                ),
            ],
            next_cursor: None,
            meta: Default::default(),
        })
    }

    async fn get_prompt(
        &self,
        GetPromptRequestParam { name, .. }: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        let text = Self::prompt_text(&name)?;

        Ok(GetPromptResult {
            description: None,
            messages: vec![PromptMessage::new_text(PromptMessageRole::User, text)],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::netstat::fake::FakeRunner;
    use crate::provider::fake::FakeMetrics;

    fn fixture_server() -> HostInfoServer {
        HostInfoServer::with_capabilities(
            Arc::new(FakeMetrics::default()),
            Arc::new(FakeRunner::output(
                "  TCP    0.0.0.0:8080    0.0.0.0:0    LISTENING    1234\n",
            )),
        )
    }

    #[test]
    fn router_lists_all_six_tools() {
        let server = fixture_server();
        let tools = server.tool_router.list_all();
        assert_eq!(tools.len(), 6);

        let names: Vec<&str> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"get_current_time"));
        assert!(names.contains(&"get_memory_usage"));
        assert!(names.contains(&"get_cpu_usage"));
        assert!(names.contains(&"get_disk_usage"));
        assert!(names.contains(&"get_system_info"));
        assert!(names.contains(&"get_port_info_netstat"));
    }

    #[tokio::test]
    async fn memory_tool_succeeds_on_fixture_data() {
        let server = fixture_server();
        let result = server.get_memory_usage().await.unwrap();
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(result.content.len(), 1);
    }

    #[tokio::test]
    async fn system_info_tool_surfaces_collector_failure() {
        let server = HostInfoServer::with_capabilities(
            Arc::new(FakeMetrics {
                fail_cpu: true,
                ..Default::default()
            }),
            Arc::new(FakeRunner::output("")),
        );
        assert!(server.get_system_info().await.is_err());
    }

    #[tokio::test]
    async fn port_tool_returns_a_record() {
        let server = fixture_server();
        let result = server
            .get_port_info_netstat(Parameters(PortInfoParams { port: 8080 }))
            .await
            .unwrap();
        assert!(!result.is_error.unwrap_or(false));
    }

    #[tokio::test]
    async fn port_tool_rejects_out_of_range_ports() {
        let server = fixture_server();
        let result = server
            .get_port_info_netstat(Parameters(PortInfoParams { port: 99_999 }))
            .await;
        assert!(result.is_err());
    }

    #[test]
    fn greeting_is_templated() {
        assert_eq!(greeting("Alice"), "Hello unga bunga, Alice!");
    }

    #[tokio::test]
    async fn platform_resource_renders_identity_text() {
        let server = fixture_server();
        let text = server.resource_text(PLATFORM_URI).await.unwrap();
        assert!(text.contains("System: TestOS"));
        assert!(text.contains("Hostname: fixture-host"));
    }

    #[tokio::test]
    async fn uptime_resource_renders_the_uptime_sentence() {
        let server = fixture_server();
        let text = server.resource_text(UPTIME_URI).await.unwrap();
        assert!(text.starts_with("System uptime: "), "{text}");
    }

    #[tokio::test]
    async fn greeting_resource_extracts_the_name_from_the_uri() {
        let server = fixture_server();
        let text = server.resource_text("greeting://Alice").await.unwrap();
        assert_eq!(text, "Hello unga bunga, Alice!");
    }

    #[tokio::test]
    async fn unknown_resource_uri_is_an_error() {
        let server = fixture_server();
        assert!(server.resource_text("system://nope").await.is_err());
    }

    #[test]
    fn static_resources_list_platform_and_uptime() {
        let resources = HostInfoServer::static_resources();
        let uris: Vec<&str> = resources.iter().map(|r| r.raw.uri.as_str()).collect();
        assert_eq!(uris, vec!["system://platform", "system://uptime"]);
    }

    #[test]
    fn greeting_template_advertises_the_name_parameter() {
        let template = HostInfoServer::greeting_template();
        assert_eq!(template.raw.uri_template, "greeting://{name}");
        assert_eq!(template.raw.name, "greeting");
    }

    #[test]
    fn known_prompts_resolve_to_their_text() {
        let status = HostInfoServer::prompt_text("system_status_prompt").unwrap();
        assert!(status.contains("system status report"));
        let perf = HostInfoServer::prompt_text("performance_check_prompt").unwrap();
        assert!(perf.contains("system performance"));
    }

    #[test]
    fn unknown_prompt_is_an_error() {
        assert!(HostInfoServer::prompt_text("memory_dump_prompt").is_err());
    }
}

//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes the book codec and prose analytics to AI assistants over stdio.
//! Every tool takes the document text itself rather than a path, so the
//! client decides what the server may see.
//!
//! # Architecture
//!
//! The MCP server is a presentation layer. It wraps the same core library
//! that the CLI commands use, and each `#[tool]` method delegates to it.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use bookframe_core::codec::line_for_from;
use bookframe_core::{Book, analytics};

use crate::commands::outline::BookOutline;
use crate::commands::select;

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for tools that take a whole book.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct DocumentParams {
    /// The book in bookframe Markdown, metadata comments included.
    pub document: String,
}

/// Parameters for the `locate_line` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct LocateLineParams {
    /// The book in bookframe Markdown.
    pub document: String,
    /// Chapter number, starting at 1.
    pub chapter: usize,
    /// Scene number within the chapter, starting at 1. Omit for the chapter heading.
    pub scene: Option<usize>,
}

/// Parameters for the `analyze_prose` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AnalyzeProseParams {
    /// Prose to analyze. Inline Markdown emphasis is ignored.
    pub text: String,
    /// Report `pass: false` when the Flesch Reading Ease is below this.
    pub min_reading_ease: Option<f64>,
}

/// MCP server exposing the book codec and analytics.
#[derive(Clone)]
pub struct BookServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    max_input_bytes: Option<usize>,
    first_line: usize,
}

impl Default for BookServer {
    fn default() -> Self {
        Self::new(Some(bookframe_core::DEFAULT_MAX_INPUT_BYTES), 1)
    }
}

impl BookServer {
    fn check_size(&self, text: &str) -> Result<(), McpError> {
        match self.max_input_bytes {
            Some(max) if text.len() > max => Err(McpError::invalid_params(
                format!("input too large: {} bytes (limit: {max} bytes)", text.len()),
                None,
            )),
            _ => Ok(()),
        }
    }

    fn parse(&self, document: &str) -> Result<Book, McpError> {
        self.check_size(document)?;
        Book::from_markdown(document).map_err(|e| McpError::invalid_params(e.to_string(), None))
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))
}

#[tool_router]
impl BookServer {
    /// Create a new MCP server instance.
    pub fn new(max_input_bytes: Option<usize>, first_line: usize) -> Self {
        Self {
            tool_router: Self::tool_router(),
            max_input_bytes,
            first_line,
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
        });

        let text = if params.format == "json" {
            to_json(&info)?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Outline of chapters and scenes.
    #[tool(
        description = "Parse a book and return its outline: title, author, chapters with status, word count and start line, and their scenes."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn outline_book(
        &self,
        Parameters(params): Parameters<DocumentParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "outline_book", len = params.document.len(), "executing MCP tool");

        let book = self.parse(&params.document)?;
        let json = to_json(&BookOutline::new(&book, self.first_line))?;

        tracing::info!(
            tool = "outline_book",
            chapters = book.chapters().len(),
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Canonical re-serialization.
    #[tool(
        description = "Rewrite a book in canonical bookframe layout. Returns the formatted document."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn format_book(
        &self,
        Parameters(params): Parameters<DocumentParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "format_book", len = params.document.len(), "executing MCP tool");

        let book = self.parse(&params.document)?;
        let formatted = book
            .to_markdown()
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        tracing::info!(tool = "format_book", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(formatted)]))
    }

    /// Line where a chapter or scene starts.
    #[tool(
        description = "Find the line where a chapter (or a scene of it) starts in the canonical layout of a book."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", chapter = params.chapter))]
    fn locate_line(
        &self,
        Parameters(params): Parameters<LocateLineParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "locate_line", scene = ?params.scene, "executing MCP tool");

        let book = self.parse(&params.document)?;
        let selection = select(&book, Some(params.chapter), params.scene)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
        let line = line_for_from(&book, &selection, self.first_line)
            .ok_or_else(|| McpError::internal_error("selection vanished", None))?;
        let json = to_json(&serde_json::json!({
            "chapter": params.chapter,
            "scene": params.scene,
            "line": line,
        }))?;

        tracing::info!(tool = "locate_line", line, "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Readability, passive voice, and adverbs.
    #[tool(
        description = "Analyze prose: token-type ratio, Flesch Reading Ease with difficulty per sentence, passive-voice clauses, adverbs, and part-of-speech counts. Spans are byte offsets into the returned text."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn analyze_prose(
        &self,
        Parameters(params): Parameters<AnalyzeProseParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "analyze_prose", len = params.text.len(), "executing MCP tool");

        self.check_size(&params.text)?;
        let report = analytics::annotate(&params.text);
        let score = report.readability.reading_ease;
        let pass = params.min_reading_ease.is_none_or(|min| score >= min);

        let mut value = serde_json::to_value(&report)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;
        if let Some(map) = value.as_object_mut() {
            map.insert("pass".to_string(), pass.into());
        }
        let json = to_json(&value)?;

        tracing::info!(tool = "analyze_prose", reading_ease = score, pass, "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for BookServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Outline, format, and locate lines in book manuscripts, and analyze their prose.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    const BOOK: &str = "# Persuasion:\n\n<!-- {\"author\":\"Jane Austen\"} -->\n\n## Chapter 1:\n\n<!-- {\"description\":\"Kellynch\",\"status\":\"Good\"} -->\n\nSir Walter Elliot was vain.\n\n<!-- {} -->\n\nHe read the Baronetage.";

    /// Extract text from the first content item in a `CallToolResult`.
    fn extract_text(result: &CallToolResult) -> Option<&str> {
        result.content.first().and_then(|c| match &c.raw {
            RawContent::Text(t) => Some(t.text.as_str()),
            _ => None,
        })
    }

    fn json_of(result: &CallToolResult) -> serde_json::Value {
        serde_json::from_str(extract_text(result).expect("should have text content"))
            .expect("valid JSON")
    }

    fn document(text: &str) -> Parameters<DocumentParams> {
        Parameters(DocumentParams {
            document: text.to_string(),
        })
    }

    #[test]
    fn server_info_has_correct_name() {
        let server = BookServer::default();
        let info = ServerHandler::get_info(&server);

        assert_eq!(info.server_info.name, env!("CARGO_PKG_NAME"));
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
        assert!(info.capabilities.tools.is_some());
        assert!(info.instructions.unwrap().contains(env!("CARGO_PKG_NAME")));
    }

    #[test]
    fn get_info_tool_returns_json_when_requested() {
        let server = BookServer::default();
        let result = server
            .get_info(Parameters(GetInfoParams {
                format: "json".to_string(),
            }))
            .expect("get_info should succeed");

        let json = json_of(&result);
        assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn outline_book_tool_works() {
        let server = BookServer::default();
        let result = server.outline_book(document(BOOK)).expect("outline should succeed");
        let json = json_of(&result);

        assert_eq!(json["title"], "Persuasion");
        assert_eq!(json["author"], "Jane Austen");
        assert_eq!(json["chapters"][0]["line"], 5);
        assert_eq!(json["chapters"][0]["scenes"].as_array().unwrap().len(), 2);
        assert_eq!(json["chapters"][0]["scenes"][0]["status"], "Good");
    }

    #[test]
    fn outline_book_rejects_bad_header() {
        let server = BookServer::default();
        let err = server
            .outline_book(document("# T:\n\n<!-- {not json} -->"))
            .unwrap_err();
        assert!(err.message.contains("book header"));
    }

    #[test]
    fn format_book_is_idempotent() {
        let server = BookServer::default();
        let once = server.format_book(document(BOOK)).unwrap();
        let once = extract_text(&once).unwrap().to_string();
        let twice = server.format_book(document(&once)).unwrap();
        assert_eq!(extract_text(&twice).unwrap(), once);
    }

    #[test]
    fn locate_line_tool_works() {
        let server = BookServer::default();
        let result = server
            .locate_line(Parameters(LocateLineParams {
                document: BOOK.to_string(),
                chapter: 1,
                scene: Some(2),
            }))
            .unwrap();
        assert_eq!(json_of(&result)["line"], 11);

        let missing = server.locate_line(Parameters(LocateLineParams {
            document: BOOK.to_string(),
            chapter: 4,
            scene: None,
        }));
        assert!(missing.is_err());
    }

    #[test]
    fn analyze_prose_tool_works() {
        let server = BookServer::default();
        let result = server
            .analyze_prose(Parameters(AnalyzeProseParams {
                text: "My sandwich was eaten by bears. The red dog jumped over the red fox."
                    .to_string(),
                min_reading_ease: Some(200.0),
            }))
            .unwrap();
        let json = json_of(&result);

        assert_eq!(json["readability"]["sentences"], 2);
        assert!(json["sentences"][0]["passive"].is_object());
        assert!(json["sentences"][1]["passive"].is_null());
        assert_eq!(json["pass"], false);
    }

    #[test]
    fn oversized_input_is_rejected() {
        let server = BookServer::new(Some(10), 1);
        assert!(server.outline_book(document(BOOK)).is_err());
        assert!(
            server
                .analyze_prose(Parameters(AnalyzeProseParams {
                    text: "far too long for the limit".to_string(),
                    min_reading_ease: None,
                }))
                .is_err()
        );
    }
}

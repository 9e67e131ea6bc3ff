//! Language server backend
//!
//! Keeps the full text of open documents and answers formatting and folding
//! requests with the core algorithms. Settings are read once from the
//! workspace root during `initialize`.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use liftoscript_core::{FoldingAnalyzer, FoldingRange as CoreFoldingRange, Formatter};
use tokio::sync::RwLock;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::{
    DidChangeTextDocumentParams, DidCloseTextDocumentParams, DidOpenTextDocumentParams,
    DidSaveTextDocumentParams, DocumentFormattingParams, FoldingRange, FoldingRangeKind,
    FoldingRangeParams, FoldingRangeProviderCapability, InitializeParams, InitializeResult,
    InitializedParams, MessageType, OneOf, Position, Range, ServerCapabilities, ServerInfo,
    TextDocumentSyncCapability, TextDocumentSyncKind, TextEdit, Url,
};
use tower_lsp::{Client, LanguageServer, LspService, Server};
use tracing::{debug, info, warn};

use crate::config::Settings;

/// LSP Backend state
pub struct Backend {
    /// LSP client for sending notifications
    client: Client,
    /// Document store for open documents
    documents: Arc<RwLock<HashMap<Url, String>>>,
    /// Settings loaded at initialization
    settings: Arc<RwLock<Settings>>,
}

impl Backend {
    /// Create a new backend instance
    pub fn new(client: Client) -> Self {
        Self {
            client,
            documents: Arc::new(RwLock::new(HashMap::new())),
            settings: Arc::new(RwLock::new(Settings::default())),
        }
    }

    /// Current settings
    pub async fn settings(&self) -> Settings {
        self.settings.read().await.clone()
    }

    /// Get document text by URI
    async fn get_document(&self, uri: &Url) -> Option<String> {
        let docs = self.documents.read().await;
        docs.get(uri).cloned()
    }

    /// Store document text
    async fn store_document(&self, uri: Url, text: String) {
        let mut docs = self.documents.write().await;
        docs.insert(uri, text);
    }

    /// Remove document from store
    async fn remove_document(&self, uri: &Url) {
        let mut docs = self.documents.write().await;
        docs.remove(uri);
    }

    /// Load `liftoscript.toml` from the workspace root, keeping defaults on failure
    async fn load_settings(&self, params: &InitializeParams) -> Settings {
        let Some(root) = workspace_root(params) else {
            debug!("No workspace root, using default settings");
            return Settings::default();
        };

        let settings = match Settings::discover(&root) {
            Ok(Some(settings)) => {
                info!("Loaded settings from {}", root.display());
                settings
            }
            Ok(None) => Settings::default(),
            Err(e) => {
                warn!("Ignoring settings in {}: {}", root.display(), e);
                Settings::default()
            }
        };

        *self.settings.write().await = settings.clone();
        settings
    }
}

/// First workspace folder, else the (deprecated) root URI, as a local path
#[allow(deprecated)]
fn workspace_root(params: &InitializeParams) -> Option<PathBuf> {
    params
        .workspace_folders
        .as_ref()
        .and_then(|folders| folders.first())
        .map(|folder| &folder.uri)
        .or(params.root_uri.as_ref())
        .and_then(|uri| uri.to_file_path().ok())
}

/// LSP positions are `u32`; larger counts clamp to the maximum
fn to_lsp_index(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Range covering the whole text, with UTF-16 columns as LSP expects
pub fn full_document_range(text: &str) -> Range {
    let line = to_lsp_index(text.matches('\n').count());
    let last_line = text.rsplit('\n').next().unwrap_or_default();
    let character = to_lsp_index(last_line.encode_utf16().count());

    Range {
        start: Position::new(0, 0),
        end: Position::new(line, character),
    }
}

/// Convert a core folding range to its LSP form
pub fn to_lsp_folding_range(range: CoreFoldingRange) -> FoldingRange {
    FoldingRange {
        start_line: to_lsp_index(range.start_line),
        end_line: to_lsp_index(range.end_line),
        kind: Some(FoldingRangeKind::Region),
        start_character: None,
        end_character: None,
        collapsed_text: None,
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        info!("Liftoscript LSP server initializing");

        let settings = self.load_settings(&params).await;

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(
                    TextDocumentSyncKind::FULL,
                )),
                document_formatting_provider: settings
                    .format
                    .enabled
                    .then_some(OneOf::Left(true)),
                folding_range_provider: settings
                    .folding
                    .enabled
                    .then_some(FoldingRangeProviderCapability::Simple(true)),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: "liftoscript-lsp".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        info!("Liftoscript LSP server initialized");
        self.client
            .log_message(MessageType::INFO, "Liftoscript language server ready")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        info!("Liftoscript LSP server shutting down");
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        debug!("Document opened: {}", params.text_document.uri);
        self.store_document(params.text_document.uri, params.text_document.text)
            .await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        debug!("Document changed: {}", params.text_document.uri);
        // Since we use FULL sync, the entire content is in the first change
        if let Some(change) = params.content_changes.into_iter().next() {
            self.store_document(params.text_document.uri, change.text)
                .await;
        }
    }

    async fn did_save(&self, params: DidSaveTextDocumentParams) {
        debug!("Document saved: {}", params.text_document.uri);
        if let Some(text) = params.text {
            self.store_document(params.text_document.uri, text).await;
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        debug!("Document closed: {}", params.text_document.uri);
        self.remove_document(&params.text_document.uri).await;
    }

    async fn formatting(&self, params: DocumentFormattingParams) -> Result<Option<Vec<TextEdit>>> {
        let uri = params.text_document.uri;
        debug!("Formatting request for: {}", uri);

        let format_settings = self.settings.read().await.format;
        if !format_settings.enabled {
            return Ok(None);
        }

        let text = match self.get_document(&uri).await {
            Some(doc) => doc,
            None => {
                warn!("Document not found for formatting: {}", uri);
                return Ok(None);
            }
        };

        let formatted = Formatter::new(format_settings.options()).format(&text);
        if formatted == text {
            debug!("Document already formatted: {}", uri);
            return Ok(Some(Vec::new()));
        }

        Ok(Some(vec![TextEdit::new(full_document_range(&text), formatted)]))
    }

    async fn folding_range(&self, params: FoldingRangeParams) -> Result<Option<Vec<FoldingRange>>> {
        let uri = params.text_document.uri;
        debug!("Folding range request for: {}", uri);

        if !self.settings.read().await.folding.enabled {
            return Ok(None);
        }

        let text = match self.get_document(&uri).await {
            Some(doc) => doc,
            None => {
                warn!("Document not found for folding: {}", uri);
                return Ok(None);
            }
        };

        let ranges: Vec<FoldingRange> = FoldingAnalyzer::generate_ranges(&text)
            .into_iter()
            .map(to_lsp_folding_range)
            .collect();
        debug!("Generated {} folding ranges for {}", ranges.len(), uri);

        Ok(Some(ranges))
    }
}

/// Run the language server on stdin/stdout
pub async fn run_server() {
    // Logs go to stderr; stdout carries the protocol
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(
        "Starting Liftoscript Language Server v{}",
        env!("CARGO_PKG_VERSION")
    );

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(Backend::new);
    Server::new(stdin, stdout, socket).serve(service).await;
}

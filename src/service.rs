//! The end-to-end report flow used by the command line and by hosts.
//!
//! A request runs the numerology engine, asks the provider for a body
//! document, composes the branded PDF and stores it. When composing fails
//! the provider's own document URL is handed out instead.

use crate::composer::DocumentComposer;
use crate::config::ServiceConfig;
use crate::error::{ProviderError, ReportError};
use crate::fetch::HttpDocumentSource;
use crate::provider::ProviderClient;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use cosmic_numerology::{BirthDate, NumerologyReport, report_for};
use cosmic_render_lopdf::RenderingConfig;
use cosmic_resource::FilesystemResourceProvider;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRequest {
    pub name: String,
    pub gender: String,
    /// `DD-MM-YYYY`.
    pub dob: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "English".to_string()
}

/// How the report reached the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Delivery {
    /// The branded document was composed and stored.
    Composed,
    /// Composition failed; the URL points at the provider's document.
    RawFallback,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportOutcome {
    pub pdf_url: String,
    pub delivery: Delivery,
    pub report: NumerologyReport,
    #[serde(skip)]
    pub stored_path: Option<PathBuf>,
}

/// What hooks learn about a stored report.
#[derive(Debug, Clone)]
pub struct ReportEvent {
    pub request: ReportRequest,
    pub pdf_url: String,
    pub stored_path: PathBuf,
    pub generated_at: DateTime<Utc>,
}

pub type HookError = Box<dyn std::error::Error + Send + Sync>;

/// A best-effort side effect run after a report has been stored, such as
/// emailing it or recording it in an audit log.
#[async_trait]
pub trait ReportHook: Send + Sync {
    fn name(&self) -> &str;

    async fn on_report_ready(&self, event: &ReportEvent) -> Result<(), HookError>;
}

/// Logs every stored report.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingHook;

#[async_trait]
impl ReportHook for LoggingHook {
    fn name(&self) -> &str {
        "logging"
    }

    async fn on_report_ready(&self, event: &ReportEvent) -> Result<(), HookError> {
        log::info!(
            "Report for '{}' stored at {} ({}) at {}",
            event.request.name,
            event.stored_path.display(),
            event.pdf_url,
            event.generated_at.to_rfc3339()
        );
        Ok(())
    }
}

/// Produces the URL of a body document for one person.
#[async_trait]
pub trait BodyDocumentProvider: Send + Sync {
    async fn body_document_url(
        &self,
        name: &str,
        gender: &str,
        date: &BirthDate,
        language: &str,
    ) -> Result<String, ProviderError>;
}

#[async_trait]
impl BodyDocumentProvider for ProviderClient {
    async fn body_document_url(
        &self,
        name: &str,
        gender: &str,
        date: &BirthDate,
        language: &str,
    ) -> Result<String, ProviderError> {
        self.numerology_report_url(name, gender, date, language).await
    }
}

fn report_file_name() -> String {
    let id: u128 = rand::rng().random();
    format!("report_{:032x}.pdf", id)
}

pub struct ReportService {
    provider: Arc<dyn BodyDocumentProvider>,
    composer: Arc<DocumentComposer>,
    reports_dir: PathBuf,
    public_base_url: String,
    hooks: Vec<Arc<dyn ReportHook>>,
    pending_hooks: Mutex<Vec<JoinHandle<()>>>,
}

impl ReportService {
    pub fn new(
        config: &ServiceConfig,
        provider: Arc<dyn BodyDocumentProvider>,
        composer: Arc<DocumentComposer>,
    ) -> Self {
        Self {
            provider,
            composer,
            reports_dir: config.reports_dir.clone(),
            public_base_url: config.public_base_url.clone(),
            hooks: Vec::new(),
            pending_hooks: Mutex::new(Vec::new()),
        }
    }

    /// Wires the production collaborators: filesystem assets, the HTTP body
    /// source and the provider client.
    pub fn from_config(config: &ServiceConfig) -> Result<Self, ReportError> {
        let resources = Arc::new(FilesystemResourceProvider::new(&config.assets_dir));
        let rendering = Arc::new(RenderingConfig::resolve(&config.assets, resources));
        let source = HttpDocumentSource::new(config.fetch_timeout()).map_err(ProviderError::from)?;
        let composer = DocumentComposer::new(rendering, Arc::new(source))
            .with_trailing_pages(config.trailing_pages);
        let provider = ProviderClient::new(&config.provider)?;
        Ok(Self::new(config, Arc::new(provider), Arc::new(composer)))
    }

    pub fn with_hook(mut self, hook: Arc<dyn ReportHook>) -> Self {
        self.hooks.push(hook);
        self
    }

    pub fn reports_dir(&self) -> &Path {
        &self.reports_dir
    }

    pub async fn generate(&self, request: &ReportRequest) -> Result<ReportOutcome, ReportError> {
        let date = BirthDate::parse(&request.dob)?;
        let report = report_for(&request.name, &date)?;

        let body_url = self
            .provider
            .body_document_url(&request.name, &request.gender, &date, &request.language)
            .await?;

        match self.compose_and_store(&body_url, &request.name, &date).await {
            Ok(stored_path) => {
                let pdf_url = self.public_url(&stored_path);
                let event = ReportEvent {
                    request: request.clone(),
                    pdf_url: pdf_url.clone(),
                    stored_path: stored_path.clone(),
                    generated_at: Utc::now(),
                };
                self.dispatch_hooks(event);
                Ok(ReportOutcome {
                    pdf_url,
                    delivery: Delivery::Composed,
                    report,
                    stored_path: Some(stored_path),
                })
            }
            Err(e) => {
                log::error!(
                    "Composing report for '{}' failed, handing out {}: {}",
                    request.name,
                    body_url,
                    e
                );
                Ok(ReportOutcome {
                    pdf_url: body_url,
                    delivery: Delivery::RawFallback,
                    report,
                    stored_path: None,
                })
            }
        }
    }

    async fn compose_and_store(
        &self,
        body_url: &str,
        name: &str,
        date: &BirthDate,
    ) -> Result<PathBuf, ReportError> {
        let document = self.composer.compose(body_url, name, date).await?;
        tokio::fs::create_dir_all(&self.reports_dir).await?;
        let path = self.reports_dir.join(report_file_name());
        tokio::fs::write(&path, document.bytes()).await?;
        log::info!(
            "Stored {}-page report at {}",
            document.page_count(),
            path.display()
        );
        Ok(path)
    }

    fn public_url(&self, stored_path: &Path) -> String {
        let file_name = stored_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        format!("{}/{}", self.public_base_url.trim_end_matches('/'), file_name)
    }

    /// Runs every hook on its own task. Failures are logged and never
    /// reach the caller.
    fn dispatch_hooks(&self, event: ReportEvent) {
        let event = Arc::new(event);
        let handles = self.hooks.iter().map(|hook| {
            let hook = Arc::clone(hook);
            let event = Arc::clone(&event);
            tokio::spawn(async move {
                if let Err(e) = hook.on_report_ready(&event).await {
                    log::warn!("Report hook '{}' failed: {}", hook.name(), e);
                }
            })
        });
        let mut pending = match self.pending_hooks.lock() {
            Ok(pending) => pending,
            Err(poisoned) => poisoned.into_inner(),
        };
        pending.retain(|handle| !handle.is_finished());
        pending.extend(handles);
    }

    /// Hook tasks dispatched and not yet collected, finished or not.
    pub fn pending_hook_count(&self) -> usize {
        match self.pending_hooks.lock() {
            Ok(pending) => pending.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    /// Waits for every hook dispatched so far. Generation never waits for
    /// hooks; hosts that are about to exit call this.
    pub async fn wait_for_hooks(&self) {
        let handles = match self.pending_hooks.lock() {
            Ok(mut pending) => std::mem::take(&mut *pending),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        };
        for handle in handles {
            if let Err(e) = handle.await {
                log::warn!("Report hook task did not complete: {}", e);
            }
        }
    }
}

//! Numerology reports wrapped in branded cover and closing pages.
//!
//! The numbers come from [`cosmic_numerology`]; the body of the PDF comes
//! from an external provider and is merged between a synthesized cover and
//! closing page by the [`DocumentComposer`].

pub mod composer;
pub mod config;
pub mod error;
pub mod fetch;
pub mod provider;
pub mod service;

pub use composer::{ComposedDocument, DocumentComposer, retained_pages};
pub use config::{ProviderConfig, ServiceConfig};
pub use error::{ComposeError, ProviderError, ReportError};
pub use fetch::HttpDocumentSource;
pub use provider::{ProviderClient, language_code};
pub use service::{
    BodyDocumentProvider, Delivery, HookError, LoggingHook, ReportEvent, ReportHook,
    ReportOutcome, ReportRequest, ReportService,
};

pub use cosmic_numerology as numerology;
pub use cosmic_render_lopdf as render;
pub use cosmic_traits as traits;

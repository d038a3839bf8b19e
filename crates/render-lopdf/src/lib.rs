//! Cover and closing page synthesis using lopdf.
//!
//! Pages are drawn on a [`PageCanvas`] and returned as single-page
//! [`PageBuffer`]s, ready to be copied into a composed document.

mod background;
mod canvas;
mod config;
mod error;
mod fonts;
mod page;
mod synthesizer;

pub use background::ImageXObject;
pub use canvas::{PageCanvas, TextStyle};
pub use config::{AssetConfig, Branding, PageSize, RenderingConfig, Rgb};
pub use error::RenderError;
pub use page::PageBuffer;
pub use synthesizer::PageSynthesizer;

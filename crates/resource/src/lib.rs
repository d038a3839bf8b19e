//! Asset providers for the report pipeline.
//!
//! - [`FilesystemResourceProvider`]: assets below a base directory
//! - [`InMemoryResourceProvider`]: re-exported from `cosmic-traits`

mod filesystem;

pub use filesystem::FilesystemResourceProvider;

pub use cosmic_traits::InMemoryResourceProvider;

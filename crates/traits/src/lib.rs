pub mod resource;
pub mod source;

pub use resource::{InMemoryResourceProvider, ResourceError, ResourceProvider, SharedResourceData};
pub use source::{DocumentSource, RetrievalError, StaticDocumentSource};

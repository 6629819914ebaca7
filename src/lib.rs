pub mod config;
pub mod document;
pub mod fetcher;
pub mod inliner;
pub mod utils;

pub use config::MirrorConfig;
pub use document::Document;
pub use fetcher::{BinaryResource, FetchError, Fetcher};
pub use inliner::{
    InliningError, InliningReport, InliningResult, ResourceType, inline_document, mirror_page,
};

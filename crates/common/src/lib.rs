pub mod config;
pub mod error;
pub mod fetcher;

pub use config::Config;
pub use error::{GamethreadError, GamethreadResult};
pub use fetcher::{Page, PageFetcher};

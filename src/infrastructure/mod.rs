pub mod config;
pub mod console;
pub mod http;

pub use config::ProviderConfig;
pub use console::{BrowserTimeProvider, ConsoleLogger};
pub use http::FmpHttpClient;

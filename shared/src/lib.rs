pub mod auth;
pub mod effects;
pub mod environment;
pub mod error;
pub mod format;
pub mod notification;
pub mod page;
pub mod tooltip;

// Re-export commonly used items
pub use error::{Result, UiError};
pub use environment::{resolve_base_url, EnvironmentConfig, HostContext};
pub use notification::{Phase, Severity};
pub use page::Page;

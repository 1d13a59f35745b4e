pub mod catalog;
pub mod config;
pub mod error;
pub mod resolver;
pub mod types;

pub use catalog::Catalog;
pub use config::parse_site_toml;
pub use error::{Error, Result};
pub use resolver::{PageResolver, RenderResult};
pub use types::*;

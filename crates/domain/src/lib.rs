//! wirelookup domain layer
pub mod config;
pub mod domain_name;
pub mod errors;
pub mod resolution;

pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, ResolverConfig};
pub use domain_name::DomainName;
pub use errors::DomainError;
pub use resolution::{ErrorKind, ResolutionResult};

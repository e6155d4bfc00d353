//! Static strategy pattern for CLI commands.
//!
//! Each sub-command is its own strategy type with its own input type, so
//! dispatch in `main` is static.

use lexscan_config::Config;
use lexscan_patterns::ExtractorRegistry;
use tracing::info;

mod init;
mod list;
mod scan;
mod version;

/// Built-in extractors plus the custom patterns from `config`.
fn build_registry(config: &Config) -> anyhow::Result<ExtractorRegistry> {
    let mut registry = ExtractorRegistry::with_builtins();
    for def in &config.extractors.custom {
        registry
            .register_pattern(def)
            .map_err(|e| anyhow::anyhow!("Custom pattern `{}` rejected: {e}", def.name))?;
    }
    info!("Extractor registry ready: {} extractors", registry.len());
    Ok(registry)
}

pub use init::InitStrategy;
pub use list::ListStrategy;
pub use scan::{ScanInput, ScanStrategy};
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
///
/// Adding a command means adding a strategy type and one match arm in `main`.
pub trait CommandStrategy {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

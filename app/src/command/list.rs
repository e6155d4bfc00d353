use lexscan_config::Config;

use super::build_registry;

/// Strategy for listing the registered extractors.
///
/// Prints one `name<TAB>label<TAB>matcher` line per extractor, including the
/// custom patterns from the config file.
#[derive(Debug, Clone, Copy)]
pub struct ListStrategy;

impl super::CommandStrategy for ListStrategy {
    type Input = ();

    fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load_or_default()?;
        let registry = build_registry(&config)?;

        for name in registry.names() {
            if let Some(extractor) = registry.get(&name) {
                println!(
                    "{name}\t{}\t{}",
                    extractor.label(),
                    extractor.matcher().describe()
                );
            }
        }
        Ok(())
    }
}

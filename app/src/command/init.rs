use lexscan_config::Config;

/// Strategy for initializing the configuration.
///
/// Creates the default configuration file at `~/lexscan/config.json`.
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl super::CommandStrategy for InitStrategy {
    type Input = ();

    fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        Config::create_config().map(|_| ())
    }
}

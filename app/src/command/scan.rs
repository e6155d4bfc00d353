//! Scan text from an argument, a file or stdin and print the matches.

use std::io::Read;
use std::path::PathBuf;

use lexscan_config::{Config, OutputFormat};
use lexscan_core::{Match, ScanStats, Scanner};
use tracing::{debug, info};

use super::build_registry;

/// Input parameters for the Scan command strategy.
#[derive(Debug, Clone, Default)]
pub struct ScanInput {
    /// Text to scan; takes precedence over `file`.
    pub text: Option<String>,
    /// File to read the text from; stdin when neither is given.
    pub file: Option<PathBuf>,
    /// Extractor names, highest priority first; config default when empty.
    pub extractors: Vec<String>,
    /// Force JSON output regardless of config.
    pub json: bool,
    /// Print scan counters to stderr.
    pub stats: bool,
}

/// Strategy for executing the Scan command.
#[derive(Debug, Clone, Copy)]
pub struct ScanStrategy;

impl super::CommandStrategy for ScanStrategy {
    type Input = ScanInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load_or_default()?;
        let registry = build_registry(&config)?;

        let names = if input.extractors.is_empty() {
            config.extractors.default_order.clone()
        } else {
            input.extractors.clone()
        };
        let scanner = Scanner::new(registry.resolve(&names)?);
        info!("Scanning with extractors: {}", names.join(", "));

        let text = read_text(&input)?;
        debug!("Read {} bytes of input", text.len());

        let report = scanner.scan_with_stats(&text);

        let format = if input.json {
            OutputFormat::Json
        } else {
            config.output.format
        };
        match format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report.matches)?),
            OutputFormat::Text => print!("{}", render_text(&report.matches)),
        }

        if input.stats {
            eprintln!("{}", render_stats(&report.stats));
        }

        Ok(())
    }
}

fn read_text(input: &ScanInput) -> anyhow::Result<String> {
    if let Some(text) = &input.text {
        return Ok(text.clone());
    }
    if let Some(path) = &input.file {
        return std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {}: {e}", path.display()));
    }

    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    Ok(text)
}

/// One `label<TAB>start..end<TAB>text` line per match.
fn render_text(matches: &[Match]) -> String {
    matches
        .iter()
        .map(|m| format!("{}\t{}\t{}\n", m.label, m.span, m.text.escape_debug()))
        .collect()
}

fn render_stats(stats: &ScanStats) -> String {
    format!(
        "extractors: {}, candidates: {}, accepted: {}, dropped: {}",
        stats.extractors, stats.candidates, stats.accepted, stats.dropped
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexscan_core::scan;
    use lexscan_patterns::{integers, mixed_ordinals};

    #[test]
    fn test_render_text() {
        let matches = scan("the 5th of 12", &[mixed_ordinals(), integers()]);
        assert_eq!(render_text(&matches), "ordinal\t4..7\t5th\ninteger\t11..13\t12\n");
        assert_eq!(render_text(&[]), "");
    }

    #[test]
    fn test_render_text_escapes_line_breaks() {
        let matches = scan("21\nFeb 2013", &[lexscan_patterns::dates_string_month()]);
        assert_eq!(render_text(&matches), "date_string_month\t0..11\t21\\nFeb 2013\n");
    }

    #[test]
    fn test_render_stats() {
        let stats = ScanStats {
            extractors: 2,
            candidates: 3,
            accepted: 2,
            dropped: 1,
        };
        assert_eq!(
            render_stats(&stats),
            "extractors: 2, candidates: 3, accepted: 2, dropped: 1"
        );
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_read_text_prefers_argument() {
        let input = ScanInput {
            text: Some("inline".to_string()),
            file: Some(PathBuf::from("/nonexistent/lexscan-input.txt")),
            ..ScanInput::default()
        };
        assert_eq!(read_text(&input).expect("inline text should be used"), "inline");
    }

    #[test]
    fn test_read_text_missing_file() {
        let input = ScanInput {
            file: Some(PathBuf::from("/nonexistent/lexscan-input.txt")),
            ..ScanInput::default()
        };
        assert!(read_text(&input).is_err());
    }
}

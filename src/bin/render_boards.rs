//! Renders the built-in boards to PNG files in the working directory.
//!
//! Log output follows `RUST_LOG`; without it, WARN overall and INFO for boardviz.

use boardviz::render::BoardJob;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG: &str = "warn,boardviz=info";

/// Filter from `RUST_LOG` when it parses, the default directives otherwise.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG))
}

fn main() -> boardviz::Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref()))
        .init();

    for job in BoardJob::all() {
        job.run()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::filter::LevelFilter;

    use super::*;

    #[test]
    fn rust_log_wins_over_default() {
        let filter = log_filter(Some("boardviz=debug"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
        assert!(!filter.to_string().contains("warn"));
    }

    #[test]
    fn default_without_rust_log() {
        let filter = log_filter(None);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
        assert!(filter.to_string().contains("boardviz=info"));
    }

    #[test]
    fn unparsable_rust_log_falls_back() {
        let filter = log_filter(Some("boardviz=loud"));
        assert!(filter.to_string().contains("boardviz=info"));
    }
}

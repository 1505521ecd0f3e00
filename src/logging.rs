use crate::{Error, Result, config::Config};
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins over `server.logs.level`.
pub fn directives(config: &Config) -> String {
    std::env::var("RUST_LOG").unwrap_or_else(|_| config.server.logs.level.clone())
}

/// Parses a full `EnvFilter` directive list such as `predictimmo=debug,tower_http=trace`.
pub fn env_filter(directives: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directives).map_err(|e| Error::LogFilter {
        directives: directives.to_string(),
        reason: e.to_string(),
    })
}

pub fn init(filter: EnvFilter) {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("info")]
    #[case("debug")]
    #[case("predictimmo=debug,tower_http=trace")]
    #[case("warn,predictimmo::server=trace")]
    fn test_env_filter_accepts_directives(#[case] directives: &str) {
        assert!(env_filter(directives).is_ok());
    }

    #[rstest]
    #[case("predictimmo=loud")]
    #[case("tower_http=verbose,info")]
    fn test_env_filter_rejects_bad_level(#[case] directives: &str) {
        let err = env_filter(directives).unwrap_err();
        assert!(matches!(err, Error::LogFilter { .. }));
        assert!(err.to_string().contains(directives));
    }
}

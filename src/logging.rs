//! Logging setup
//!
//! The library only talks to the `log` facade. Binaries call [`init`] once to
//! route records to stderr through `env_logger`; `RUST_LOG` still wins over the
//! verbosity flag.

use log::LevelFilter;

/// Map a `-v` count to a level filter
///
/// # Examples
/// ```
/// use log::LevelFilter;
/// use wordle_solver::logging::level_for_verbosity;
///
/// assert_eq!(level_for_verbosity(0), LevelFilter::Warn);
/// assert_eq!(level_for_verbosity(2), LevelFilter::Debug);
/// ```
#[must_use]
pub const fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialise the global logger
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(verbosity: u8) {
    let _ = env_logger::Builder::new()
        .filter_level(level_for_verbosity(verbosity))
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_saturates_at_trace() {
        assert_eq!(level_for_verbosity(1), LevelFilter::Info);
        assert_eq!(level_for_verbosity(3), LevelFilter::Trace);
        assert_eq!(level_for_verbosity(u8::MAX), LevelFilter::Trace);
    }

    #[test]
    fn init_twice_does_not_panic() {
        init(0);
        init(2);
    }
}

use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Installs a colored terminal logger writing to stderr. Calling it again is harmless:
/// the first logger stays and only the maximal level is updated.
pub fn init_logger(level: LevelFilter) {
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Debug)
        .build();
    if TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto).is_err() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice() {
        init_logger(LevelFilter::Warn);
        init_logger(LevelFilter::Debug);
        assert_eq!(log::max_level(), LevelFilter::Debug);
        log::debug!("logger is up");
    }
}

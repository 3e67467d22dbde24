/// Terminal logger for the binary; libraries only emit through the `log` facade.
pub mod logger;

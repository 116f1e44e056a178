//! Journalisation du bot.
//!
//! Un logger minimaliste branché sur la façade [`log`]. Seuls les messages émis avec la cible
//! du bot (voir les macros `log_*!`) sont affichés, ce qui coupe le bruit de serenity et tokio.

use log::{Record, Level, Metadata, LevelFilter, SetLoggerError};

/// Cible utilisée par toutes les macros de journalisation du bot.
pub const TARGET: &str = "monokuma";
/// Variable d'environnement qui remplace le niveau par défaut.
pub const LEVEL_VAR: &str = "MONOKUMA_LOG";

#[macro_use]
pub mod macros {
    #[doc(alias = "log::error")]
    #[macro_export]
    macro_rules! log_error {
        ($($arg:tt)*) => {
            ::log::error!(target: $crate::log::TARGET, $($arg)*)
        };
    }
    #[doc(alias = "log::warn")]
    #[macro_export]
    macro_rules! log_warn {
        ($($arg:tt)*) => {
            ::log::warn!(target: $crate::log::TARGET, $($arg)*)
        };
    }
    #[doc(alias = "log::info")]
    #[macro_export]
    macro_rules! log_info {
        ($($arg:tt)*) => {
            ::log::info!(target: $crate::log::TARGET, $($arg)*)
        };
    }
    #[doc(alias = "log::debug")]
    #[macro_export]
    macro_rules! log_debug {
        ($($arg:tt)*) => {
            ::log::debug!(target: $crate::log::TARGET, $($arg)*)
        };
    }
}

struct SimpleLogger;

impl log::Log for SimpleLogger {
    #[inline]
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.target() == TARGET && metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("[{}] [{}] {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.args()
        );
        match record.level() {
            Level::Error | Level::Warn => eprintln!("{}", line),
            _ => println!("{}", line),
        }
    }
    #[inline]
    fn flush(&self) {}
}

static LOGGER: SimpleLogger = SimpleLogger;

/// Niveau par défaut : tout en debug, avertissements et erreurs seulement en release.
fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) { LevelFilter::Trace } else { LevelFilter::Warn }
}

/// Interprète la valeur de [`LEVEL_VAR`]. Une valeur inconnue est ignorée.
pub fn parse_level(value: &str) -> Option<LevelFilter> {
    value.trim().parse::<LevelFilter>().ok()
}

pub fn init() -> Result<(), SetLoggerError> {
    let level = std::env::var(LEVEL_VAR)
        .ok()
        .and_then(|v| parse_level(&v))
        .unwrap_or_else(default_level);
    log::set_logger(&LOGGER)
        .map(|_| log::set_max_level(level))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_from_env_value() {
        assert_eq!(parse_level("info"), Some(LevelFilter::Info));
        assert_eq!(parse_level(" WARN "), Some(LevelFilter::Warn));
        assert_eq!(parse_level("bavard"), None);
    }
}

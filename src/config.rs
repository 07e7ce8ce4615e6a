use std::io::ErrorKind;
use std::path::PathBuf;
use std::{fs, io};

use serde::Deserialize;

/// Runtime configuration. The catalog itself is compiled into the binary,
/// so the only tunable concern is logging.
#[derive(Deserialize)]
pub struct Config {
    pub log: Option<Log>,
}

#[derive(Deserialize)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Copy, Clone)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

pub fn read_config(cfg_path: &PathBuf) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.to_str().unwrap(), e))),
    };

    let cfg: Config = match toml::from_str::<Config>(cfg_content.as_str()) {
        Ok(cfg) => cfg,
        Err(e) => return Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    };

    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let cfg: Config = toml::from_str(r#"
            [log]
            level = "Info"
            log_to_console = true
        "#).unwrap();
        let log = cfg.log.unwrap();
        assert!(log.log_to_console);
        assert!(log.location.is_none());
        assert!(matches!(log.level, LogLevel::Info));
    }

    #[test]
    fn test_log_section_is_optional() {
        let cfg: Config = toml::from_str("").unwrap();
        assert!(cfg.log.is_none());
    }
}

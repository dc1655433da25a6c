use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use serde::Deserialize;
use soundbar::{SessionMode, SoundbarConfig};

pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 10;
pub const DEFAULT_LOG_FILE: &str = "soundbar-cli.log";

/// Command-line flags. Any flag given here wins over the config file.
#[derive(Debug, Default, Parser)]
#[command(name = "soundbar-cli", version, about = "Control a Samsung soundbar from the terminal")]
pub struct Args {
    /// IP address or hostname of the soundbar
    #[arg(long)]
    pub host: Option<String>,

    /// UIC port
    #[arg(long)]
    pub port: Option<u16>,

    /// Display name
    #[arg(long)]
    pub name: Option<String>,

    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Build a new HTTP client for every request
    #[arg(long)]
    pub per_request_session: bool,

    /// Seconds between polls
    #[arg(long)]
    pub poll_interval: Option<u64>,

    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Layout of the optional TOML file:
///
/// ```toml
/// poll_interval_secs = 5
/// log_file = "/tmp/soundbar.log"
///
/// [soundbar]
/// host = "192.168.1.50"
/// session = "per_request"
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub soundbar: Option<SoundbarConfig>,
    pub poll_interval_secs: Option<u64>,
    pub log_file: Option<PathBuf>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(ConfigError::Parse)
    }
}

/// Fully resolved settings for one run of the app
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub soundbar: SoundbarConfig,
    pub poll_interval: Duration,
    pub log_file: PathBuf,
}

#[derive(Debug)]
pub enum ConfigError {
    Read(PathBuf, io::Error),
    Parse(toml::de::Error),
    MissingHost,
    InvalidValue(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Read(path, err) => {
                write!(f, "Could not read config file {}: {}", path.display(), err)
            }
            ConfigError::Parse(err) => {
                write!(f, "Invalid config file: {}", err)
            }
            ConfigError::MissingHost => {
                write!(f, "No soundbar host given; pass --host or set [soundbar] host in the config file")
            }
            ConfigError::InvalidValue(msg) => {
                write!(f, "Invalid setting: {}", msg)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Reads the config file named by `--config` (if any) and overlays the flags
pub fn resolve(args: &Args) -> Result<AppConfig, ConfigError> {
    let file = match &args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };

    merge(args, file)
}

pub fn merge(args: &Args, file: FileConfig) -> Result<AppConfig, ConfigError> {
    let mut soundbar = match (&args.host, file.soundbar) {
        (Some(host), Some(section)) => SoundbarConfig { host: host.clone(), ..section },
        (Some(host), None) => SoundbarConfig::new(host.clone()),
        (None, Some(section)) => section,
        (None, None) => return Err(ConfigError::MissingHost),
    };

    if soundbar.host.trim().is_empty() {
        return Err(ConfigError::MissingHost);
    }

    if let Some(port) = args.port {
        soundbar.port = port;
    }
    if let Some(name) = &args.name {
        soundbar.name = name.clone();
    }
    if let Some(secs) = args.timeout {
        soundbar = soundbar.with_timeout(Duration::from_secs(secs));
    }
    if args.per_request_session {
        soundbar.session = SessionMode::PerRequest;
    }

    if soundbar.timeout_ms == 0 {
        return Err(ConfigError::InvalidValue("timeout must be greater than zero".to_string()));
    }

    let poll_secs = args
        .poll_interval
        .or(file.poll_interval_secs)
        .unwrap_or(DEFAULT_POLL_INTERVAL_SECS);
    if poll_secs == 0 {
        return Err(ConfigError::InvalidValue("poll interval must be greater than zero".to_string()));
    }

    let log_file = args
        .log_file
        .clone()
        .or(file.log_file)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    Ok(AppConfig {
        soundbar,
        poll_interval: Duration::from_secs(poll_secs),
        log_file,
    })
}

use crate::error::Error;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_CONFIG_PATH: &str = "/usr/local/etc/FCMSubmit.conf";
const CONFIG_FILE_NAME: &str = "FCMSubmit.conf";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub token: String,
    pub sender_id: String,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, Error> {
        debug!(path = %path.display(), "reading configuration file");

        let contents = fs::read(path).map_err(|e| Error::ConfigOpen(path.to_path_buf(), e))?;

        Self::parse(&contents, path)
    }

    /// Parses `token=` / `senderID=` lines. Comments (`#`) and blank lines are
    /// skipped, unknown lines are ignored and a repeated key overwrites the
    /// previous value. Only the two values need to be UTF-8; invalid bytes in
    /// them are replaced.
    pub fn parse(contents: &[u8], path: &Path) -> Result<Self, Error> {
        let mut token = None;
        let mut sender_id = None;

        for line in contents.split(|&b| b == b'\n') {
            let line = line.strip_suffix(b"\r").unwrap_or(line);
            if line.is_empty() || line[0] == b'#' {
                continue;
            }

            if let Some(value) = keyword_value(line, "token=") {
                debug!("API token : '{}'", value);
                token = Some(value);
            } else if let Some(value) = keyword_value(line, "senderID=") {
                debug!("senderID : '{}'", value);
                sender_id = Some(value);
            }
        }

        let token = token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| Error::MissingParameter(path.to_path_buf(), "token"))?;
        let sender_id = sender_id
            .filter(|s| !s.is_empty())
            .ok_or_else(|| Error::MissingParameter(path.to_path_buf(), "senderID"))?;

        Ok(Self { token, sender_id })
    }

    /// The per-user file wins over the system one when it exists.
    pub fn default_path() -> PathBuf {
        Self::user_config_path()
            .filter(|path| path.exists())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    fn user_config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "fcm_submit", "fcm_submit")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}

fn keyword_value(line: &[u8], keyword: &str) -> Option<String> {
    line.get(..keyword.len())
        .filter(|prefix| prefix.eq_ignore_ascii_case(keyword.as_bytes()))
        .map(|_| String::from_utf8_lossy(&line[keyword.len()..]).into_owned())
}

use crate::cli::Cli;
use crate::config::Config;
use crate::error::Error;
use clap::ValueEnum;
use serde::Serialize;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Presentation {
    /// Stays on top of other notifications
    Sticky,
    /// Cannot be dismissed
    Locked,
}

/// Everything needed for one dispatch, resolved once from the configuration
/// file and the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    pub token: String,
    pub sender_id: String,
    pub title: String,
    pub message: Option<String>,
    pub source: Option<String>,
    pub priority: i64,
    pub speak: Option<bool>,
    pub notify: Option<bool>,
    pub presentation: Option<Presentation>,
}

impl NotificationRequest {
    pub fn resolve(config: Config, cli: &Cli) -> Result<Self, Error> {
        let title = non_empty(cli.title.as_deref()).ok_or(Error::TitleMissing)?;

        let request = Self {
            token: config.token,
            sender_id: config.sender_id,
            title,
            message: non_empty(cli.message.as_deref()),
            source: non_empty(cli.source.as_deref()),
            priority: cli.priority.as_deref().map_or(0, parse_priority),
            speak: cli.speak.map(bool::from),
            notify: cli.notify.map(bool::from),
            presentation: cli.presentation,
        };

        debug!("Title : '{}'", request.title);
        if let Some(message) = &request.message {
            debug!("Message : '{}'", message);
        }
        if let Some(source) = &request.source {
            debug!("Source : '{}'", source);
        }
        debug!("Priority : {}", request.priority);
        debug!(speak = ?request.speak, notify = ?request.notify, presentation = ?request.presentation, "Flags");

        Ok(request)
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

/// Best effort integer parsing: leading whitespace, an optional sign and the
/// leading digits are used, anything else yields 0.
pub fn parse_priority(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        warn!("unparsable priority '{}', using 0", raw);
        return 0;
    }

    let magnitude = rest[..digits_len].bytes().fold(0i64, |acc, digit| {
        acc.saturating_mul(10).saturating_add(i64::from(digit - b'0'))
    });

    if digits_len != rest.len() {
        warn!("trailing characters ignored in priority '{}'", raw);
    }

    if negative { magnitude.saturating_neg() } else { magnitude }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::YesNo;
    use clap::Parser;

    fn config() -> Config {
        Config {
            token: "abc123".to_string(),
            sender_id: "dev-xyz".to_string(),
        }
    }

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("fcm_submit").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_resolve_defaults() {
        let request = NotificationRequest::resolve(config(), &cli(&["-t", "Hello"])).unwrap();

        assert_eq!(request.token, "abc123");
        assert_eq!(request.sender_id, "dev-xyz");
        assert_eq!(request.title, "Hello");
        assert_eq!(request.message, None);
        assert_eq!(request.source, None);
        assert_eq!(request.priority, 0);
        assert_eq!(request.speak, None);
        assert_eq!(request.notify, None);
        assert_eq!(request.presentation, None);
    }

    #[test]
    fn test_resolve_all_fields() {
        let args = cli(&[
            "-t", "Hello", "-m", "World", "-s", "backup", "-p", "1", "-k", "YES", "-n", "No", "-a",
            "locked",
        ]);
        let request = NotificationRequest::resolve(config(), &args).unwrap();

        assert_eq!(request.message.as_deref(), Some("World"));
        assert_eq!(request.source.as_deref(), Some("backup"));
        assert_eq!(request.priority, 1);
        assert_eq!(request.speak, Some(true));
        assert_eq!(request.notify, Some(false));
        assert_eq!(request.presentation, Some(Presentation::Locked));
    }

    #[test]
    fn test_notify_and_presentation_are_independent() {
        let request =
            NotificationRequest::resolve(config(), &cli(&["-t", "x", "-n", "yes", "-a", "sticky"]))
                .unwrap();
        assert_eq!(request.notify, Some(true));
        assert_eq!(request.presentation, Some(Presentation::Sticky));

        let request =
            NotificationRequest::resolve(config(), &cli(&["-t", "x", "-a", "sticky", "-n", "no"]))
                .unwrap();
        assert_eq!(request.notify, Some(false));
        assert_eq!(request.presentation, Some(Presentation::Sticky));
    }

    #[test]
    fn test_title_missing() {
        let result = NotificationRequest::resolve(config(), &cli(&["-m", "World"]));
        assert!(matches!(result, Err(Error::TitleMissing)));

        let result = NotificationRequest::resolve(config(), &cli(&["-t", ""]));
        assert!(matches!(result, Err(Error::TitleMissing)));
    }

    #[test]
    fn test_empty_message_is_absent() {
        let request = NotificationRequest::resolve(config(), &cli(&["-t", "x", "-m", ""])).unwrap();
        assert_eq!(request.message, None);
    }

    #[test]
    fn test_speak_from_cli_value() {
        let mut args = cli(&["-t", "x"]);
        args.speak = Some(YesNo::No);
        let request = NotificationRequest::resolve(config(), &args).unwrap();
        assert_eq!(request.speak, Some(false));
    }

    #[test]
    fn test_parse_priority() {
        assert_eq!(parse_priority("1"), 1);
        assert_eq!(parse_priority("-512"), -512);
        assert_eq!(parse_priority("+3"), 3);
        assert_eq!(parse_priority("  2"), 2);
        assert_eq!(parse_priority("12abc"), 12);
        assert_eq!(parse_priority("high"), 0);
        assert_eq!(parse_priority(""), 0);
        assert_eq!(parse_priority("-"), 0);
        assert_eq!(parse_priority("99999999999999999999999"), i64::MAX);
    }
}

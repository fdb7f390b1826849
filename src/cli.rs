use crate::request::Presentation;
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Submit Firebase Cloud Messaging notification",
    long_about = None,
    disable_help_flag = true
)]
pub struct Cli {
    /// Print this help and exit
    #[arg(short = 'h', long, action = ArgAction::SetTrue)]
    pub help: bool,

    /// Enable verbose messages
    #[arg(short, long)]
    pub verbose: bool,

    /// Read <file> for configuration
    #[arg(short = 'f', long = "config", value_name = "file")]
    pub config: Option<PathBuf>,

    /// Notification title
    #[arg(short, long, allow_hyphen_values = true)]
    pub title: Option<String>,

    /// Notification body
    #[arg(short, long, allow_hyphen_values = true)]
    pub message: Option<String>,

    /// Origin of the notification
    #[arg(short, long, allow_hyphen_values = true)]
    pub source: Option<String>,

    /// Priority, conventionally between -512 and 3
    #[arg(short, long, allow_hyphen_values = true)]
    pub priority: Option<String>,

    /// Force speech on the receiving device
    #[arg(short = 'k', long, value_enum, ignore_case = true)]
    pub speak: Option<YesNo>,

    /// Force the notification to be shown
    #[arg(short, long, value_enum, ignore_case = true)]
    pub notify: Option<YesNo>,

    /// Presentation mode
    #[arg(short = 'a', long, value_enum, ignore_case = true)]
    pub presentation: Option<Presentation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum YesNo {
    Yes,
    No,
}

impl From<YesNo> for bool {
    fn from(value: YesNo) -> Self {
        value == YesNo::Yes
    }
}

//! Configuration and CLI argument handling

use std::ffi::OsString;

use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use terminal_size::{terminal_size, Width};

use crate::{
    duration::parse_duration,
    error::DurationError,
    state::{Mode, Timer},
};

pub const MIN_BAR_WIDTH: usize = 20;
pub const MAX_BAR_WIDTH: usize = 80;
/// Width used when stdout is not a terminal
pub const FALLBACK_BAR_WIDTH: usize = 40;
/// Columns kept free for the time, percentage and icons
const LINE_OVERHEAD: usize = 24;

const EXAMPLES: &str = "\
Examples:
  pomo 30       # 30 minutes work timer
  pomo 30m      # 30 minutes work timer
  pomo 30s      # 30 seconds work timer
  pomo rest     # 15 minute break timer
  pomo rest 5m  # 5 minute break timer
Default: 45 minutes work timer";

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "pomo")]
#[command(about = "A Pomodoro countdown timer with a progress bar and desktop notifications")]
#[command(version)]
#[command(after_help = EXAMPLES)]
pub struct Config {
    /// Work duration: <integer>[s|m], minutes when no unit is given
    pub duration: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,

    /// Progress bar width in cells, clamped to 20..=80 [default: fits the terminal]
    #[arg(short, long, global = true)]
    pub width: Option<usize>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start a break timer (15 minutes by default)
    Rest {
        /// Break duration: <integer>[s|m], minutes when no unit is given
        duration: Option<String>,
    },
}

impl Config {
    /// Parse configuration from command line arguments.
    ///
    /// Help and version exit 0, any other argument error exits 1.
    pub fn parse() -> Self {
        match Self::try_parse_args(std::env::args_os()) {
            Ok(config) => config,
            Err(e) => match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
                _ => {
                    let _ = e.print();
                    std::process::exit(1);
                }
            },
        }
    }

    /// Parse and validate arguments without exiting on error
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(args)?.validated()
    }

    /// Reject a work duration given together with the `rest` subcommand
    fn validated(self) -> Result<Self, clap::Error> {
        if let (Some(duration), Some(Command::Rest { .. })) = (&self.duration, &self.command) {
            let mut cmd = <Self as CommandFactory>::command();
            return Err(cmd.error(
                ErrorKind::ArgumentConflict,
                format!(
                    "duration '{}' cannot be combined with 'rest'; use 'pomo rest {}'",
                    duration, duration
                ),
            ));
        }
        Ok(self)
    }

    /// Session mode and the raw duration token, if one was given
    pub fn request(&self) -> (Mode, Option<&str>) {
        match &self.command {
            Some(Command::Rest { duration }) => (Mode::Rest, duration.as_deref()),
            None => (Mode::Work, self.duration.as_deref()),
        }
    }

    /// Build the timer described by the arguments
    pub fn timer(&self) -> Result<Timer, DurationError> {
        let (mode, token) = self.request();
        match token {
            Some(token) => Timer::new(mode, parse_duration(token)?, token),
            None => {
                let seconds = mode.default_seconds();
                Timer::new(mode, seconds, &seconds.to_string())
            }
        }
    }

    /// Progress bar width: `--width` if given, otherwise sized to the terminal
    pub fn bar_width(&self) -> usize {
        match self.width {
            Some(width) => width.clamp(MIN_BAR_WIDTH, MAX_BAR_WIDTH),
            None => bar_width_for_columns(terminal_size().map(|(Width(w), _)| w)),
        }
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}

/// Bar width for a terminal `columns` wide, or the fallback when unknown
pub fn bar_width_for_columns(columns: Option<u16>) -> usize {
    match columns {
        Some(columns) => {
            (columns as usize)
                .saturating_sub(LINE_OVERHEAD)
                .clamp(MIN_BAR_WIDTH, MAX_BAR_WIDTH)
        }
        None => FALLBACK_BAR_WIDTH,
    }
}

//! Command line definitions.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

use autocue::player::MediaType;
use autocue::sync::{BorderPolicy, ContextLines, SessionOptions};

#[derive(Parser, Debug)]
#[command(name = "autocue")]
#[command(version)]
#[command(about = "Play a time-aligned transcript in sync with its media")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play a transcript in the terminal autocue
    #[command(long_about = "Play a transcript against a simulated media clock.\n\n\
        The spoken line is highlighted as time passes. Playback stays inside the\n\
        selected line window and rewinds to its start when it runs past the end.\n\n\
        KEYS:\n  \
        space      pause / resume\n  \
        [ ]        move window start\n  \
        { }        move window end\n  \
        j k        move line cursor\n  \
        i          inspect line under cursor\n  \
        + -        playback speed\n  \
        ?          help\n  \
        q          quit")]
    Play(PlayArgs),

    /// Print the window and per-line highlights of a transcript
    #[command(long_about = "Print the window and per-line highlights of a transcript.\n\n\
        With --ticks, each time is fed to the session as a player time update and\n\
        the resulting outcome and player commands are printed.\n\n\
        EXAMPLE:\n  \
        autocue inspect kristiansand_01.json --ticks 2.5 9.1")]
    Inspect(InspectArgs),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Options shared by every command that mounts a session.
#[derive(Args, Debug)]
pub struct SessionArgs {
    /// Transcript descriptor (JSON)
    pub file: PathBuf,

    /// Lines shown around the requested span: "all", "none" or a count
    #[arg(short, long, value_name = "all|N")]
    pub context: Option<ContextLines>,

    /// Window the dimmed edge lines follow: "initial" or "live"
    #[arg(long, value_name = "POLICY")]
    pub border_policy: Option<BorderPolicy>,

    /// Media kind to resolve sources for: "audio" or "video"
    #[arg(long, value_name = "TYPE")]
    pub media_type: Option<MediaType>,
}

impl SessionArgs {
    /// Apply flags on top of options from the config file.
    pub fn apply(&self, options: &mut SessionOptions) {
        if let Some(context) = self.context {
            options.context_lines = context;
        }
        if let Some(policy) = self.border_policy {
            options.border_policy = policy;
        }
        if let Some(media_type) = self.media_type {
            options.media_type = media_type;
        }
    }
}

#[derive(Args, Debug)]
pub struct PlayArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    /// Playback speed multiplier
    #[arg(short, long, value_name = "X", value_parser = parse_speed)]
    pub speed: Option<f64>,
}

/// Parse a speed multiplier: a finite number above zero.
fn parse_speed(s: &str) -> Result<f64, String> {
    let speed: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    if speed.is_finite() && speed > 0.0 {
        Ok(speed)
    } else {
        Err(format!("speed must be a finite number above zero (got '{}')", s))
    }
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    /// Media times (seconds) to feed as time updates, in order
    #[arg(long, num_args = 1.., value_name = "SECONDS")]
    pub ticks: Vec<f64>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

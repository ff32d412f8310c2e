//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// OZ channel browser and stream recorder.
#[derive(Parser, Debug)]
#[command(
    name = "oz-streamer",
    version,
    about = "Browse OZ channels and record a stream with streamlink",
    long_about = "Logs in to OZ, walks a channel's collections until a playable item is chosen, \
                  then hands the stream URL and its playback cookie to streamlink."
)]
pub struct Args {
    /// OZ account username.
    pub username: String,

    /// OZ account password.
    pub password: String,

    /// Skip the channel menu and use the account channel with this slug.
    #[arg(long)]
    pub channel: Option<String>,

    /// Start from the contents of this collection instead of the channel's top level.
    #[arg(long, requires = "channel")]
    pub collection: Option<String>,

    /// Record what the channel is broadcasting right now.
    #[arg(long, conflicts_with = "collection")]
    pub live: bool,

    /// Menu selections to apply before prompting, e.g. "0,2,1".
    #[arg(long)]
    pub select: Option<String>,

    /// Maximum number of nested collections to expand.
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Stream quality passed to streamlink.
    #[arg(short, long)]
    pub quality: Option<String>,

    /// Directory recordings are written to.
    #[arg(short = 'd', long = "directory")]
    pub output_directory: Option<PathBuf>,

    /// Print the streamlink command instead of running it.
    #[arg(long)]
    pub dry_run: bool,

    /// Path to an optional configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(depth) = self.max_depth {
            config.navigation.max_depth = depth;
        }

        if let Some(quality) = &self.quality {
            config.playback.quality = quality.clone();
        }

        if let Some(dir) = &self.output_directory {
            config.playback.output_directory = Some(dir.clone());
        }

        if self.dry_run {
            config.playback.dry_run = true;
        }
    }
}

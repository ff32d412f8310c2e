//! OZ Streamer - CLI entry point.

use std::process::ExitCode;

use chrono::Local;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use oz_streamer::{
    api::{Channel, Credentials, OzApi},
    cli::Args,
    config::{validate_config, validate_credentials, validate_slug, Config},
    error::{exit_codes, Result},
    fs::{ensure_dir, get_output_path, sanitize_component},
    media::{CookieGrant, ResolvedStream},
    navigate::{parse_selection_path, ConsoleChooser, Navigator, PresetChooser, StartPoint},
    output::{
        create_spinner, print_banner, print_error, print_info, print_stream_summary,
        print_success, print_warning,
    },
    playback::{run_player, PlayerCommand},
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging; menus need a quiet terminal unless asked otherwise
    let log_level = if args.debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    print_banner();

    // Load configuration
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    args.merge_into_config(&mut config);

    validate_config(&config)?;
    validate_credentials(&args.username, &args.password)?;
    if let Some(slug) = &args.channel {
        validate_slug(slug)?;
    }

    // Sign in and index the account's channels
    let api = OzApi::new(
        config.api.clone(),
        Credentials::new(args.username.clone(), args.password.clone()),
    )?;

    let spinner = create_spinner("Signing in to OZ...");
    let signed_in = api.sessions().bearer_token().await;
    spinner.finish_and_clear();
    signed_in?;
    print_success(&format!("Logged in as {}", args.username));

    let spinner = create_spinner("Loading your channels...");
    let index = api.channel_index().await;
    spinner.finish_and_clear();
    let index = index?;
    tracing::info!("{} channels on this account", index.len());

    let preset = match &args.select {
        Some(path) => parse_selection_path(path)?,
        None => Vec::new(),
    };
    let mut chooser = PresetChooser::new(preset, Some(ConsoleChooser::new()));
    let mut navigator = Navigator::new(&api, &api, &mut chooser, config.navigation.max_depth);

    // Pick a channel
    let channel: Channel = match &args.channel {
        Some(slug) => index.require(slug)?.clone(),
        None => {
            let spinner = create_spinner("Loading channels...");
            let channels = api.organization_channels().await;
            spinner.finish_and_clear();
            navigator.choose_channel(channels?).await?
        }
    };
    print_info(&format!("Channel: {}", channel.display_name()));

    // Walk down to a stream
    let (filename, stream) = if args.live {
        live_stream(&api, &channel).await?
    } else {
        let start = match &args.collection {
            Some(id) => StartPoint::Collection(id.clone()),
            None => StartPoint::TopLevel,
        };
        let navigation = navigator.navigate(&channel.id, start).await?;
        (navigation.filename, navigation.stream)
    };

    let output_path = get_output_path(&config, &filename)?;
    if let Some(parent) = output_path.parent() {
        ensure_dir(parent)?;
    }

    print_stream_summary(&output_path.display().to_string(), &stream);
    if let CookieGrant::Unavailable(reason) = &stream.cookie {
        print_warning(&format!(
            "Continuing without a playback cookie ({}); the CDN may refuse the stream",
            reason
        ));
    }

    // Hand off to the player
    let command = PlayerCommand::build(&config.playback, &stream, &output_path);
    if config.playback.dry_run {
        println!("{}", command);
        return Ok(());
    }

    run_player(&command).await?;
    print_success(&format!("Saved {}", output_path.display()));

    Ok(())
}

/// Resolve what `channel` is broadcasting now.
async fn live_stream(api: &OzApi, channel: &Channel) -> Result<(String, ResolvedStream)> {
    let spinner = create_spinner("Resolving live stream...");
    let descriptor = api.now_playing(&channel.id).await;
    spinner.finish_and_clear();

    let stream = api.issue_playback_cookie(descriptor?).await;
    let label = if channel.slug.is_empty() {
        channel.display_name()
    } else {
        channel.slug.as_str()
    };
    let filename = format!(
        "{}_live_{}",
        sanitize_component(label),
        Local::now().format("%Y-%m-%dT%H-%M-%S")
    );

    Ok((filename, stream))
}

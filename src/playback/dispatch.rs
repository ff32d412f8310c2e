//! Running the external player.

use tokio::process::Command;

use crate::error::{Error, Result};
use crate::playback::command::PlayerCommand;

/// Run the player and wait for it to exit.
pub async fn run_player(command: &PlayerCommand) -> Result<()> {
    tracing::info!("Starting {}", command.program);
    tracing::debug!("Player command: {}", command);

    let status = Command::new(&command.program)
        .args(&command.args)
        .status()
        .await
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::PlayerNotFound(command.program.clone())
            } else {
                Error::Playback(format!("Failed to run {}: {}", command.program, e))
            }
        })?;

    if !status.success() {
        return Err(Error::Playback(format!(
            "{} exited with status: {}",
            command.program, status
        )));
    }

    Ok(())
}

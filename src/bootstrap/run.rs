//! Command dispatch once configuration and logging are in place.

use std::path::Path;

use anyhow::Context;
use cs_core::EncodedImage;
use tokio::io::AsyncWriteExt;
use tracing::{info, warn};

use super::config::Settings;
use super::wiring::{wire_dependencies, AppRuntime};
use crate::cli::Command;
use crate::host::{serve, start_stdin_listener, SessionEnd};

pub async fn run_command(command: Command, settings: &Settings) -> anyhow::Result<()> {
    let runtime = wire_dependencies(settings)?;

    match command {
        Command::Watch => watch(&runtime).await,
        Command::GetText => {
            let text = runtime.deps.usecases().get_clipboard_text().execute().await;
            print_stdout(&text).await
        }
        Command::SetText { text } => {
            runtime
                .deps
                .usecases()
                .set_clipboard_text()
                .execute(&text)
                .await?;
            Ok(())
        }
        Command::GetImage { out } => {
            let data_uri = runtime.deps.usecases().get_clipboard_image().execute().await;
            if data_uri.is_empty() {
                anyhow::bail!("no image on the clipboard");
            }
            match out {
                Some(path) => write_png(&data_uri, &path).await,
                None => print_stdout(&data_uri).await,
            }
        }
    }
}

/// Runs the watcher and serves stdio until quit, end of input or Ctrl-C.
async fn watch(runtime: &AppRuntime) -> anyhow::Result<()> {
    runtime.watcher.start().await?;

    let session = serve(&runtime.deps, start_stdin_listener(), tokio::io::stdout());
    let result = tokio::select! {
        end = session => end.map(|end| match end {
            SessionEnd::Quit => info!("quit requested"),
            SessionEnd::EndOfInput => info!("stdin closed"),
        }),
        signal = tokio::signal::ctrl_c() => {
            if let Err(e) = &signal {
                warn!(error = %e, "failed to listen for Ctrl-C");
            }
            info!("interrupted");
            Ok(())
        }
    };

    runtime.watcher.stop().await?;
    result
}

async fn print_stdout(line: &str) -> anyhow::Result<()> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(line.as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await?;
    Ok(())
}

async fn write_png(data_uri: &str, path: &Path) -> anyhow::Result<()> {
    let image =
        EncodedImage::from_png_data_uri(data_uri).context("Unexpected image data URI")?;
    tokio::fs::write(path, &image.bytes)
        .await
        .with_context(|| format!("Failed to write image to {}", path.display()))?;
    info!(path = %path.display(), size_bytes = image.bytes.len(), "clipboard image saved");
    Ok(())
}

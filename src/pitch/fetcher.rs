//! Pitch data loader worker.

use crate::pitch::parser::parse_pitch_catalog;
use crate::pitch::types::{LoadCommand, LoadResult, PitchCatalogMap, PitchChannels, PitchSource};
use anyhow::{Context, Result};
use chrono::Utc;
use std::sync::{Arc, Mutex, mpsc};
use std::thread;

/// Start the background pitch loader thread
pub fn start_pitch_worker() -> PitchChannels {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoadCommand>();
    let (res_tx, res_rx) = mpsc::channel::<LoadResult>();

    thread::spawn(move || {
        let send = |msg| {
            let _ = res_tx.send(msg);
        };

        let rt = match tokio::runtime::Runtime::new() {
            Ok(rt) => rt,
            Err(err) => {
                eprintln!("[PITCH LOADER] failed to start tokio runtime: {}", err);
                while let Ok(LoadCommand::Load(source)) = cmd_rx.recv() {
                    send(LoadResult::Failed {
                        source: source.to_string(),
                        error: format!("loader runtime unavailable: {}", err),
                    });
                }
                return;
            }
        };

        rt.block_on(async move {
            let client = reqwest::Client::new();

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    LoadCommand::Load(source) => {
                        let label = source.to_string();
                        match load_catalog(&client, &source).await {
                            Ok(catalog) => {
                                println!(
                                    "[PITCH LOADER] source={} loaded {} pitch types",
                                    label,
                                    catalog.len()
                                );
                                send(LoadResult::Loaded {
                                    catalog,
                                    source: label,
                                    loaded_utc: Utc::now(),
                                })
                            }
                            Err(err) => {
                                eprintln!("[PITCH LOADER] source={} FAILURE: {:#}", label, err);
                                send(LoadResult::Failed {
                                    source: label,
                                    error: format!("{:#}", err),
                                })
                            }
                        }
                    }
                }
            }
        });
    });

    PitchChannels {
        cmd_tx,
        res_rx: Arc::new(Mutex::new(res_rx)),
    }
}

async fn load_catalog(client: &reqwest::Client, source: &PitchSource) -> Result<PitchCatalogMap> {
    let body = match source {
        PitchSource::File(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        PitchSource::Url(url) => fetch_body(client, url).await?,
    };
    parse_pitch_catalog(&body)
}

async fn fetch_body(client: &reqwest::Client, url: &str) -> Result<String> {
    let resp = client
        .get(url)
        .header("accept", "application/json")
        .send()
        .await?;
    let status = resp.status();
    let body = resp.text().await?;
    if !status.is_success() {
        anyhow::bail!("HTTP {} for {}", status, url);
    }
    Ok(body)
}

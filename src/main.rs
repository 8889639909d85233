mod cli;
mod config;
mod core;
mod error;
mod server;

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Commands};
use crate::config::AppConfig;
use crate::core::analysis::AnalysisService;
use crate::core::extract::{VideoId, resolve_video_input};
use crate::core::transcript::{TranscriptService, YouTubeCaptionSource};
use crate::error::{Error, Result};
use crate::server::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ytbrief=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = AppConfig::new(cli.port, &cli.languages, cli.model);

    match cli.command {
        Commands::Serve => run_serve(&config).await,
        Commands::Get { video } => {
            run_get(&config, &video).await?;
            Ok(())
        }
        Commands::Analyze { video } => {
            run_analyze(&config, &video).await?;
            Ok(())
        }
    }
}

async fn run_serve(config: &AppConfig) -> anyhow::Result<()> {
    let source = YouTubeCaptionSource::new(config.languages.clone())?;
    let state = AppState {
        transcripts: Arc::new(TranscriptService::new(Arc::new(source))),
    };
    server::run(state, config.port).await
}

async fn run_get(config: &AppConfig, video: &str) -> Result<()> {
    let (video_id, service) = transcript_service(config, video)?;
    let transcript = service.fetch_transcript(&video_id).await?;
    println!("{transcript}");
    Ok(())
}

async fn run_analyze(config: &AppConfig, video: &str) -> Result<()> {
    let (video_id, service) = transcript_service(config, video)?;
    let transcript = service.fetch_transcript(&video_id).await?;

    let analysis = AnalysisService::new(config.model.clone())
        .analyze(&transcript)
        .await?;

    println!("Summary:\n{}\n", analysis.summary);
    println!("Rating: {}/10", analysis.rating);
    println!("{}", analysis.rating_explanation);
    Ok(())
}

fn transcript_service(config: &AppConfig, video: &str) -> Result<(VideoId, TranscriptService)> {
    let video_id =
        resolve_video_input(video).ok_or_else(|| Error::InvalidInput(video.to_string()))?;
    let source = YouTubeCaptionSource::new(config.languages.clone())?;
    Ok((video_id, TranscriptService::new(Arc::new(source))))
}

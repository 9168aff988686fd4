//! voice-cloner CLI binary

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::debug;
use std::process::ExitCode;

mod cli;
use cli::{Cli, CloneCommand, Commands, DeleteCommand, GenerateCommand};

use voice_cloner::{ClonerConfig, ProgressTracker, VoiceCloner};
use voice_cloner_domain::ModelId;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = build_config(&cli);
    debug!("Using configuration: {config:?}");

    let ok = match cli.command {
        Commands::Clone(cmd) => clone_voice(config, cmd).await?,
        Commands::Generate(cmd) => generate(config, cmd).await?,
        Commands::List => list_voices(config),
        Commands::Delete(cmd) => delete_voice(config, cmd),
        Commands::Models => list_models(),
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn build_config(cli: &Cli) -> ClonerConfig {
    let mut config = ClonerConfig::from_env();
    if let Some(dir) = &cli.temp_dir {
        config = config.with_temp_dir(dir);
    }
    if let Some(dir) = &cli.cloned_dir {
        config = config.with_cloned_dir(dir);
    }
    if let Some(url) = &cli.base_url {
        config = config.with_base_url(url);
    }
    config
}

fn remote_cloner(
    config: ClonerConfig,
) -> Result<VoiceCloner<voice_cloner_elevenlabs::ElevenLabsClient>> {
    let client = config
        .build_client()
        .context("Cannot reach ElevenLabs without credentials")?;
    let cloner = VoiceCloner::new(config, client);
    cloner
        .ensure_dirs()
        .context("Failed to create working directories")?;
    Ok(cloner)
}

async fn clone_voice(config: ClonerConfig, cmd: CloneCommand) -> Result<bool> {
    let cloner = remote_cloner(config)?;
    let progress = ProgressTracker::new("Cloning voice...");

    let outcome = cloner
        .clone_and_store(Some(cmd.sample.as_path()), &cmd.name, cmd.model, &progress)
        .await;
    progress.finish(&outcome.status);

    if let Some(json) = outcome.record_json() {
        println!("{json}");
    }
    println!("{}", outcome.status);
    Ok(outcome.is_success())
}

async fn generate(config: ClonerConfig, cmd: GenerateCommand) -> Result<bool> {
    let cloner = remote_cloner(config)?;
    let progress = ProgressTracker::new("Generating audio...");

    let outcome = cloner
        .generate(&cmd.text, &cmd.voice, cmd.model.clone(), cmd.settings(), &progress)
        .await;
    progress.finish(&outcome.status);

    if let Some(path) = &outcome.audio_path {
        println!("{}", path.display());
    }
    println!("{}", outcome.status);
    Ok(outcome.is_success())
}

fn list_voices(config: ClonerConfig) -> bool {
    let cloner = VoiceCloner::local_only(config);
    let voices = cloner.refresh();
    if voices.is_empty() {
        println!("No cloned voices yet.");
    }
    for voice in voices {
        println!("{voice}");
    }
    true
}

fn delete_voice(config: ClonerConfig, cmd: DeleteCommand) -> bool {
    let cloner = VoiceCloner::local_only(config);
    let outcome = cloner.delete_selected(&cmd.selection);

    println!("{}", outcome.status);
    for voice in &outcome.voices {
        println!("{voice}");
    }
    outcome.success
}

fn list_models() -> bool {
    for model in ModelId::available() {
        println!("{model}\t{}", model.label());
    }
    true
}

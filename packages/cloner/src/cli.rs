//! Command line interface for voice-cloner.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use voice_cloner_domain::{ModelId, VoiceSettings};

/// Clone voices from audio samples and synthesize speech with them
#[derive(Parser, Debug)]
#[command(name = "voice-cloner", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory for generated audio [env: VOICE_CLONER_TEMP_DIR]
    #[arg(long, global = true)]
    pub temp_dir: Option<PathBuf>,

    /// Directory for sample copies and voices_metadata.json [env: VOICE_CLONER_CLONED_DIR]
    #[arg(long, global = true)]
    pub cloned_dir: Option<PathBuf>,

    /// API origin [env: VOICE_CLONER_BASE_URL]
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Clone a voice from an audio sample
    Clone(CloneCommand),

    /// List cloned voices
    #[command(visible_alias = "voices")]
    List,

    /// Synthesize text with a cloned voice
    Generate(GenerateCommand),

    /// Delete a cloned voice
    Delete(DeleteCommand),

    /// List the built-in synthesis models
    Models,
}

#[derive(Parser, Debug)]
pub struct CloneCommand {
    /// Audio sample of the voice to clone
    pub sample: PathBuf,

    /// Display name; defaults to ClonedVoice_<timestamp>
    #[arg(short, long, default_value = "")]
    pub name: String,

    /// Model to associate with the voice
    #[arg(short, long)]
    pub model: Option<ModelId>,
}

#[derive(Parser, Debug)]
pub struct GenerateCommand {
    /// Voice index or summary line as printed by `list`
    #[arg(short, long)]
    pub voice: String,

    /// Text to synthesize
    #[arg(short, long)]
    pub text: String,

    /// Model override; defaults to the voice's model
    #[arg(short, long)]
    pub model: Option<ModelId>,

    #[arg(long, default_value_t = 0.5)]
    pub stability: f32,

    #[arg(long, default_value_t = 0.75)]
    pub similarity_boost: f32,

    #[arg(long, default_value_t = 0.0)]
    pub style: f32,
}

impl GenerateCommand {
    pub fn settings(&self) -> VoiceSettings {
        VoiceSettings::from_values(self.stability, self.similarity_boost, self.style)
    }
}

#[derive(Parser, Debug)]
pub struct DeleteCommand {
    /// Voice index or summary line as printed by `list`
    pub selection: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn clone_defaults() {
        let cli = Cli::parse_from(["voice-cloner", "clone", "me.wav"]);
        let Commands::Clone(cmd) = cli.command else {
            panic!("expected clone");
        };
        assert_eq!(cmd.sample, PathBuf::from("me.wav"));
        assert_eq!(cmd.name, "");
        assert_eq!(cmd.model, None);
    }

    #[test]
    fn generate_sliders_default_and_parse() {
        let cli = Cli::parse_from([
            "voice-cloner",
            "generate",
            "--voice",
            "0 - Alice (v1)",
            "--text",
            "Bonjour",
            "--model",
            "eleven_monolingual_v1",
            "--style",
            "0.4",
        ]);
        let Commands::Generate(cmd) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(cmd.voice, "0 - Alice (v1)");
        assert_eq!(cmd.model, Some(ModelId::MonolingualV1));
        let settings = cmd.settings();
        assert_eq!(settings.stability.value(), 0.5);
        assert_eq!(settings.similarity_boost.value(), 0.75);
        assert_eq!(settings.style.value(), 0.4);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["voice-cloner", "voices", "--cloned-dir", "/tmp/v"]);
        assert!(matches!(cli.command, Commands::List));
        assert_eq!(cli.cloned_dir, Some(PathBuf::from("/tmp/v")));
    }

    #[test]
    fn delete_takes_a_summary_line() {
        let cli = Cli::parse_from(["voice-cloner", "delete", "1 - Bob (v2)"]);
        let Commands::Delete(cmd) = cli.command else {
            panic!("expected delete");
        };
        assert_eq!(cmd.selection, "1 - Bob (v2)");
    }
}

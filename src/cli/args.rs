//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::upload::ContentType;

/// Podforge - podcast audio to publishable content
#[derive(Parser, Debug)]
#[command(name = "podforge")]
#[command(version = "0.1.0")]
#[command(about = "Upload podcast audio to a content generation service and fetch the results")]
#[command(long_about = None)]
pub struct Cli {
    /// Audio file to process (.mp3, .wav, .m4a, .ogg)
    #[arg(value_name = "AUDIO")]
    pub audio: Option<PathBuf>,

    /// Content type to generate (repeatable; all types when omitted)
    #[arg(short = 't', long = "content-type", value_name = "TYPE")]
    pub content_types: Vec<ContentTypeArg>,

    /// Base URL of the processing service
    #[arg(short = 's', long, value_name = "URL", env = "PODFORGE_SERVER")]
    pub server: Option<String>,

    /// Directory for downloaded artifacts
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// List generated artifacts without downloading them
    #[arg(long)]
    pub no_download: bool,

    /// Show desktop notifications
    #[arg(short = 'n', long)]
    pub notify: bool,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Content type argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ContentTypeArg {
    Blog,
    Seo,
    Faq,
    Social,
    Newsletter,
    Quotes,
}

impl From<ContentTypeArg> for ContentType {
    fn from(arg: ContentTypeArg) -> Self {
        match arg {
            ContentTypeArg::Blog => ContentType::Blog,
            ContentTypeArg::Seo => ContentType::Seo,
            ContentTypeArg::Faq => ContentType::Faq,
            ContentTypeArg::Social => ContentType::Social,
            ContentTypeArg::Newsletter => ContentType::Newsletter,
            ContentTypeArg::Quotes => ContentType::Quotes,
        }
    }
}

impl From<ContentType> for ContentTypeArg {
    fn from(ct: ContentType) -> Self {
        match ct {
            ContentType::Blog => ContentTypeArg::Blog,
            ContentType::Seo => ContentTypeArg::Seo,
            ContentType::Faq => ContentTypeArg::Faq,
            ContentType::Social => ContentTypeArg::Social,
            ContentType::Newsletter => ContentTypeArg::Newsletter,
            ContentType::Quotes => ContentTypeArg::Quotes,
        }
    }
}

/// Parsed generate options (one-shot mode)
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub audio: PathBuf,
    pub content_types: Vec<ContentType>,
    pub server: String,
    pub output_dir: PathBuf,
    pub download: bool,
    pub notify: bool,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["server", "output_dir", "notify"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_defaults() {
        let cli = Cli::parse_from(["podforge"]);
        assert!(cli.audio.is_none());
        assert!(cli.content_types.is_empty());
        assert!(cli.server.is_none());
        assert!(cli.output.is_none());
        assert!(!cli.no_download);
        assert!(!cli.notify);
    }

    #[test]
    fn cli_parses_audio_path() {
        let cli = Cli::parse_from(["podforge", "episode1.mp3"]);
        assert_eq!(cli.audio, Some(PathBuf::from("episode1.mp3")));
    }

    #[test]
    fn cli_parses_repeated_content_types() {
        let cli = Cli::parse_from(["podforge", "episode1.mp3", "-t", "blog", "-t", "seo"]);
        assert_eq!(
            cli.content_types,
            vec![ContentTypeArg::Blog, ContentTypeArg::Seo]
        );
    }

    #[test]
    fn cli_parses_server_and_output() {
        let cli = Cli::parse_from([
            "podforge",
            "episode1.mp3",
            "-s",
            "http://media-box:9000",
            "-o",
            "generated",
        ]);
        assert_eq!(cli.server, Some("http://media-box:9000".to_string()));
        assert_eq!(cli.output, Some(PathBuf::from("generated")));
    }

    #[test]
    fn cli_parses_flags() {
        let cli = Cli::parse_from(["podforge", "episode1.mp3", "--no-download", "-n"]);
        assert!(cli.no_download);
        assert!(cli.notify);
    }

    #[test]
    fn cli_parses_config_init() {
        let cli = Cli::parse_from(["podforge", "config", "init"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                action: ConfigAction::Init
            })
        ));
    }

    #[test]
    fn cli_parses_config_set() {
        let cli = Cli::parse_from(["podforge", "config", "set", "server", "http://x:1"]);
        if let Some(Commands::Config {
            action: ConfigAction::Set { key, value },
        }) = cli.command
        {
            assert_eq!(key, "server");
            assert_eq!(value, "http://x:1");
        } else {
            panic!("Expected Config Set command");
        }
    }

    #[test]
    fn content_type_arg_converts_to_domain() {
        assert_eq!(ContentType::from(ContentTypeArg::Blog), ContentType::Blog);
        assert_eq!(
            ContentType::from(ContentTypeArg::Newsletter),
            ContentType::Newsletter
        );
    }

    #[test]
    fn valid_config_keys() {
        assert!(is_valid_config_key("server"));
        assert!(is_valid_config_key("output_dir"));
        assert!(is_valid_config_key("notify"));
        assert!(!is_valid_config_key("invalid_key"));
    }

    #[test]
    fn verify_cli() {
        // Verify the CLI definition is valid
        Cli::command().debug_assert();
    }
}

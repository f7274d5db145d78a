//! Podforge CLI entry point

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use podforge::cli::{
    app::{load_merged_config, run_generate, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands, GenerateOptions},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use podforge::domain::config::AppConfig;
use podforge::domain::upload::ContentType;
use podforge::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Handle subcommands
    if let Some(Commands::Config { action }) = cli.command {
        let store = XdgConfigStore::new();
        if let Err(e) = handle_config_command(action, &store, &presenter).await {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    // Build CLI config from args
    let cli_config = AppConfig {
        server: cli.server.clone(),
        output_dir: cli
            .output
            .as_ref()
            .map(|path| path.to_string_lossy().into_owned()),
        notify: if cli.notify { Some(true) } else { None },
    };

    // Merge config
    let config = load_merged_config(cli_config).await;

    let Some(audio) = cli.audio else {
        presenter.error("Missing audio file. Usage: podforge <AUDIO> [-t TYPE]...");
        return ExitCode::from(EXIT_USAGE_ERROR);
    };

    // All content kinds when none were requested explicitly
    let content_types: Vec<ContentType> = if cli.content_types.is_empty() {
        ContentType::ALL.to_vec()
    } else {
        let mut selected = Vec::new();
        for arg in &cli.content_types {
            let content_type = ContentType::from(*arg);
            if !selected.contains(&content_type) {
                selected.push(content_type);
            }
        }
        selected
    };

    let options = GenerateOptions {
        audio,
        content_types,
        server: config.server_or_default(),
        output_dir: PathBuf::from(config.output_dir_or_default()),
        download: !cli.no_download,
        notify: config.notify_or_default(),
    };

    run_generate(options).await
}

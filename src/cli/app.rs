//! Main app runner for one-shot mode

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use crate::application::ports::{ConfigStore, NotificationIcon, Notifier};
use crate::application::{SessionError, SessionOutcome, UploadSession, WatchCallbacks};
use crate::domain::config::AppConfig;
use crate::domain::job::DisplayItem;
use crate::domain::upload::AudioFile;
use crate::infrastructure::{HttpJobService, NotifyRustNotifier, XdgConfigStore};

use super::args::GenerateOptions;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Run one upload-and-watch session
pub async fn run_generate(options: GenerateOptions) -> ExitCode {
    let mut presenter = Presenter::new();

    // Read the audio file up front so validation sees real bytes
    let data = match tokio::fs::read(&options.audio).await {
        Ok(data) => data,
        Err(e) => {
            presenter.error(&format!(
                "Failed to read {}: {}",
                options.audio.display(),
                e
            ));
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let filename = options
        .audio
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("audio")
        .to_string();
    let file = AudioFile::new(filename, data);

    let kinds = options
        .content_types
        .iter()
        .map(|ct| ct.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    presenter.info(&format!(
        "Uploading {} ({})",
        file.name(),
        file.human_readable_size()
    ));
    presenter.info(&format!("Requested content: {}", kinds));

    let service = Arc::new(HttpJobService::new(&options.server));
    let mut session = UploadSession::new(Arc::clone(&service));
    let notifier = options.notify.then(NotifyRustNotifier::new);

    presenter.start_spinner("Uploading...");

    // Spinner handle is shared into the watch task for progress updates
    let spinner = presenter.spinner();
    let callbacks = WatchCallbacks {
        on_update: Some(Box::new(move |filename| {
            if let Some(ref spinner) = spinner {
                match filename {
                    Some(name) => spinner.set_message(format!("Processing {}...", name)),
                    None => spinner.set_message("Processing..."),
                }
            }
        })),
    };

    let job_id = match session
        .submit(Some(file), options.content_types.clone(), callbacks)
        .await
    {
        Ok(job_id) => job_id,
        Err(e) => {
            presenter.stop_spinner();
            presenter.error(&e.to_string());
            notify(&notifier, &e.to_string(), NotificationIcon::Error).await;
            let code = match e {
                SessionError::Validation(_) => EXIT_USAGE_ERROR,
                _ => EXIT_ERROR,
            };
            return ExitCode::from(code);
        }
    };
    presenter.update_spinner(&format!("Processing job {}...", job_id));

    // Ctrl+C cancels the watch task before exiting
    let outcome = tokio::select! {
        outcome = session.wait() => Some(outcome),
        _ = tokio::signal::ctrl_c() => None,
    };
    let Some(outcome) = outcome else {
        let _ = session.cancel().await;
        presenter.stop_spinner();
        presenter.warn("Cancelled");
        return ExitCode::from(EXIT_ERROR);
    };

    match outcome {
        Ok(SessionOutcome::Completed(items)) => {
            presenter.spinner_success("Processing complete");
            notify(&notifier, "Processing complete", NotificationIcon::Success).await;

            presenter.output("Generated content:");
            for item in &items {
                presenter.artifact(&item.label, &item.filename);
            }

            if options.download {
                download_artifacts(&service, &items, &options.output_dir, &presenter).await
            } else {
                ExitCode::from(EXIT_SUCCESS)
            }
        }
        Ok(SessionOutcome::Failed(message)) => {
            presenter.spinner_fail("Processing failed");
            presenter.error(&message);
            notify(&notifier, &message, NotificationIcon::Error).await;
            ExitCode::from(EXIT_ERROR)
        }
        Err(e) => {
            presenter.spinner_fail("Processing failed");
            presenter.error(&e.to_string());
            notify(&notifier, &e.to_string(), NotificationIcon::Error).await;
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Fetch each artifact into the output directory
async fn download_artifacts(
    service: &HttpJobService,
    items: &[DisplayItem],
    output_dir: &Path,
    presenter: &Presenter,
) -> ExitCode {
    use crate::application::ports::JobService;

    if let Err(e) = tokio::fs::create_dir_all(output_dir).await {
        presenter.error(&format!(
            "Failed to create {}: {}",
            output_dir.display(),
            e
        ));
        return ExitCode::from(EXIT_ERROR);
    }

    let mut failed = false;
    for item in items {
        match service.download(&item.filename).await {
            Ok(bytes) => {
                let path = output_dir.join(&item.filename);
                match tokio::fs::write(&path, bytes).await {
                    Ok(()) => presenter.success(&format!("Saved {}", path.display())),
                    Err(e) => {
                        presenter.warn(&format!("Failed to save {}: {}", path.display(), e));
                        failed = true;
                    }
                }
            }
            Err(e) => {
                presenter.warn(&format!("Failed to download {}: {}", item.filename, e));
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::from(EXIT_ERROR)
    } else {
        ExitCode::from(EXIT_SUCCESS)
    }
}

async fn notify(
    notifier: &Option<NotifyRustNotifier>,
    message: &str,
    icon: NotificationIcon,
) {
    if let Some(ref notifier) = notifier {
        let _ = notifier.notify("Podforge", message, icon).await;
    }
}

/// Load and merge configuration from file and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    // Merge: defaults < file < cli (env vars arrive through clap)
    AppConfig::defaults().merge(file_config).merge(cli_config)
}

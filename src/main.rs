use anyhow::Context;
use clap::Parser;
use seo_subscribe::configuration::get_configuration;
use seo_subscribe::domain::FormState;
use seo_subscribe::metrics_guide::METRICS_GUIDE;
use seo_subscribe::subscription_controller::{SubmitOutcome, SubscriptionController};
use seo_subscribe::telemetry::{get_subscriber, init_subscriber};
use seo_subscribe::terminal_view::TerminalView;
use std::io::Write;
use std::process::ExitCode;

mod cli;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // stdout carries notifications and the guide, logs go to stderr.
    let subscriber = get_subscriber("seo-subscribe".into(), "info".into(), std::io::stderr);
    init_subscriber(subscriber);

    let cli = Cli::parse();
    match cli.command {
        Commands::Subscribe {
            email,
            no_feature_updates,
            no_seo_tips,
        } => {
            let configuration = get_configuration().context("Failed to read configuration.")?;
            let client = configuration
                .subscribe_client
                .client()
                .context("Failed to build the subscribe client.")?;
            let form = FormState {
                email,
                feature_updates: !no_feature_updates,
                seo_tips: !no_seo_tips,
            };
            let controller = SubscriptionController::new(client, TerminalView::new(form, std::io::stdout()));
            match controller.submit().await {
                SubmitOutcome::Subscribed => Ok(ExitCode::SUCCESS),
                _ => Ok(ExitCode::FAILURE),
            }
        }
        Commands::Guide { json, category } => {
            let output = match (category, json) {
                (Some(name), json) => {
                    let category = METRICS_GUIDE
                        .category(&name)
                        .with_context(|| format!("No category named `{}`", name))?;
                    if json {
                        serde_json::to_string_pretty(category)?
                    } else {
                        category.to_string()
                    }
                }
                (None, true) => serde_json::to_string_pretty(&METRICS_GUIDE)?,
                (None, false) => METRICS_GUIDE.render_guide(),
            };
            emit(&format!("{}\n", output))?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Lookup { category, metric } => {
            let definition = METRICS_GUIDE.get(&category, &metric).with_context(|| {
                format!("No metric named `{}` in category `{}`", metric, category)
            })?;
            emit(&definition.to_string())?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Writes to stdout. A reader that went away early (`| head`) is not an error.
fn emit(output: &str) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    match stdout.write_all(output.as_bytes()).and_then(|_| stdout.flush()) {
        Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => Ok(()),
        result => result.context("Failed to write to stdout"),
    }
}

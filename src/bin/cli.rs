//! Signup CLI
//!
//! Command-line interface for the registration flow:
//! - Register an account against a registration endpoint
//! - Print the sparkline demo
//! - Generate a default config file

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use signup::charts::{demo_series, SparklineRenderer, SvgRenderer, TextRenderer};
use signup::config::{generate_default_config, Config, ConfigSource};
use signup::navigation::{NavigationKind, RecordingNavigator};
use signup::registration::{
    FlowView, HttpRegistrationClient, RegistrationFlow, RegistrationInput, SubmissionOutcome,
};
use signup::session::{SessionStatus, SessionStore};

#[derive(Parser)]
#[command(name = "signup")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Account registration client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: standard locations, then environment)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Registration endpoint base URL (overrides config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Print diagnostic logs
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Register an account
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long, default_value = "")]
        first_name: String,
        #[arg(long, default_value = "")]
        middle_name: String,
        #[arg(long, default_value = "")]
        last_name: String,
        #[arg(long, default_value = "")]
        occupation: String,
        /// Session status to simulate (loading, authenticated, unauthenticated)
        #[arg(long, default_value = "unauthenticated")]
        session: SessionStatus,
    },

    /// Print the demo sparklines
    Sparklines {
        #[arg(short, long, value_enum, default_value = "text")]
        format: ChartFormat,
        /// Width in characters for text output
        #[arg(long, default_value = "40")]
        columns: usize,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ChartFormat {
    Text,
    Svg,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (mut config, source) = match &cli.config {
        Some(path) => {
            let source = ConfigSource {
                path: Some(path.clone()),
                failures: Vec::new(),
            };
            (Config::load_with_env(path)?, source)
        }
        None => Config::resolve(&Config::default_paths()),
    };
    if cli.verbose {
        signup::logging::init(&config.logging, "");
        source.log();
    }
    if let Some(url) = cli.api_url {
        config.client.base_url = url;
    }

    match cli.command {
        Commands::Register {
            email,
            password,
            first_name,
            middle_name,
            last_name,
            occupation,
            session,
        } => {
            let input = RegistrationInput::new(email, password)
                .name(first_name, middle_name, last_name)
                .occupation(occupation);

            let store = SessionStore::new(session);
            tracing::debug!(session = %store.current(), "Starting registration");

            let client = HttpRegistrationClient::new(config.client.clone())?;
            let mut flow = RegistrationFlow::new(
                client,
                RecordingNavigator::new(),
                store.subscribe(),
                config.routes,
            );

            let code = match flow.view() {
                FlowView::Loading => {
                    println!("Loading...");
                    1
                }
                FlowView::Redirecting => {
                    report_navigation(flow.navigator());
                    1
                }
                FlowView::Form(_) => {
                    let outcome = flow.handle_submit(&input).await;
                    match &outcome {
                        SubmissionOutcome::Success => {
                            println!("Registered {}", input.email);
                        }
                        SubmissionOutcome::Ignored { status } => {
                            println!("Endpoint answered {}, nothing to do", status);
                        }
                        _ => {}
                    }
                    if let Some(message) = flow.form().error_message() {
                        eprintln!("{}", message);
                    }
                    report_navigation(flow.navigator());
                    exit_code(&outcome)
                }
            };

            if code != 0 {
                std::process::exit(code);
            }
        }

        Commands::Sparklines { format, columns } => {
            let text = TextRenderer::new(columns).with_ansi(true);
            let svg = SvgRenderer::default();

            for line in demo_series() {
                match format {
                    ChartFormat::Text => {
                        let label = format!("{}:", line.label);
                        println!("{:<8} {}", label, text.render(&line));
                    }
                    ChartFormat::Svg => println!("{}", svg.render(&line)),
                }
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write {:?}", path))?;
                    println!("Wrote default config to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

/// 0 on success, 2 when the input was rejected locally, 1 otherwise
fn exit_code(outcome: &SubmissionOutcome) -> i32 {
    match outcome {
        SubmissionOutcome::Success => 0,
        SubmissionOutcome::Invalid(err) if err.is_validation() => 2,
        _ => 1,
    }
}

fn report_navigation(navigator: &RecordingNavigator) {
    for nav in navigator.history() {
        let verb = match nav.kind {
            NavigationKind::Replace => "Redirected to",
            NavigationKind::Push => "Continue at",
        };
        println!("{} {}", verb, nav.path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signup::registration::RegistrationError;

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_code(&SubmissionOutcome::Success), 0);
        assert_eq!(
            exit_code(&SubmissionOutcome::Invalid(RegistrationError::InvalidEmail)),
            2
        );
        assert_eq!(
            exit_code(&SubmissionOutcome::Invalid(RegistrationError::InvalidPassword)),
            2
        );
        assert_eq!(exit_code(&SubmissionOutcome::DuplicateEmail), 1);
        assert_eq!(exit_code(&SubmissionOutcome::Ignored { status: 500 }), 1);
    }
}

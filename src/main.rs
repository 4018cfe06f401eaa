mod api;
mod client;
mod config;
mod error;
mod model;
mod orchestrator;
mod telemetry;
mod views;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{bail, Result, WrapErr};
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use crate::{
    client::{Generate, GeneratorClient},
    model::GenerateResponse,
    orchestrator::{Orchestrator, ViewState},
    views::{form::SubmissionForm, page},
};

#[derive(Parser)]
#[command(author, version, about = "Preview a personal website generated from a GitHub profile", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the generator page
    Serve {
        #[arg(long)]
        host: Option<IpAddr>,
        #[arg(long)]
        port: Option<u16>,
    },
    /// Generate one preview and print a summary of it
    Generate {
        username: String,
        /// Also write the rendered page to this file
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Generate previews interactively from the terminal
    Session {
        #[arg(long, default_value = "preview.html")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install().wrap_err("Failed to install color-eyre error handler")?;

    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let config = config::Config::new()?;
    let telemetry = telemetry::init(config.otlp_enabled)?;

    let generator = GeneratorClient::new(&config)?;
    info!(
        "Using generation endpoint {} ({:?})",
        generator.endpoint(),
        config.deployment
    );

    let outcome = match cli.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
    }) {
        Commands::Serve { host, port } => {
            let host = host.unwrap_or(config.host);
            let port = port.unwrap_or(config.port);
            serve(generator, host, port).await
        }
        Commands::Generate { username, output } => {
            generate_once(generator, &username, output.as_deref()).await
        }
        Commands::Session { output } => session(generator, &output).await,
    };

    telemetry.shutdown()?;
    outcome
}

async fn serve(generator: GeneratorClient, host: IpAddr, port: u16) -> Result<()> {
    info!("Starting web server on {}:{}", host, port);
    let app_state = Arc::new(api::types::AppState { generator });
    let app = api::create_router(app_state);

    let listener = tokio::net::TcpListener::bind((host, port))
        .await
        .wrap_err_with(|| format!("Failed to bind server to {}:{}", host, port))?;
    axum::serve(listener, app)
        .await
        .wrap_err("Failed to start web server")?;
    Ok(())
}

async fn generate_once(
    generator: GeneratorClient,
    username: &str,
    output: Option<&Path>,
) -> Result<()> {
    let mut orchestrator = Orchestrator::new(generator);
    if !orchestrator.submit(username).await {
        bail!("Username cannot be empty");
    }

    match orchestrator.state() {
        ViewState::Success { data } => {
            print_summary(data);
            if let Some(path) = output {
                write_page(path, orchestrator.state(), &SubmissionForm::new()).await?;
                println!("\nPreview written to {}", path.display());
            }
            Ok(())
        }
        ViewState::Idle { error: Some(error) } => bail!("{error}"),
        state => bail!("Generation ended in unexpected state {state:?}"),
    }
}

/// Line-driven loop over a single orchestrator: a line submits a username,
/// and after a success the next line resets back to the form.
async fn session(generator: GeneratorClient, output: &Path) -> Result<()> {
    let mut orchestrator = Orchestrator::new(generator);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!(
        "Enter a GitHub username (Ctrl-D to quit). Try: @{}",
        views::form::EXAMPLE_USERNAMES.join(", @")
    );
    while let Some(line) = lines.next_line().await.wrap_err("Failed to read from stdin")? {
        let form = SubmissionForm::with_value(line);

        if orchestrator.state().result().is_some() {
            orchestrator.reset();
            write_page(output, orchestrator.state(), &SubmissionForm::new()).await?;
            println!("Enter a GitHub username:");
            continue;
        }

        if form.submission().is_none() {
            continue;
        }
        println!("Generating your website...");
        submit_to_page(&mut orchestrator, &form, output).await?;

        match orchestrator.state() {
            ViewState::Success { data } => {
                print_summary(data);
                println!(
                    "\nPreview written to {}. Press Enter to generate another.",
                    output.display()
                );
            }
            ViewState::Idle { error } => {
                println!("{}", error.as_deref().unwrap_or_default());
            }
            ViewState::Loading { .. } => {}
        }
    }

    Ok(())
}

/// Submits the form, writing the page once while loading and again once the
/// request settles. Returns whether a request was issued.
async fn submit_to_page<G: Generate>(
    orchestrator: &mut Orchestrator<G>,
    form: &SubmissionForm,
    output: &Path,
) -> Result<bool> {
    let Some(username) = form.submission() else {
        return Ok(false);
    };
    if orchestrator.begin(username).is_none() {
        return Ok(false);
    }
    write_page(output, orchestrator.state(), form).await?;

    orchestrator.settle().await;
    write_page(output, orchestrator.state(), form).await?;
    Ok(true)
}

async fn write_page(path: &Path, state: &ViewState, form: &SubmissionForm) -> Result<()> {
    tokio::fs::write(path, page::render(state, form))
        .await
        .wrap_err_with(|| format!("Failed to write preview to {}", path.display()))
}

fn print_summary(data: &GenerateResponse) {
    let user = &data.user;
    println!("{}", data.message);
    println!(
        "\n{} (@{})",
        user.name.as_deref().unwrap_or(user.login.as_str()),
        user.login
    );
    if let Some(bio) = &user.bio {
        println!("{bio}");
    }
    println!(
        "Repositories: {} | Followers: {} | Following: {}",
        user.public_repos, user.followers, user.following
    );

    println!("\nFeatured projects ({}):", data.repositories.len());
    for repo in &data.repositories {
        println!(
            "  - {} ★{} ({})",
            repo.name,
            repo.stargazers_count,
            repo.language.as_deref().unwrap_or("n/a")
        );
        if let Some(summary) = repo.ai_summary.as_deref().filter(|s| !s.is_empty()) {
            println!("    AI summary: {summary}");
        }
    }
}

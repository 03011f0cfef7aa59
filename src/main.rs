use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use vibedj::export::{self, ExportFormat};
use vibedj::presenter;
use vibedj::repl::{self, ReplInput};
use vibedj::{CatalogClient, Config, GeminiClient, RunOutcome, SessionState, VibeCurator};

#[derive(Parser)]
#[command(name = "vibedj")]
#[command(about = "A playlist generator that feels your mood")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session: type moods, get playlists, export them
    Session,

    /// Generate one playlist for a mood and exit
    Generate {
        /// How you're feeling
        #[arg(required = true)]
        mood: String,

        /// Save the playlist in this format
        #[arg(short, long, value_enum)]
        format: Option<ExportFormat>,

        /// Directory to save the export into
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Also list every track as a Spotify link
        #[arg(long)]
        links: bool,
    },

    /// Show setup guide
    Setup,
}

fn setup_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_tracing(cli.verbose);

    match cli.command {
        Commands::Session => {
            run_session().await?;
        }
        Commands::Generate {
            mood,
            format,
            output,
            links,
        } => {
            generate_once(&mood, format, &output, links).await?;
        }
        Commands::Setup => {
            show_setup_guide();
        }
    }

    Ok(())
}

fn load_config() -> Result<Config> {
    dotenvy::dotenv().ok();

    let missing = Config::missing_keys(|key| std::env::var(key).ok());
    if !missing.is_empty() {
        println!("{}", "Missing configuration:".red());
        for item in &missing {
            println!("   - {}", item);
        }
        println!(
            "\n{}",
            "Set them in your environment or a .env file (see `vibedj setup`).".yellow()
        );
        std::process::exit(1);
    }

    Config::from_env().context("Failed to load configuration")
}

async fn build_curator() -> Result<VibeCurator<GeminiClient, CatalogClient>> {
    let config = load_config()?;

    let generator = GeminiClient::new(&config);
    let catalog = CatalogClient::new(&config)
        .await
        .context("Failed to connect to Spotify")?;

    Ok(VibeCurator::new(generator, catalog))
}

async fn run_session() -> Result<()> {
    print!("{}", presenter::render_banner());

    let curator = build_curator().await?;
    let mut session = SessionState::new();

    println!("\n{}", repl::HELP.dimmed());
    print!("\n{}", presenter::render_view(session.view()));

    loop {
        print!("{} ", ">".cyan().bold());
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }

        match repl::parse_input(&line) {
            ReplInput::Blank => continue,
            ReplInput::Quit => break,
            ReplInput::Help => println!("{}", repl::HELP),
            ReplInput::Mood(mood) => {
                if let Some(outcome) = curator.submit(&mut session, &mood).await {
                    print_outcome(&outcome);
                }
                print!("{}", presenter::render_view(session.view()));
            }
            ReplInput::Links => {
                if session.playlist().is_empty() {
                    println!("{}", "No playlist yet".yellow());
                } else {
                    print!("{}", presenter::render_links(session.playlist()));
                }
            }
            ReplInput::History => print!("{}", presenter::render_history(session.history())),
            ReplInput::Export { format, dir } => {
                match export::write_export(format, session.playlist(), &dir) {
                    Ok(path) => print_saved(format, &path),
                    Err(e) => println!("{} {}", "Export failed:".red(), e),
                }
            }
            ReplInput::Invalid(message) => println!("{}", message.yellow()),
        }
    }

    println!("\n{}", presenter::render_footer());
    Ok(())
}

async fn generate_once(
    mood: &str,
    format: Option<ExportFormat>,
    output: &Path,
    links: bool,
) -> Result<()> {
    let curator = build_curator().await?;
    let mut session = SessionState::new();

    let Some(outcome) = curator.submit(&mut session, mood).await else {
        println!("{}", "Tell me a mood first".yellow());
        return Ok(());
    };

    print_outcome(&outcome);
    print!("{}", presenter::render_view(session.view()));

    if let RunOutcome::Failed { reason } = &outcome {
        anyhow::bail!("playlist generation failed: {}", reason);
    }

    if links && !session.playlist().is_empty() {
        print!("{}", presenter::render_links(session.playlist()));
    }

    if let Some(format) = format {
        let path = export::write_export(format, session.playlist(), output)
            .with_context(|| format!("Failed to export {} playlist", format))?;
        print_saved(format, &path);
    }

    Ok(())
}

fn print_saved(format: ExportFormat, path: &Path) {
    println!(
        "{} {} ({})",
        "💾 Saved".green(),
        path.display(),
        format.mime_type().dimmed()
    );
}

fn print_outcome(outcome: &RunOutcome) {
    if let Some(report) = outcome.report() {
        print!("{}", presenter::render_report(report));
    }
}

fn show_setup_guide() {
    println!("{}", "VibeDJ Setup Guide".cyan().bold());
    println!("{}", "=".repeat(50));

    println!("\n{}", "1. Gemini API Setup".yellow());
    println!("   - Go to https://aistudio.google.com/app/apikey");
    println!("   - Create an API key");

    println!("\n{}", "2. Spotify API Setup".yellow());
    println!("   - Go to https://developer.spotify.com/dashboard/");
    println!("   - Create a new app");
    println!("   - Copy your Client ID and Client Secret");

    println!("\n{}", "3. Configuration".yellow());
    println!("   - Create a .env file with:");
    println!("     GOOGLE_API_KEY=your_gemini_api_key");
    println!("     SPOTIFY_CLIENT_ID=your_spotify_client_id");
    println!("     SPOTIFY_CLIENT_SECRET=your_spotify_client_secret");
    println!("   - Optional: GEMINI_MODEL (default gemini-2.0-flash), GEMINI_API_BASE");

    println!("\n{}", "4. Usage".yellow());
    println!("   - vibedj session                            (interactive)");
    println!("   - vibedj generate \"heartbroken\"             (one playlist)");
    println!("   - vibedj generate \"gym grind\" --format csv  (and save it)");

    println!("\n{}", "You bring the feels. I bring the beats.".green());
}

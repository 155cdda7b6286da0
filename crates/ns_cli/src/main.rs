use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use ns_analysis::NewsPipeline;
use ns_core::{Error, Result};
use ns_sources::{HttpArticleFetcher, NewsApiSource};
use ns_speech::{GoogleSpeech, GoogleTranslator, SpeechService};
use ns_web::AppState;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[arg(
        long,
        default_value = "gemini",
        help = "Text generation model. Available models: gemini (default), dummy"
    )]
    model: String,
    /// Overrides the GEMINI_API_KEY environment variable.
    #[arg(long)]
    gemini_api_key: Option<String>,
    /// Overrides the NEWS_API_KEY environment variable.
    #[arg(long)]
    news_api_key: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Analyze recent news coverage for a company and print the report.
    Analyze {
        company: String,
        /// Also synthesize spoken audio of the final verdict to this file.
        #[arg(long)]
        audio: Option<PathBuf>,
    },
    /// Run the HTTP API.
    Serve {
        #[arg(long, default_value_t = 5000)]
        port: u16,
    },
}

fn key_or_env(flag: Option<String>, var: &str) -> Option<String> {
    flag.or_else(|| std::env::var(var).ok())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let gemini_key = key_or_env(cli.gemini_api_key, "GEMINI_API_KEY");
    let generator = ns_inference::create_model(&cli.model, gemini_key).await?;
    info!("🧠 Text generator initialized successfully (using {})", generator.name());

    let news_key = key_or_env(cli.news_api_key, "NEWS_API_KEY")
        .ok_or_else(|| Error::News("NEWS_API_KEY is not set".to_string()))?;
    let source = Arc::new(NewsApiSource::new(news_key)?);
    let fetcher = Arc::new(HttpArticleFetcher::new()?);
    let pipeline = Arc::new(NewsPipeline::new(source, fetcher, generator));

    let speech = Arc::new(SpeechService::new(
        Arc::new(GoogleTranslator::new()?),
        Arc::new(GoogleSpeech::new()?),
    ));

    match cli.command {
        Commands::Analyze { company, audio } => {
            let report = pipeline.analyze(&company).await?;
            println!("{}", serde_json::to_string_pretty(&report)?);

            if let Some(path) = audio {
                let written = speech
                    .speak_final_verdict(&report.comparative, Some(path))
                    .await?;
                info!("🔊 Final verdict audio written to {}", written.display());
            }
        }
        Commands::Serve { port } => {
            info!("🌐 Starting HTTP API on port {}", port);
            ns_web::serve(AppState { pipeline, speech }, port).await?;
        }
    }

    Ok(())
}

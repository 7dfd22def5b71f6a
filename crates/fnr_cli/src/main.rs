use clap::Parser;
use tracing::info;

use fnr_core::{Result, TextClassifier};
use fnr_model::{create_classifier, CredibilityAnalyzer};
use fnr_web::{create_app, AppState};

#[derive(Parser, Debug)]
#[command(author, version, about = "Credibility scoring for news text and URLs", long_about = None)]
struct Cli {
    #[arg(
        long,
        default_value = "lexicon",
        help = "Classifier to use. Available: lexicon (default), remote"
    )]
    model: String,
    #[arg(long, help = "Base URL of the remote inference service")]
    model_url: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve {
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
        #[arg(long, default_value_t = 8000)]
        port: u16,
    },
    /// Analyze the article behind a URL and print the report
    Url { url: String },
    /// Analyze raw text and print the report
    Text { text: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let classifier = create_classifier(&cli.model, cli.model_url.as_deref())?;
    info!("🧠 Classifier initialized successfully (using {})", classifier.name());

    let analyzer = CredibilityAnalyzer::new(classifier)?;

    match cli.command {
        Commands::Serve { host, port } => {
            let app = create_app(AppState { analyzer });
            let addr = format!("{}:{}", host, port);
            info!("📡 Listening on {}", addr);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            axum::serve(listener, app).await?;
        }
        Commands::Url { url } => {
            let report = analyzer.analyze_url(&url).await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Text { text } => {
            let report = analyzer.analyze_text(&text).await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

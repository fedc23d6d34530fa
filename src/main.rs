use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use skillquiz::ai::{AiClient, AiConfig, FileQuestionSource, Language, QuestionSource};
use skillquiz::history::HistoryStore;
use skillquiz::{App, Collaborators};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the questions from instead of the AI generator
    #[arg(short, long)]
    questions: Option<PathBuf>,

    /// File the quiz history is persisted to
    #[arg(long, default_value = "quiz-history.json")]
    history: PathBuf,

    /// Language for generated questions and resources
    #[arg(short, long, value_enum, default_value_t = Language::French)]
    language: Language,

    /// Base URL of the OpenAI-compatible backend (default: SKILLQUIZ_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Model to generate with (default: SKILLQUIZ_MODEL)
    #[arg(long)]
    model: Option<String>,
}

#[tokio::main]
async fn main() {
    pretty_env_logger::init();
    let args = Args::parse();

    let config = AiConfig::from_env()
        .map(|config| config.with_base_url(args.base_url).with_model(args.model));
    let client = Arc::new(AiClient::new(config));

    let questions: Arc<dyn QuestionSource + Send + Sync> = match args.questions {
        Some(path) => Arc::new(FileQuestionSource::new(path)),
        None => client.clone(),
    };
    let collaborators = Collaborators {
        questions,
        resources: client,
    };

    let history = HistoryStore::load(args.history);
    let app = App::new(args.language, history);

    if let Err(e) = skillquiz::run(app, collaborators).await {
        eprintln!("Error running quiz: {e}");
        std::process::exit(1);
    }
}

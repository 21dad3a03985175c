use clap::Parser;
use tracing_subscriber::EnvFilter;

use kalima_config::Config;
use kalima_dictionary::catalog::DictionaryCatalog;
use kalima_solver::broker::SolverClient;
use kalima_types::Language;

/// Letter-bag word solver for the kalima puzzle game
#[derive(Parser)]
#[command(name = "kalima", version)]
struct Cli {
    /// Available letters, e.g. "letr" or "l,e,t,r"
    #[arg(short, long)]
    letters: String,

    /// Target language (en or ar)
    #[arg(long, default_value = "en")]
    lang: String,

    /// Dictionary category
    #[arg(short, long, default_value = "general")]
    category: String,

    /// Minimum word length; falls back to the configured default
    #[arg(short, long)]
    min_len: Option<i64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = Config::new();

    let lang: Language = cli.lang.parse().map_err(anyhow::Error::msg)?;
    let min_len = cli
        .min_len
        .unwrap_or(config.solver.default_min_len as i64);

    let mut catalog =
        DictionaryCatalog::new().with_overlay_dir(config.dictionary.overlay_dir.clone());
    if config.dictionary.enabled {
        catalog.register(Box::new(kalima_lang_english::EnglishLexicon::new()));
        catalog.register(Box::new(kalima_lang_arabic::ArabicLexicon::new()));
    } else {
        tracing::warn!("dictionaries disabled, every solve will report unavailable");
    }

    let client = SolverClient::spawn(&config.solver, catalog);

    let letters: Vec<String> = cli
        .letters
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .map(String::from)
        .collect();

    let result = client.find_words(letters, lang, cli.category, min_len).await;

    // Tear down before reporting so the error path exits cleanly too
    client.shutdown();

    let words = result?;
    if words.is_empty() {
        println!("no words found");
    } else {
        for word in &words {
            println!("{word}");
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if atty::is(atty::Stream::Stderr) {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    }
}

use anyhow::Context;
use autocomplete_suggest::{
    config::Config,
    metrics,
    search::{SearchMode, SuggestionIndex},
    store::create_store,
    suggest::{SuggestOptions, SuggestionResolver},
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "suggest", version)]
#[command(about = "Facet autocomplete suggestions from serialized search indexes", long_about = None)]
struct Cli {
    /// Redis URL, overrides store.redis_url from the configuration
    #[arg(long, env = "REDIS_URL")]
    redis_url: Option<String>,

    /// Print Prometheus metrics to stderr before exiting
    #[arg(long)]
    metrics: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up suggestions for a facet type
    Query {
        #[arg(value_name = "TYPE")]
        facet_type: String,

        #[arg(value_name = "QUERY")]
        query: String,

        #[arg(short, long)]
        limit: Option<usize>,

        /// speed or match
        #[arg(short, long)]
        mode: Option<SearchMode>,
    },

    /// Build a serialized index from values and write it to a file
    BuildIndex {
        #[arg(value_name = "VALUE", required = true)]
        values: Vec<String>,

        #[arg(short, long)]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = Config::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        eprintln!("Using default configuration");
        Config::default()
    });
    if let Some(redis_url) = cli.redis_url {
        config.store.redis_url = redis_url;
    }

    init_tracing(&config);

    if config.observability.prometheus_enabled {
        if let Err(e) = metrics::init_metrics() {
            tracing::warn!("Failed to initialize metrics: {}", e);
        }
    }

    match cli.command {
        Commands::Query {
            facet_type,
            query,
            limit,
            mode,
        } => {
            let store = create_store(&config.store)
                .await
                .context("failed to initialize index store")?;
            let resolver =
                SuggestionResolver::new(store).with_defaults(SuggestOptions::from(&config.suggest));

            let mut options = *resolver.defaults();
            if let Some(limit) = limit {
                options = options.with_limit(limit);
            }
            if let Some(mode) = mode {
                options = options.with_mode(mode);
            }

            let collection = resolver.resolve(&facet_type, &query, Some(options)).await;
            println!("{}", serde_json::to_string_pretty(&collection)?);
        }

        Commands::BuildIndex { values, output } => {
            let index = SuggestionIndex::build(&values).context("failed to build index")?;
            let bytes = index.export().context("failed to serialize index")?;

            std::fs::write(&output, &bytes)
                .with_context(|| format!("failed to write {}", output.display()))?;

            tracing::info!(
                values = index.len(),
                bytes = bytes.len(),
                output = %output.display(),
                "Index written"
            );
        }
    }

    if cli.metrics {
        eprintln!("{}", metrics::gather_metrics());
    }

    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = &config.observability.log_level;
        format!("autocomplete_suggest={level},suggest={level}").into()
    });

    // stdout carries the JSON result, logs go to stderr
    let registry = tracing_subscriber::registry().with(filter);
    if config.observability.json_logs {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

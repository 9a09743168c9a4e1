use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use glossa_app::{StdinHost, Widget};
use glossa_config::{Config, FailurePolicy, RenderMode};
use glossa_core::DictionaryApiClient;
use glossa_ui::TextRenderer;
use tokio::io::BufReader;
use tokio::signal;
use tracing_subscriber::EnvFilter;

/// Look up the first word of each input line in an online English dictionary
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON config file; environment variables are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format for entries
    #[arg(long)]
    render: Option<RenderMode>,

    /// Keep (`retain`) or clear (`clear`) the shown entry when a lookup fails
    #[arg(long)]
    failure_policy: Option<FailurePolicy>,

    /// Quiet period before a selection is looked up
    #[arg(long)]
    debounce_ms: Option<u64>,

    /// Dictionary endpoint the word is appended to
    #[arg(long)]
    api_url: Option<String>,

    /// How long to wait for the last lookup after input ends
    #[arg(long, default_value_t = 3000)]
    linger_ms: u64,

    /// Log as JSON
    #[arg(long)]
    json_logs: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    init_tracing(args.verbose, args.json_logs)?;

    let config = load_config(&args)?;
    let linger = config.debounce() + Duration::from_millis(args.linger_ms);

    let client = Arc::new(DictionaryApiClient::from_config(&config.dictionary)?);
    let renderer = Box::new(TextRenderer::new(std::io::stdout(), &config.ui));
    let host = Arc::new(StdinHost::new());

    tracing::info!("glossa v{} using {}", env!("CARGO_PKG_VERSION"), config.dictionary.api_url);

    let widget = Widget::mount(config, host.clone(), client, renderer);

    let input = async {
        host.watch_lines(BufReader::new(tokio::io::stdin())).await?;
        tracing::info!("Input closed");
        tokio::time::sleep(linger).await;
        Ok::<_, anyhow::Error>(())
    };

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        result = input => {
            if let Err(e) = result {
                tracing::error!("Reading input failed: {}", e);
            }
        }
    }

    widget.unmount().await
}

fn init_tracing(verbose: bool, json: bool) -> anyhow::Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = if json {
        builder.json().try_init()
    } else {
        builder.with_ansi(atty::is(atty::Stream::Stderr)).try_init()
    };

    result.map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}

fn load_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        Some(path) => {
            tracing::info!("Loading config from {}", path.display());
            Config::load(path)?
        }
        None => Config::new(),
    };

    if let Some(render) = args.render {
        config.ui.render_mode = render;
    }
    if let Some(policy) = args.failure_policy {
        config.failure_policy = policy;
    }
    if let Some(debounce_ms) = args.debounce_ms {
        config.debounce_ms = debounce_ms;
    }
    if let Some(api_url) = &args.api_url {
        config.dictionary.api_url = api_url.clone();
    }

    Ok(config)
}

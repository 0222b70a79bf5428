use anyhow::{Context, Result as AnyhowResult};
use clap::Parser;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::stdout;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use topic_config::app::App;
use topic_config::config::AppConfig;
use topic_config::services::terminal_modes::{self, TerminalModes};
use topic_config::services::{deployment, log_dirs, tracing_setup, ConfigApi, RestConfigApi};
use topic_config::view::theme::Theme;

/// Terminal settings screen for topic configuration
#[derive(Parser, Debug)]
#[command(name = "topic-config")]
#[command(about = "View and edit the configuration entries of a topic", long_about = None)]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Base URL of the config API
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Topic to edit (default: the cluster-wide topic defaults)
    #[arg(long, value_name = "NAME")]
    topic: Option<String>,

    /// Treat the cluster as a Serverless deployment
    #[arg(long)]
    serverless: bool,

    /// Path to log file for diagnostics (default: XDG state dir)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,

    /// Print the directories used by topic-config and exit
    #[arg(long)]
    show_paths: bool,
}

/// Load the config file and apply command-line overrides
fn load_config(args: &Args, path: &Path) -> AnyhowResult<AppConfig> {
    // An explicitly named file has to exist
    let loaded = if args.config.is_some() {
        AppConfig::load_from_file(path)
    } else {
        AppConfig::load_or_default(path)
    };
    let mut config =
        loaded.with_context(|| format!("Failed to load config from {}", path.display()))?;

    if let Some(url) = &args.url {
        config.api_url = url.clone();
    }
    if let Some(topic) = &args.topic {
        config.topic = Some(topic.clone());
    }
    if args.serverless {
        config.serverless = true;
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn main() -> AnyhowResult<()> {
    let args = Args::parse();
    let config_path = args.config.clone().unwrap_or_else(AppConfig::default_path);

    // Handle --show-paths early (no terminal setup needed)
    if args.show_paths {
        log_dirs::print_all_paths(&config_path);
        return Ok(());
    }

    let config = load_config(&args, &config_path)?;

    if args.dump_config {
        let json =
            serde_json::to_string_pretty(&config).context("Failed to serialize config")?;
        println!("{}", json);
        return Ok(());
    }

    let log_file = args.log_file.clone().unwrap_or_else(log_dirs::main_log_path);
    if let Err(e) = tracing_setup::init_global(&log_file) {
        eprintln!("Warning: could not open log file {}: {}", log_file.display(), e);
    }
    log_dirs::cleanup_stale_logs();
    tracing::info!(topic = ?config.topic, url = %config.api_url, "topic-config starting");

    deployment::set_serverless(config.serverless);

    let api: Arc<dyn ConfigApi> = Arc::new(RestConfigApi::new(
        &config.api_url,
        config.request_timeout(),
        config.auth_token.clone(),
    ));
    let mut app = App::new(config.topic.clone(), api, Theme::from_name(&config.theme))?;

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        terminal_modes::emergency_cleanup();
        original_hook(panic);
    }));

    let mut terminal_modes = TerminalModes::enable()?;
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
    terminal.clear()?;

    let result = app.run(&mut terminal);

    let _ = terminal.show_cursor();
    terminal_modes.undo();
    tracing::info!("topic-config exiting");
    result
}

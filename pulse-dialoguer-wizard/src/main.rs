//! pulse: take a resumable survey in the terminal.
//!
//! Progress is saved after every answer; quitting with Ctrl+C and running the
//! command again within the retention window offers to resume.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use pulse_dialoguer_wizard::{DialoguerHost, HostError, JsonLinesSink};
use pulse_survey::{Catalog, EngineConfig, FileStore, SurveyWizard};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "pulse=info,pulse_survey=info,pulse_dialoguer_wizard=info";

#[derive(Debug, Parser)]
#[command(name = "pulse", version, about = "Take a resumable survey in the terminal")]
struct Args {
    /// Survey to take. Bundled surveys: engagement-2026, quick-pulse.
    #[arg(long, env = "PULSE_SURVEY_ID", default_value = example_surveys::ENGAGEMENT_SURVEY_ID)]
    survey: String,

    /// Respondent id. Anonymous sessions share one progress slot.
    #[arg(long, env = "PULSE_RESPONDENT")]
    respondent: Option<String>,

    /// Load the catalog from a JSON file instead of the bundled surveys.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Engine settings (TOML).
    #[arg(long, env = "PULSE_CONFIG")]
    config: Option<PathBuf>,

    /// Questions per page. Overrides the config file.
    #[arg(long, env = "PULSE_PAGE_SIZE")]
    page_size: Option<usize>,

    /// Days saved progress stays resumable. Overrides the config file.
    #[arg(long, env = "PULSE_RETENTION_DAYS")]
    retention_days: Option<i64>,

    /// Directory holding saved progress.
    #[arg(long, env = "PULSE_STORE_DIR")]
    store_dir: Option<PathBuf>,

    /// File that receives one JSON line per completed survey.
    #[arg(long, env = "PULSE_RESULTS", default_value = "submissions.jsonl")]
    results: PathBuf,

    /// Disable colors in prompts.
    #[arg(long)]
    plain: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = engine_config(&args)?;
    let catalog = load_catalog(&args)?;
    let store_dir = args.store_dir.clone().unwrap_or_else(default_store_dir);
    let store = FileStore::open(&store_dir)
        .with_context(|| format!("Failed to open progress store at {}", store_dir.display()))?;
    let sink = JsonLinesSink::new(&args.results);

    info!(survey = %args.survey, store = %store_dir.display(), "starting session");

    if let Some(prelude) = &catalog.prelude {
        println!("{prelude}\n");
    }
    let epilogue = catalog.epilogue.clone();

    let mut wizard = SurveyWizard::new(catalog, store, sink)
        .with_config(config)
        .context("Invalid engine settings")?;

    let host = if args.plain {
        DialoguerHost::plain()
    } else {
        DialoguerHost::new()
    };

    match host.run(&mut wizard, &args.survey, args.respondent.as_deref()) {
        Ok(()) => {}
        Err(HostError::Cancelled) => {
            println!(
                "\nYour progress is saved. Run the survey again to pick up where you left off."
            );
            return Ok(());
        }
        Err(err) => return Err(err).context("Survey session failed"),
    }

    match epilogue {
        Some(epilogue) => println!("\n{epilogue}"),
        None => println!("\nThank you! Your responses were recorded."),
    }
    Ok(())
}

/// Defaults, then the TOML file, then flags and environment variables.
fn engine_config(args: &Args) -> Result<EngineConfig> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::load(path).context("Failed to load engine settings")?,
        None => EngineConfig::default(),
    };
    if let Some(page_size) = args.page_size {
        config.page_size = page_size;
    }
    if let Some(retention_days) = args.retention_days {
        config.retention_days = retention_days;
    }
    config.validate().context("Invalid engine settings")?;
    Ok(config)
}

fn load_catalog(args: &Args) -> Result<Catalog> {
    match &args.catalog {
        Some(path) => read_catalog(path),
        None => match example_surveys::by_id(&args.survey) {
            Some(catalog) => Ok(catalog),
            None => bail!(
                "Unknown survey '{}'. Pass --catalog to load one from a file.",
                args.survey
            ),
        },
    }
}

fn read_catalog(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog {}", path.display()))?;
    let catalog: Catalog = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse catalog {}", path.display()))?;
    catalog
        .check()
        .with_context(|| format!("Catalog {} is incomplete", path.display()))?;
    Ok(catalog)
}

fn default_store_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("pulse-survey"))
        .unwrap_or_else(|| PathBuf::from("./pulse-survey-data"))
}

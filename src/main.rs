use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, level_filters::LevelFilter, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cineteca::cli_style::{get_styles, print_banner};
use cineteca::config::{AppConfig, CliConfig, FileConfig};
use cineteca::legacy_import::import_legacy_file;
use cineteca::metadata::OmdbClient;
use cineteca::movie_store::SqliteMovieStore;
use cineteca::shell::Shell;

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
#[command(styles=get_styles(), version, about = "Interactive movie catalog manager")]
struct CliArgs {
    /// Directory holding the catalog database and the generated website.
    #[clap(value_parser = parse_path)]
    pub data_dir: Option<PathBuf>,

    /// Path to a TOML configuration file.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// Path to the SQLite movie database file.
    #[clap(long, value_parser = parse_path)]
    pub db: Option<PathBuf>,

    /// Legacy JSON movie file to import into the database at startup.
    #[clap(long, value_parser = parse_path)]
    pub legacy_json: Option<PathBuf>,

    /// Path to the HTML template used by the website generator.
    #[clap(long, value_parser = parse_path)]
    pub template: Option<PathBuf>,

    /// Output path of the generated website.
    #[clap(long, value_parser = parse_path)]
    pub output: Option<PathBuf>,

    /// OMDb API key, falls back to the OMDB_API_KEY environment variable.
    #[clap(long)]
    pub omdb_api_key: Option<String>,

    /// Base URL of the OMDb API.
    #[clap(long)]
    pub omdb_base_url: Option<String>,
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    let file_config = cli_args
        .config
        .as_ref()
        .map(|path| FileConfig::load(path))
        .transpose()?;
    let cli_config = CliConfig {
        data_dir: cli_args.data_dir,
        db_path: cli_args.db,
        legacy_json_path: cli_args.legacy_json,
        template_path: cli_args.template,
        output_path: cli_args.output,
        omdb_api_key: cli_args.omdb_api_key,
        omdb_base_url: cli_args.omdb_base_url,
    };
    let config = AppConfig::resolve(&cli_config, file_config)?;

    print_banner();
    println!(
        "cineteca {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH")
    );

    info!("Opening SQLite movie database at {:?}...", config.db_path);
    let store = SqliteMovieStore::new(&config.db_path)?;

    if config.omdb_api_key.is_none() {
        warn!("No OMDb API key configured, adding movies will not work");
    }
    let omdb = OmdbClient::new(config.omdb_base_url.clone(), config.omdb_api_key.clone())?;

    if let Some(legacy_path) = &config.legacy_json_path {
        import_legacy_file(legacy_path, &store, &omdb)?;
    }

    Shell::new(&store, &omdb, &config).run()
}

mod file_config;

pub use file_config::{FileConfig, OmdbConfig};

use crate::metadata::DEFAULT_OMDB_BASE_URL;
use anyhow::{bail, Result};
use std::path::PathBuf;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub data_dir: Option<PathBuf>,
    pub db_path: Option<PathBuf>,
    pub legacy_json_path: Option<PathBuf>,
    pub template_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub omdb_api_key: Option<String>,
    pub omdb_base_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub db_path: PathBuf,
    pub legacy_json_path: Option<PathBuf>,
    pub template_path: PathBuf,
    pub output_path: PathBuf,
    pub omdb_api_key: Option<String>,
    pub omdb_base_url: String,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present; the OMDb API key falls
    /// back to the OMDB_API_KEY environment variable.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let data_dir = file
            .data_dir
            .map(PathBuf::from)
            .or_else(|| cli.data_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."));

        if !data_dir.exists() {
            bail!("Data directory does not exist: {:?}", data_dir);
        }
        if !data_dir.is_dir() {
            bail!("data_dir is not a directory: {:?}", data_dir);
        }

        let db_path = file
            .db_path
            .map(PathBuf::from)
            .or_else(|| cli.db_path.clone())
            .unwrap_or_else(|| data_dir.join("movies.db"));

        let legacy_json_path = file
            .legacy_json_path
            .map(PathBuf::from)
            .or_else(|| cli.legacy_json_path.clone());

        let template_path = file
            .template_path
            .map(PathBuf::from)
            .or_else(|| cli.template_path.clone())
            .unwrap_or_else(|| PathBuf::from("assets/index_template.html"));

        let output_path = file
            .output_path
            .map(PathBuf::from)
            .or_else(|| cli.output_path.clone())
            .unwrap_or_else(|| data_dir.join("index.html"));

        let omdb_file = file.omdb.unwrap_or_default();
        let omdb_api_key = omdb_file
            .api_key
            .or_else(|| cli.omdb_api_key.clone())
            .or_else(|| std::env::var("OMDB_API_KEY").ok())
            .filter(|key| !key.is_empty());
        let omdb_base_url = omdb_file
            .base_url
            .or_else(|| cli.omdb_base_url.clone())
            .unwrap_or_else(|| DEFAULT_OMDB_BASE_URL.to_string());

        Ok(Self {
            data_dir,
            db_path,
            legacy_json_path,
            template_path,
            output_path,
            omdb_api_key,
            omdb_base_url,
        })
    }
}

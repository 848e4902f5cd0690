use crate::config::PartialOptions;
use crate::error::{CliError, ConfigError, Result};
use crate::utils::resolve_path;
use figment::{
    providers::{Env, Format as _, Json, Serialized},
    Figment,
};
use std::path::Path;

/// Config file picked up from the working directory when `--config` is absent.
pub const CONFIG_FILE_NAME: &str = "bun-build.config.json";

const ENV_PREFIX: &str = "BUN_BUILD_";

const ENV_KEYS: &[&str] = &[
    "mode",
    "lib",
    "bundle",
    "target",
    "src",
    "ignore",
    "out",
    "tsc",
    "naming",
    "format",
    "splitting",
    "external",
    "sourcemap",
    "minify",
    "bun_bin",
];

/// `BUN_BUILD_*` variables keyed by the same names the config file and the
/// CLI layer use, so every layer merges into a single key per field.
fn env_provider() -> Env {
    Env::prefixed(ENV_PREFIX)
        .only(ENV_KEYS)
        .map(|key| field_name(key.as_str()).into())
        .lowercase(false)
}

/// Field name for an environment key: `BUN_BIN` → `bunBin`, `OUT` → `out`.
fn field_name(env_key: &str) -> String {
    let mut name = String::with_capacity(env_key.len());
    let mut upper_next = false;
    for c in env_key.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            name.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            name.push(c.to_ascii_lowercase());
        }
    }
    name
}

impl PartialOptions {
    /// Load options from every source.
    /// Priority: `overrides` (CLI args) > environment variables > config file
    ///
    /// Defaults are not applied here; call [`PartialOptions::resolve`] on the
    /// result.
    pub fn load(overrides: PartialOptions, cwd: &Path, config_path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new();

        let config_file = match config_path {
            Some(path) => {
                let path = resolve_path(path, cwd);
                if !path.is_file() {
                    return Err(CliError::FileNotFound(path));
                }
                Some(path)
            }
            None => {
                let default_path = cwd.join(CONFIG_FILE_NAME);
                default_path.is_file().then_some(default_path)
            }
        };

        if let Some(path) = config_file {
            tracing::debug!("Loading config file {}", path.display());
            figment = figment.merge(Json::file(path));
        }

        // BUN_BUILD_OUT, BUN_BUILD_MINIFY, BUN_BUILD_BUN_BIN, ...
        figment = figment.merge(env_provider());

        // Unset CLI fields are skipped during serialization, so only flags the
        // user actually passed override the layers below
        figment = figment.merge(Serialized::defaults(overrides));

        figment
            .extract()
            .map_err(|e| ConfigError::Load(e.to_string()).into())
    }
}

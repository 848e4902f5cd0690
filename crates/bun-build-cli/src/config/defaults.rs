use std::path::PathBuf;

use crate::config::types::{Format, SourceMapMode, Target};

pub fn default_target() -> Target {
    Target::Bun
}

pub fn default_src() -> PathBuf {
    PathBuf::from("./src")
}

pub fn default_out() -> PathBuf {
    PathBuf::from("./out")
}

pub fn default_tsc() -> bool {
    true
}

pub fn default_naming() -> String {
    "[dir]/[name].mjs".to_string()
}

pub fn default_format() -> Format {
    Format::Esm
}

pub fn default_splitting() -> bool {
    true
}

pub fn default_external() -> Vec<String> {
    vec!["*".to_string()]
}

pub fn default_sourcemap() -> SourceMapMode {
    SourceMapMode::None
}

pub fn default_minify() -> bool {
    false
}

pub fn default_bun_bin() -> PathBuf {
    PathBuf::from("bun")
}

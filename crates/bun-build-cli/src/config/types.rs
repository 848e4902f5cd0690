use clap::ValueEnum;
use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Build preset selected with `--lib` / `--bundle` or `mode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Non-minified output for a server-like runtime
    Lib,
    /// Minified output for the browser
    Bundle,
}

impl Mode {
    /// Parse the `mode` option. Only `lib` and `bundle` are recognized.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "lib" => Some(Mode::Lib),
            "bundle" => Some(Mode::Bundle),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Lib => "lib",
            Mode::Bundle => "bundle",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Intended execution environment of the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// Bun runtime
    #[value(name = "bun")]
    Bun,
    /// Node.js
    #[value(name = "node")]
    Node,
    /// Browsers
    #[value(name = "browser")]
    Browser,
}

impl Target {
    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Bun => "bun",
            Target::Node => "node",
            Target::Browser => "browser",
        }
    }
}

/// Module format of the generated files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// ECMAScript modules
    #[value(name = "esm")]
    Esm,
    /// CommonJS
    #[value(name = "cjs")]
    Cjs,
    /// Immediately Invoked Function Expression
    #[value(name = "iife")]
    Iife,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Esm => "esm",
            Format::Cjs => "cjs",
            Format::Iife => "iife",
        }
    }
}

/// Source map generation mode.
///
/// Config files may also give a boolean: `true` means `linked`, `false`
/// means `none`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SourceMapMode {
    /// No source maps
    #[value(name = "none")]
    None,
    /// Separate `.map` files referenced by a `sourceMappingURL` comment
    #[value(name = "linked")]
    Linked,
    /// Source map embedded in the output as a data URL
    #[value(name = "inline")]
    Inline,
    /// Separate `.map` files without a reference comment
    #[value(name = "external")]
    External,
}

impl SourceMapMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "none" => Some(SourceMapMode::None),
            "linked" => Some(SourceMapMode::Linked),
            "inline" => Some(SourceMapMode::Inline),
            "external" => Some(SourceMapMode::External),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceMapMode::None => "none",
            SourceMapMode::Linked => "linked",
            SourceMapMode::Inline => "inline",
            SourceMapMode::External => "external",
        }
    }
}

impl<'de> Deserialize<'de> for SourceMapMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Flag(bool),
            Name(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Flag(true) => Ok(SourceMapMode::Linked),
            Repr::Flag(false) => Ok(SourceMapMode::None),
            Repr::Name(name) => SourceMapMode::parse(&name).ok_or_else(|| {
                de::Error::invalid_value(
                    Unexpected::Str(&name),
                    &"none, linked, inline, external or a boolean",
                )
            }),
        }
    }
}

/// A pattern option given either as one string or as a list.
///
/// Used for `ignore` and `external`, which config files and environment
/// variables commonly spell as a bare string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Patterns {
    One(String),
    Many(Vec<String>),
}

impl Patterns {
    /// Flatten into a list, dropping empty entries.
    pub fn into_list(self) -> Vec<String> {
        let items = match self {
            Patterns::One(pattern) => vec![pattern],
            Patterns::Many(patterns) => patterns,
        };
        items.into_iter().filter(|p| !p.is_empty()).collect()
    }
}

impl From<Vec<String>> for Patterns {
    fn from(patterns: Vec<String>) -> Self {
        Patterns::Many(patterns)
    }
}

impl From<&str> for Patterns {
    fn from(pattern: &str) -> Self {
        Patterns::One(pattern.to_string())
    }
}

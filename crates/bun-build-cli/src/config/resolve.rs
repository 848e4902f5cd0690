use crate::config::{defaults::*, BuildOptions, Mode, PartialOptions};
use crate::error::{ConfigError, Result};

impl PartialOptions {
    /// Resolve into [`BuildOptions`], validating the preset selection and
    /// filling every unset field with its default.
    ///
    /// # Errors
    ///
    /// - `ConfigError::InvalidValue` when `mode` is not "lib" or "bundle"
    /// - `ConfigError::ConflictingOptions` when library and bundle are both
    ///   requested, in any combination of `mode`, `lib` and `bundle`
    pub fn resolve(self) -> Result<BuildOptions> {
        let mode = self.resolve_mode()?;

        Ok(BuildOptions {
            mode,
            target: self.target.unwrap_or_else(default_target),
            src: self.src.unwrap_or_else(default_src),
            ignore: self.ignore.map(|p| p.into_list()).unwrap_or_default(),
            out: self.out.unwrap_or_else(default_out),
            tsc: self.tsc.unwrap_or_else(default_tsc),
            naming: self.naming.unwrap_or_else(default_naming),
            format: self.format.unwrap_or_else(default_format),
            splitting: self.splitting.unwrap_or_else(default_splitting),
            external: self
                .external
                .map(|p| p.into_list())
                .unwrap_or_else(default_external),
            sourcemap: self.sourcemap.unwrap_or_else(default_sourcemap),
            minify: self.minify.unwrap_or_else(default_minify),
            bun_bin: self.bun_bin.unwrap_or_else(default_bun_bin),
        })
    }

    /// Whether a preset or an explicit target was chosen by any source.
    ///
    /// The CLI assumes library mode when this is false.
    pub fn has_mode_or_target(&self) -> bool {
        self.mode.is_some()
            || self.lib == Some(true)
            || self.bundle == Some(true)
            || self.target.is_some()
    }

    fn resolve_mode(&self) -> Result<Option<Mode>> {
        let explicit = match self.mode.as_deref() {
            None => None,
            Some(value) => Some(Mode::parse(value).ok_or_else(|| ConfigError::InvalidValue {
                field: "mode".to_string(),
                value: value.to_string(),
                hint: "Mode must be 'lib' or 'bundle'".to_string(),
            })?),
        };

        let lib = self.lib == Some(true);
        let bundle = self.bundle == Some(true);

        if lib && bundle {
            return Err(ConfigError::ConflictingOptions(
                "Cannot specify both lib and bundle options".to_string(),
            )
            .into());
        }

        match explicit {
            Some(Mode::Lib) if bundle => Err(ConfigError::ConflictingOptions(
                "mode 'lib' contradicts bundle: true".to_string(),
            )
            .into()),
            Some(Mode::Bundle) if lib => Err(ConfigError::ConflictingOptions(
                "mode 'bundle' contradicts lib: true".to_string(),
            )
            .into()),
            Some(mode) => Ok(Some(mode)),
            None if lib => Ok(Some(Mode::Lib)),
            None if bundle => Ok(Some(Mode::Bundle)),
            None => Ok(None),
        }
    }
}

//! Startup settings read from the process environment.

use camino::{Utf8Path, Utf8PathBuf};

/// Environment variable naming the configuration file.
pub const CONFIG_VAR: &str = "CONFIG";
/// Environment variable listing startup extensions, comma separated.
pub const EXTENSIONS_VAR: &str = "EXTENSIONS";
/// Environment variable selecting the composition root kind.
pub const ROOT_KIND_VAR: &str = "ROOT_KIND";

/// Inputs to a startup pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartupSettings {
    config_path: Option<Utf8PathBuf>,
    extensions: Vec<String>,
    root_kind: Option<String>,
}

impl StartupSettings {
    /// Creates empty settings: no configuration file, no extensions and the
    /// default root kind.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads settings from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, which maps a variable name to its
    /// value.
    ///
    /// Blank values are treated as absent. Extension names are split on `,`
    /// and trimmed; empty entries are dropped and order is preserved.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let extensions = non_blank(EXTENSIONS_VAR)
            .map(|raw| parse_extensions(&raw))
            .unwrap_or_default();

        Self {
            config_path: non_blank(CONFIG_VAR).map(Utf8PathBuf::from),
            extensions,
            root_kind: non_blank(ROOT_KIND_VAR),
        }
    }

    /// Sets the configuration file path.
    #[must_use]
    pub fn with_config_path(mut self, path: impl Into<Utf8PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Sets the extension names to run after composition.
    #[must_use]
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the composition root kind.
    #[must_use]
    pub fn with_root_kind(mut self, kind: impl Into<String>) -> Self {
        self.root_kind = Some(kind.into());
        self
    }

    /// Returns the configuration file path, if any.
    #[must_use]
    pub fn config_path(&self) -> Option<&Utf8Path> {
        self.config_path.as_deref()
    }

    /// Returns the extension names in declared order.
    #[must_use]
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Returns the requested composition root kind, if any.
    #[must_use]
    pub fn root_kind(&self) -> Option<&str> {
        self.root_kind.as_deref()
    }
}

fn parse_extensions(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .collect()
}

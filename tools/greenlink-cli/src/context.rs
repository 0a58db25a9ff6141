//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use greenlink_cache::{Cache, FileBackend};
use greenlink_commerce::cart::{Cart, CartEvent, CartStore};
use greenlink_commerce::catalog::Catalog;

use crate::config::CliConfig;
use crate::output::Output;

/// Config file names searched for, nearest directory first.
pub const CONFIG_NAMES: [&str; 3] = ["greenlink.toml", ".greenlink.toml", "greenlink.json"];

/// Catalog used when the config names none.
const BUILTIN_CATALOG: &str = include_str!("../catalog.json");

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Where the config was read from, if anywhere.
    pub config_path: Option<PathBuf>,
    /// Config files that were found but skipped, with the reason. Loading
    /// happens before logging is set up, so these are reported afterwards.
    pub skipped_configs: Vec<(PathBuf, String)>,
}

impl Context {
    /// Load context from an explicit config file or the nearest one found.
    pub fn load(config_path: Option<&Path>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let mut skipped_configs = Vec::new();
        let (config, config_path) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(path.to_path_buf()))
        } else {
            match Self::find_config(&cwd, &mut skipped_configs) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        Ok(Self {
            config,
            output,
            cwd,
            config_path,
            skipped_configs,
        })
    }

    /// Find a config file in the directory tree. Files that fail to load
    /// are recorded in `skipped` and the search goes on.
    fn find_config(
        start: &Path,
        skipped: &mut Vec<(PathBuf, String)>,
    ) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    match CliConfig::load(&config_path) {
                        Ok(config) => return Some((config, config_path)),
                        Err(e) => skipped.push((config_path, format!("{:#}", e))),
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Directory holding cart slot files.
    pub fn data_dir(&self) -> PathBuf {
        match &self.config.store.data_dir {
            Some(dir) => self.resolve_path(dir),
            None => dirs_path().join("greenlink"),
        }
    }

    /// Open the configured cart slot.
    ///
    /// Load problems never fail here; a discarded snapshot is reported as a
    /// warning and the cart starts empty.
    pub fn open_store(&self) -> Result<CartStore<FileBackend>> {
        let dir = self.data_dir();
        let backend = FileBackend::open(dir.clone())
            .with_context(|| format!("Failed to open data directory: {}", dir.display()))?;
        self.output.debug(&format!("Data directory: {}", dir.display()));

        let mut store = CartStore::load(
            Cache::new(backend),
            self.config.store.slot.clone(),
            self.config.store.currency,
        );

        for event in store.take_events() {
            if let CartEvent::SnapshotDiscarded { reason } = event {
                self.output
                    .warn(&format!("Saved cart was unreadable and has been reset ({})", reason));
            }
        }

        store.subscribe(|event: &CartEvent, cart: &Cart| {
            tracing::debug!(?event, items = cart.item_count(), "cart event");
        });

        Ok(store)
    }

    /// Load the configured catalog, or the built-in one.
    pub fn catalog(&self) -> Result<Catalog> {
        let currency = self.config.store.currency;
        match &self.config.catalog.path {
            Some(path) => {
                let path = self.resolve_path(path);
                let text = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
                Catalog::from_json(&text, currency)
                    .with_context(|| format!("Invalid catalog: {}", path.display()))
            }
            None => Catalog::from_json(BUILTIN_CATALOG, currency).context("Invalid built-in catalog"),
        }
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }
}

/// Get the platform-specific data directory.
fn dirs_path() -> PathBuf {
    if let Some(home) = std::env::var_os("HOME") {
        PathBuf::from(home).join(".local").join("share")
    } else {
        PathBuf::from("/tmp")
    }
}

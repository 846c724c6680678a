use anyhow::{Context, Result};
use once_cell::sync::OnceCell;

use kb_render::Catalog;

use crate::catalog::{MemoryCatalog, SearchBackend};
use crate::config::Config;

pub struct Services {
    config: Config,
    backend: Box<dyn SearchBackend>,
    l10n: Catalog,
}

impl Services {
    pub fn build(config: Config) -> Result<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => MemoryCatalog::from_path(path)?,
            None => MemoryCatalog::sample().context("built-in sample catalog")?,
        };
        tracing::info!(
            "[catalog] loaded {} documents into {} backend from {}",
            catalog.len(),
            catalog.backend_name(),
            config
                .catalog_path
                .as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "<sample>".to_string())
        );
        Ok(Self { config, backend: Box::new(catalog), l10n: Catalog::english() })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn backend(&self) -> &dyn SearchBackend {
        &*self.backend
    }

    pub fn localizer(&self) -> &Catalog {
        &self.l10n
    }
}

static SERVICES: OnceCell<Services> = OnceCell::new();

/// Install the process-wide services; fails if they already exist.
pub fn init(config: Config) -> Result<()> {
    let services = Services::build(config)?;
    SERVICES
        .set(services)
        .map_err(|_| anyhow::anyhow!("services already initialized"))
}

/// Services installed by [`init`], or built from the environment on first use.
pub fn services() -> &'static Services {
    SERVICES.get_or_init(|| {
        Services::build(Config::from_env()).unwrap_or_else(|e| {
            tracing::error!("[services] {:#}; serving the built-in sample catalog", e);
            let config = Config { catalog_path: None, ..Config::from_env() };
            Services {
                config,
                backend: Box::new(MemoryCatalog::sample().unwrap_or_default()),
                l10n: Catalog::english(),
            }
        })
    })
}

pub fn config() -> &'static Config {
    services().config()
}

pub fn backend() -> &'static dyn SearchBackend {
    services().backend()
}

pub fn localizer() -> &'static Catalog {
    services().localizer()
}

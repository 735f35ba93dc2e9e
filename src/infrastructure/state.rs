//! Shared application state

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::application::ports::outbound::{IdentityTranslator, TranslationPort};
use crate::application::services::{register, DispatchService, MenuAssembler, SystemRegistration};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::host_commands::HostCommandLog;
use crate::infrastructure::i18n::CatalogTranslator;

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    pub i18n: Arc<dyn TranslationPort>,
    pub registration: SystemRegistration,
    pub menu: MenuAssembler,
}

impl AppState {
    pub async fn new(config: AppConfig) -> Result<Self> {
        let i18n: Arc<dyn TranslationPort> = match &config.locale_path {
            Some(path) => Arc::new(CatalogTranslator::from_file(path).await?),
            None => Arc::new(IdentityTranslator),
        };
        Self::with_translator(config, i18n)
    }

    pub fn with_translator(config: AppConfig, i18n: Arc<dyn TranslationPort>) -> Result<Self> {
        let registration = register(&config.host_core_version, i18n.as_ref())
            .context("HUD core registration failed")?;
        let menu = MenuAssembler::new(i18n.clone(), config.hud.clone(), config.system.clone());

        Ok(Self {
            config,
            i18n,
            registration,
            menu,
        })
    }

    /// A dispatcher whose game operations land in `log`
    pub fn dispatcher(&self, log: &HostCommandLog) -> DispatchService {
        let log = Arc::new(log.clone());
        DispatchService::new(log.clone(), log.clone(), log, self.config.hud.clone())
    }
}

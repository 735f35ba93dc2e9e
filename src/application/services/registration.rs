//! Host registration - announces this system module to the HUD core

use std::fmt;
use std::str::FromStr;

use tracing::{info, instrument};

use crate::application::ports::outbound::TranslationPort;
use crate::domain::entities::Layout;

pub const MODULE_ID: &str = "token-action-hud-forbidden-lands";
pub const CORE_MODULE_ID: &str = "token-action-hud-core";
pub const REQUIRED_CORE_MODULE_VERSION: &str = "1.5";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    #[error("{CORE_MODULE_ID} {found} is not compatible, {required} required")]
    IncompatibleCore { required: CoreVersion, found: CoreVersion },

    #[error("Invalid core version '{0}'")]
    InvalidVersion(String),
}

/// `major.minor` of the HUD core; patch components are ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CoreVersion {
    pub major: u32,
    pub minor: u32,
}

impl CoreVersion {
    pub fn required() -> Self {
        Self { major: 1, minor: 5 }
    }

    /// Same major line, same or later minor
    pub fn satisfies(&self, required: &CoreVersion) -> bool {
        self.major == required.major && self.minor >= required.minor
    }
}

impl FromStr for CoreVersion {
    type Err = RegistrationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || RegistrationError::InvalidVersion(value.to_string());
        let mut parts = value.trim().trim_start_matches('v').split('.');
        let major = parts.next().and_then(|p| p.parse().ok()).ok_or_else(invalid)?;
        let minor = match parts.next() {
            Some(p) => p.parse().map_err(|_| invalid())?,
            None => 0,
        };
        Ok(Self { major, minor })
    }
}

impl fmt::Display for CoreVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// What the core receives once the module is accepted
#[derive(Debug, Clone, PartialEq)]
pub struct SystemRegistration {
    pub module_id: &'static str,
    pub core_version: CoreVersion,
    pub default_layout: Layout,
}

/// Check the core version and produce the module's registration record
#[instrument(skip(i18n))]
pub fn register(core_version: &str, i18n: &dyn TranslationPort) -> Result<SystemRegistration, RegistrationError> {
    let found: CoreVersion = core_version.parse()?;
    let required = CoreVersion::required();
    if !found.satisfies(&required) {
        return Err(RegistrationError::IncompatibleCore { required, found });
    }

    info!(module = MODULE_ID, core = %found, "Registered with HUD core");
    Ok(SystemRegistration {
        module_id: MODULE_ID,
        core_version: found,
        default_layout: Layout::default_with(|key| i18n.i18n(key)),
    })
}

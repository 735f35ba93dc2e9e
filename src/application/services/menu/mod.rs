//! Menu synthesis - category builders and the tree assembler
//!
//! Each category module turns one slice of character data into zero or more
//! [`MenuGroup`]s. Builders are pure: they read the character and the context and
//! return groups, and the assembler hands those to the host in a fixed order.

mod assembler;
mod attributes;
mod combat;
mod conditions;
mod consumables;
mod skills;
mod spells;
mod tooltip;
mod utility;

pub use assembler::MenuAssembler;
pub use attributes::build_attributes;
pub use combat::{build_adversary_combat, build_combat};
pub use conditions::build_conditions;
pub use consumables::build_consumables;
pub use skills::build_skills;
pub use spells::build_spells;
pub use tooltip::TooltipContent;
pub use utility::{build_character_utility, build_token_utility, TokenScope};

use crate::application::ports::outbound::TranslationPort;
use crate::domain::entities::{MenuGroup, Tooltip};
use crate::domain::value_objects::{HudSettings, SystemConfig};

/// Data-shape problems found while building one category
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MenuBuildError {
    #[error("Skill '{skill}' references unknown attribute '{attribute}'")]
    DanglingAttribute { skill: String, attribute: String },

    #[error("Item '{item}' is missing its {field}")]
    MissingField { item: String, field: &'static str },
}

pub type BuildResult = Result<Vec<MenuGroup>, MenuBuildError>;

/// Shared inputs of every category builder
#[derive(Clone, Copy)]
pub struct BuildContext<'a> {
    pub i18n: &'a dyn TranslationPort,
    pub settings: &'a HudSettings,
    pub system: &'a SystemConfig,
}

impl<'a> BuildContext<'a> {
    pub fn new(i18n: &'a dyn TranslationPort, settings: &'a HudSettings, system: &'a SystemConfig) -> Self {
        Self {
            i18n,
            settings,
            system,
        }
    }

    pub fn t(&self, key: &str) -> String {
        self.i18n.i18n(key)
    }

    /// Translate `<prefix>.<VALUE>` with the value upper-cased, e.g. `RANGE.ARM`
    pub fn t_upper(&self, prefix: &str, value: &str) -> String {
        self.i18n.i18n(&format!("{}.{}", prefix, value.to_uppercase()))
    }

    pub fn tooltip(&self, content: TooltipContent) -> Tooltip {
        content.into_tooltip(self.settings)
    }
}

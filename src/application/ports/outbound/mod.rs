//! Outbound ports - Interfaces the HUD requires from the host and the game system

mod character_sheet_port;
mod encounter_tracker_port;
mod hud_host_port;
mod item_renderer_port;
mod translation_port;

pub use character_sheet_port::CharacterSheetPort;
pub use encounter_tracker_port::EncounterTrackerPort;
pub use hud_host_port::HudHostPort;
pub use item_renderer_port::ItemRendererPort;
pub use translation_port::{IdentityTranslator, TranslationPort};

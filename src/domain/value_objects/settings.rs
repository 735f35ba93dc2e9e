//! HUD settings value object
//!
//! Settings are loaded through the layered configuration at startup and travel over
//! the host adapter, so they carry serde derives.

use serde::{Deserialize, Serialize};

/// Which side of an action the host should open its tooltip on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TooltipDirection {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

/// All configurable HUD behaviour
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HudSettings {
    /// Clicking an `item` action posts the item instead of dispatching it
    pub render_item_on_click: bool,

    // Tooltips
    pub tooltip_class: String,
    pub tooltip_direction: TooltipDirection,

    /// CSS class of the inline initiative badge
    pub spotlight_class: String,
}

impl Default for HudSettings {
    fn default() -> Self {
        Self {
            render_item_on_click: true,
            tooltip_class: "tah-system-tooltip".to_string(),
            tooltip_direction: TooltipDirection::Down,
            spotlight_class: "tah-spotlight".to_string(),
        }
    }
}

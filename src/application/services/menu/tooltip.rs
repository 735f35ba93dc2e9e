//! Tooltip summaries for menu actions

use crate::domain::entities::Tooltip;
use crate::domain::value_objects::HudSettings;

/// Builds the `<div><h3>title</h3><ul><li>...</li></ul></div>` summary the host renders
#[derive(Debug, Clone, Default)]
pub struct TooltipContent {
    title: String,
    lines: Vec<String>,
}

impl TooltipContent {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    /// A `label: value` line
    pub fn entry(mut self, label: impl std::fmt::Display, value: impl std::fmt::Display) -> Self {
        self.lines.push(format!("{}: {}", label, value));
        self
    }

    /// A free-text line; empty text adds nothing
    pub fn line(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        if !text.is_empty() {
            self.lines.push(text);
        }
        self
    }

    pub fn line_opt(self, text: Option<&str>) -> Self {
        match text {
            Some(text) => self.line(text),
            None => self,
        }
    }

    pub fn to_html(&self) -> String {
        let items: String = self
            .lines
            .iter()
            .map(|line| format!("<li>{}</li>", line))
            .collect();
        format!("<div><h3>{}</h3><ul>{}</ul></div>", self.title, items)
    }

    pub fn into_tooltip(self, settings: &HudSettings) -> Tooltip {
        Tooltip {
            content: self.to_html(),
            class: settings.tooltip_class.clone(),
            direction: settings.tooltip_direction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_layout() {
        let content = TooltipContent::new("Broadsword")
            .entry("Damage", 2)
            .line("")
            .line_opt(Some("Edged"))
            .line_opt(None);
        assert_eq!(
            content.to_html(),
            "<div><h3>Broadsword</h3><ul><li>Damage: 2</li><li>Edged</li></ul></div>"
        );
    }

    #[test]
    fn test_tooltip_uses_settings() {
        let tooltip = TooltipContent::new("X").into_tooltip(&HudSettings::default());
        assert_eq!(tooltip.class, "tah-system-tooltip");
        assert_eq!(tooltip.content, "<div><h3>X</h3><ul></ul></div>");
    }
}

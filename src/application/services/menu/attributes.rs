//! Attributes category

use super::{BuildContext, BuildResult, TooltipContent};
use crate::domain::entities::{Action, Character, GroupData, InfoBadge, MenuGroup, Tab};
use crate::domain::value_objects::{ActionType, SystemConfig};

/// Attribute rolls. Without a character the system's attribute list is offered
/// instead, unannotated.
pub fn build_attributes(ctx: &BuildContext<'_>, character: Option<&Character>) -> BuildResult {
    let actions: Vec<Action> = match character {
        Some(character) => ctx
            .system
            .attributes
            .iter()
            .filter_map(|key| character.attributes.get(key).map(|attribute| (key, attribute)))
            .map(|(key, attribute)| {
                let name = ctx.t(&attribute.label);
                let tooltip = TooltipContent::new(&name).entry(ctx.t("VALUE"), attribute.value);
                Action::new(ActionType::Attributes, key.as_str(), name)
                    .with_tooltip(ctx.tooltip(tooltip))
                    .with_info(InfoBadge {
                        class: None,
                        text: attribute.value.to_string(),
                    })
            })
            .collect(),
        None => ctx
            .system
            .attributes
            .iter()
            .map(|key| {
                Action::new(
                    ActionType::Attributes,
                    key.as_str(),
                    ctx.t(&SystemConfig::attribute_label_key(key)),
                )
            })
            .collect(),
    };

    if let Some(character) = character {
        for key in character.attributes.keys().filter(|key| !ctx.system.is_attribute(key)) {
            tracing::debug!(actor_id = %character.id, attribute = %key, "Skipping non-canonical attribute");
        }
    }

    if actions.is_empty() {
        return Ok(Vec::new());
    }

    let group = GroupData::new("attributes", ctx.t("HEADER.ATTRIBUTES"));
    Ok(vec![MenuGroup::new(Tab::Character, group, actions)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::menu::test_support::EnglishCatalog;
    use crate::domain::entities::CharacterKind;
    use crate::domain::value_objects::HudSettings;

    fn build(character: Option<&Character>) -> Vec<MenuGroup> {
        let i18n = EnglishCatalog::new();
        let settings = HudSettings::default();
        let system = SystemConfig::default();
        build_attributes(&BuildContext::new(&i18n, &settings, &system), character).unwrap()
    }

    #[test]
    fn test_attributes_follow_canonical_order_and_skip_unknown_keys() {
        let character = Character::new("a1", "Ylva", CharacterKind::Standard)
            .with_attribute("agility", "ATTRIBUTE.AGILITY", 4)
            .with_attribute("luck", "ATTRIBUTE.LUCK", 9)
            .with_attribute("strength", "ATTRIBUTE.STRENGTH", 3);

        let groups = build(Some(&character));
        assert_eq!(groups.len(), 1);
        let actions = &groups[0].actions;
        let ids: Vec<_> = actions.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["strength", "agility"]);

        assert_eq!(actions[0].name, "Strength");
        assert_eq!(actions[0].info1.as_ref().unwrap().text, "3");
        assert!(actions[0].tooltip.as_ref().unwrap().content.contains("Value: 3"));
        assert_eq!(actions[0].encoded_value, "attributes|strength");
        assert_eq!(groups[0].parent, Tab::Character);
        assert_eq!(groups[0].group.name, "Attributes");
    }

    #[test]
    fn test_character_without_attributes_emits_nothing() {
        let character = Character::new("a1", "Ylva", CharacterKind::Standard);
        assert!(build(Some(&character)).is_empty());
    }

    #[test]
    fn test_summary_mode_lists_system_attributes() {
        let groups = build(None);
        let actions = &groups[0].actions;
        assert_eq!(actions.len(), 4);
        assert_eq!(actions[0].name, "Strength");
        assert_eq!(actions[3].name, "ATTRIBUTE.EMPATHY");
        assert!(actions[0].tooltip.is_none());
    }
}

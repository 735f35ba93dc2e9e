//! Conditions category

use super::{BuildContext, BuildResult};
use crate::domain::entities::{Action, ActionState, Character, GroupData, MenuGroup, Tab};
use crate::domain::value_objects::ActionType;

/// Condition toggles; an applied condition shows as active
pub fn build_conditions(ctx: &BuildContext<'_>, character: &Character) -> BuildResult {
    if character.conditions.is_empty() {
        return Ok(Vec::new());
    }

    let actions = character
        .conditions
        .iter()
        .map(|(key, condition)| {
            Action::new(ActionType::Condition, key.as_str(), ctx.t(&condition.label))
                .with_state(ActionState::active(condition.value))
        })
        .collect();

    let group = GroupData::new("conditions", ctx.t("HEADER.CONDITION"));
    Ok(vec![MenuGroup::new(Tab::Conditions, group, actions)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::menu::test_support::EnglishCatalog;
    use crate::domain::entities::CharacterKind;
    use crate::domain::value_objects::{HudSettings, SystemConfig};

    #[test]
    fn test_active_flag_mirrors_condition() {
        let i18n = EnglishCatalog::new();
        let settings = HudSettings::default();
        let system = SystemConfig::default();
        let character = Character::new("a1", "Ylva", CharacterKind::Standard)
            .with_condition("cold", "CONDITION.COLD", true)
            .with_condition("hungry", "CONDITION.HUNGRY", false);

        let groups = build_conditions(&BuildContext::new(&i18n, &settings, &system), &character).unwrap();
        let actions = &groups[0].actions;

        assert_eq!(actions[0].name, "Cold");
        assert!(actions[0].state.active);
        assert_eq!(actions[0].css_class, "active");
        assert_eq!(actions[1].name, "CONDITION.HUNGRY");
        assert!(!actions[1].state.active);
        assert_eq!(actions[1].encoded_value, "condition|hungry");
    }
}

//! Consumables category

use super::{BuildContext, BuildResult};
use crate::domain::entities::{Action, Character, GroupData, MenuGroup, Tab};
use crate::domain::value_objects::ActionType;

/// Consumable rolls labelled with their current resource die
pub fn build_consumables(ctx: &BuildContext<'_>, character: &Character) -> BuildResult {
    if character.consumables.is_empty() {
        return Ok(Vec::new());
    }

    let actions = character
        .consumables
        .iter()
        .map(|(key, consumable)| {
            let die = ctx.t(ctx.system.consumable_die(consumable.value));
            let name = format!("{} {}", ctx.t(&consumable.label), die);
            Action::new(ActionType::Consumable, key.as_str(), name)
        })
        .collect();

    let group = GroupData::new("consumables", ctx.t("HEADER.CONSUMABLE"));
    Ok(vec![MenuGroup::new(Tab::Consumables, group, actions)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::menu::test_support::EnglishCatalog;
    use crate::domain::entities::CharacterKind;
    use crate::domain::value_objects::{HudSettings, SystemConfig};

    #[test]
    fn test_consumable_labels_use_die_tier() {
        let i18n = EnglishCatalog::new();
        let settings = HudSettings::default();
        let system = SystemConfig::default();
        let character = Character::new("a1", "Ylva", CharacterKind::Standard)
            .with_consumable("arrows", "CONSUMABLE.ARROWS", Some(7))
            .with_consumable("food", "CONSUMABLE.FOOD", Some(1))
            .with_consumable("water", "CONSUMABLE.WATER", None);

        let groups = build_consumables(&BuildContext::new(&i18n, &settings, &system), &character).unwrap();
        let names: Vec<_> = groups[0].actions.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["CONSUMABLE.ARROWS 0", "Food D6", "CONSUMABLE.WATER 0"]);
        assert_eq!(groups[0].parent, Tab::Consumables);
    }
}

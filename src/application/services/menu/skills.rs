//! Skills category

use super::{BuildContext, BuildResult, MenuBuildError, TooltipContent};
use crate::domain::entities::{Action, Attribute, Character, GroupData, MenuGroup, Skill, Tab};
use crate::domain::value_objects::ActionType;

/// Skill rolls, labelled with the dice pool (skill + attribute).
///
/// A skill whose attribute is missing is logged and left out; the rest of the group
/// is still built.
pub fn build_skills(ctx: &BuildContext<'_>, character: &Character) -> BuildResult {
    let mut actions = Vec::with_capacity(character.skills.len());

    for (key, skill) in &character.skills {
        match resolve_attribute(character, key, skill) {
            Ok(attribute) => actions.push(skill_action(ctx, key, skill, attribute)),
            Err(e) => tracing::warn!(actor_id = %character.id, error = %e, "Skipping skill"),
        }
    }

    if actions.is_empty() {
        return Ok(Vec::new());
    }

    let group = GroupData::new("skills", ctx.t("HEADER.SKILLS"));
    Ok(vec![MenuGroup::new(Tab::Character, group, actions)])
}

fn resolve_attribute<'c>(
    character: &'c Character,
    key: &str,
    skill: &Skill,
) -> Result<&'c Attribute, MenuBuildError> {
    character
        .attributes
        .get(&skill.attribute)
        .ok_or_else(|| MenuBuildError::DanglingAttribute {
            skill: key.to_string(),
            attribute: skill.attribute.clone(),
        })
}

fn skill_action(ctx: &BuildContext<'_>, key: &str, skill: &Skill, attribute: &Attribute) -> Action {
    let skill_name = ctx.t(&skill.label);
    let attribute_name = ctx.t(&attribute.label);
    let total = skill.value.saturating_add(attribute.value);

    let tooltip = TooltipContent::new(&skill_name)
        .entry(&attribute_name, attribute.value)
        .entry(&skill_name, skill.value)
        .entry(ctx.t("VALUE"), total);

    Action::new(ActionType::Skills, key, format!("{} {}", skill_name, total))
        .with_tooltip(ctx.tooltip(tooltip))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::menu::test_support::EnglishCatalog;
    use crate::domain::entities::CharacterKind;
    use crate::domain::value_objects::{HudSettings, SystemConfig};
    use proptest::prelude::*;

    fn build(character: &Character) -> Vec<MenuGroup> {
        let i18n = EnglishCatalog::new();
        let settings = HudSettings::default();
        let system = SystemConfig::default();
        build_skills(&BuildContext::new(&i18n, &settings, &system), character).unwrap()
    }

    #[test]
    fn test_skill_total_saturates() {
        let character = Character::new("a1", "Ylva", CharacterKind::Standard)
            .with_attribute("strength", "ATTRIBUTE.STRENGTH", i32::MAX)
            .with_skill("might", "SKILL.MIGHT", 3, "strength");
        let groups = build(&character);
        assert_eq!(groups[0].actions[0].name, format!("Might {}", i32::MAX));
    }

    #[test]
    fn test_skill_label_shows_total() {
        let character = Character::new("a1", "Ylva", CharacterKind::Standard)
            .with_attribute("strength", "ATTRIBUTE.STRENGTH", 3)
            .with_skill("might", "SKILL.MIGHT", 2, "strength");

        let groups = build(&character);
        let action = &groups[0].actions[0];
        assert_eq!(action.name, "Might 5");
        assert_eq!(action.encoded_value, "skills|might");

        let content = &action.tooltip.as_ref().unwrap().content;
        assert!(content.contains("<li>Strength: 3</li>"));
        assert!(content.contains("<li>Might: 2</li>"));
        assert!(content.contains("<li>Value: 5</li>"));
    }

    #[test]
    fn test_dangling_attribute_skips_only_that_skill() {
        let character = Character::new("a1", "Ylva", CharacterKind::Standard)
            .with_attribute("agility", "ATTRIBUTE.AGILITY", 4)
            .with_skill("might", "SKILL.MIGHT", 2, "strength")
            .with_skill("stealth", "SKILL.STEALTH", 1, "agility");

        let groups = build(&character);
        assert_eq!(groups.len(), 1);
        let ids: Vec<_> = groups[0].actions.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["stealth"]);
        assert_eq!(groups[0].actions[0].name, "Stealth 5");
    }

    #[test]
    fn test_no_resolvable_skills_emits_no_group() {
        let character = Character::new("a1", "Ylva", CharacterKind::Standard)
            .with_skill("might", "SKILL.MIGHT", 2, "strength");
        assert!(build(&character).is_empty());
    }

    proptest! {
        #[test]
        fn prop_skill_total_is_skill_plus_attribute(attribute in -5i32..20, skill in -5i32..20) {
            let character = Character::new("a1", "Ylva", CharacterKind::Standard)
                .with_attribute("wits", "ATTRIBUTE.WITS", attribute)
                .with_skill("lore", "SKILL.LORE", skill, "wits");

            let groups = build(&character);
            let expected = format!("SKILL.LORE {}", attribute + skill);
            prop_assert_eq!(&groups[0].actions[0].name, &expected);
        }
    }
}

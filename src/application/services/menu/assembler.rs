//! Menu tree assembler - picks the categories for a selection and emits them in order

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use super::{
    build_adversary_combat, build_attributes, build_character_utility, build_combat,
    build_conditions, build_consumables, build_skills, build_spells, build_token_utility,
    BuildContext, BuildResult, TokenScope,
};
use crate::application::dto::SelectionContext;
use crate::application::ports::inbound::MenuBuilder;
use crate::application::ports::outbound::{HudHostPort, TranslationPort};
use crate::domain::entities::{Character, CharacterKind, MenuTree};
use crate::domain::value_objects::{HudSettings, SystemConfig};

/// Menu categories, in the order they are presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    Attributes,
    Skills,
    Combat,
    AdversaryCombat,
    Spells,
    Conditions,
    Consumables,
    TokenUtility,
    CharacterUtility,
}

impl Category {
    const STANDARD: [Category; 8] = [
        Self::Attributes,
        Self::Skills,
        Self::Combat,
        Self::Spells,
        Self::Conditions,
        Self::Consumables,
        Self::TokenUtility,
        Self::CharacterUtility,
    ];

    const ADVERSARY: [Category; 5] = [
        Self::Attributes,
        Self::Skills,
        Self::AdversaryCombat,
        Self::Spells,
        Self::TokenUtility,
    ];

    const NO_CHARACTER: [Category; 1] = [Self::TokenUtility];

    fn for_kind(kind: CharacterKind) -> &'static [Category] {
        match kind {
            CharacterKind::Standard => &Self::STANDARD,
            CharacterKind::Adversary => &Self::ADVERSARY,
            CharacterKind::Other => &Self::NO_CHARACTER,
        }
    }
}

/// Builds the full menu tree for the current selection
pub struct MenuAssembler {
    i18n: Arc<dyn TranslationPort>,
    settings: HudSettings,
    system: SystemConfig,
}

impl MenuAssembler {
    pub fn new(i18n: Arc<dyn TranslationPort>, settings: HudSettings, system: SystemConfig) -> Self {
        Self {
            i18n,
            settings,
            system,
        }
    }

    /// Build into a fresh [`MenuTree`]
    pub fn build(&self, selection: &SelectionContext) -> MenuTree {
        let mut tree = MenuTree::new();
        self.build_menu_tree(selection, &mut tree);
        tree
    }

    fn context(&self) -> BuildContext<'_> {
        BuildContext::new(self.i18n.as_ref(), &self.settings, &self.system)
    }

    fn build_category(
        &self,
        category: Category,
        character: Option<&Character>,
        scope: TokenScope<'_>,
    ) -> BuildResult {
        let ctx = self.context();
        match (category, character) {
            (Category::Attributes, character) => build_attributes(&ctx, character),
            (Category::TokenUtility, _) => Ok(vec![build_token_utility(&ctx, scope)]),
            (Category::CharacterUtility, _) => Ok(vec![build_character_utility(&ctx)]),
            (_, None) => Ok(Vec::new()),
            (Category::Skills, Some(character)) => build_skills(&ctx, character),
            (Category::Combat, Some(character)) => build_combat(&ctx, character),
            (Category::AdversaryCombat, Some(character)) => build_adversary_combat(&ctx, character),
            (Category::Spells, Some(character)) => build_spells(&ctx, character),
            (Category::Conditions, Some(character)) => build_conditions(&ctx, character),
            (Category::Consumables, Some(character)) => build_consumables(&ctx, character),
        }
    }
}

impl MenuBuilder for MenuAssembler {
    #[instrument(skip_all, fields(tokens = selection.tokens.len()))]
    fn build_menu_tree(&self, selection: &SelectionContext, host: &mut dyn HudHostPort) {
        let token_ids = selection.token_ids();
        let scope = TokenScope {
            controlled: &token_ids,
            single: selection.single_token(),
            encounter: selection.encounter.as_ref(),
        };

        let character = selection
            .single_character()
            .map(|(_, character)| character)
            .filter(|character| character.kind.is_known());
        let categories: &[Category] = match character {
            Some(character) => Category::for_kind(character.kind),
            None => &Category::NO_CHARACTER,
        };
        debug!(?categories, "Building menu tree");

        for &category in categories {
            match self.build_category(category, character, scope) {
                Ok(groups) => {
                    for menu_group in groups {
                        host.add_group(&menu_group.group, menu_group.parent);
                        host.add_actions(menu_group.actions, &menu_group.group);
                    }
                }
                Err(e) => warn!(?category, error = %e, "Category dropped from menu"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::application::dto::ControlledToken;
    use crate::application::ports::outbound::IdentityTranslator;
    use crate::domain::entities::{
        ArmorData, Bonus, Combatant, Encounter, Item, ItemKind, MonsterAttackData, SpellData, Tab,
        WeaponData,
    };
    use crate::domain::value_objects::{decode, encode};

    fn assembler() -> MenuAssembler {
        MenuAssembler::new(
            Arc::new(IdentityTranslator),
            HudSettings::default(),
            SystemConfig::default(),
        )
    }

    fn hero() -> Character {
        Character::new("a1", "Ylva", CharacterKind::Standard)
            .with_attribute("strength", "ATTRIBUTE.STRENGTH", 3)
            .with_skill("might", "SKILL.MIGHT", 2, "strength")
            .with_condition("cold", "CONDITION.COLD", false)
            .with_consumable("food", "CONSUMABLE.FOOD", Some(2))
            .with_item(Item::new(
                "s1",
                "Healing",
                ItemKind::Spell(SpellData {
                    rank: Some(1),
                    range: Some("near".to_string()),
                    ..SpellData::default()
                }),
            ))
    }

    fn group_ids(tree: &MenuTree) -> Vec<String> {
        tree.tabs
            .iter()
            .flat_map(|tab| tab.groups.iter().map(|g| g.group.id.clone()))
            .collect()
    }

    fn selection(characters: Vec<Character>) -> SelectionContext {
        SelectionContext::new(
            characters
                .into_iter()
                .enumerate()
                .map(|(i, c)| ControlledToken::new(format!("t{}", i + 1), Some(c)))
                .collect(),
        )
    }

    #[test]
    fn test_standard_character_tree() {
        let tree = assembler().build(&selection(vec![hero()]));

        assert_eq!(
            group_ids(&tree),
            vec![
                "attributes",
                "skills",
                "armor",
                "actions",
                "spells_rank_1",
                "conditions",
                "consumables",
                "token",
                "character_utils",
            ]
        );
        let tabs: Vec<_> = tree.tabs.iter().map(|t| t.id).collect();
        assert_eq!(tabs, Tab::ALL.to_vec());
    }

    #[test]
    fn test_adversary_tree_has_no_character_only_groups() {
        let drake = Character::new("m1", "Drake", CharacterKind::Adversary)
            .with_attribute("strength", "ATTRIBUTE.STRENGTH", 8)
            .with_condition("cold", "CONDITION.COLD", true)
            .with_armor(6, None);
        let tree = assembler().build(&selection(vec![drake]));

        assert_eq!(
            group_ids(&tree),
            vec!["attributes", "monsterAttack", "armor", "actions", "token"]
        );
        assert!(tree.group("conditions").is_none());
        assert!(tree.group("character_utils").is_none());
    }

    #[test]
    fn test_no_selection_builds_token_utility_only() {
        let tree = assembler().build(&SelectionContext::default());
        assert_eq!(group_ids(&tree), vec!["token"]);
    }

    #[test]
    fn test_multiple_characters_fall_back_to_token_utility() {
        let tree = assembler().build(&selection(vec![hero(), hero()]));
        assert_eq!(group_ids(&tree), vec!["token"]);
    }

    #[test]
    fn test_unknown_kind_falls_back_to_token_utility() {
        let keep = Character::new("k1", "Keep", CharacterKind::Other)
            .with_attribute("strength", "ATTRIBUTE.STRENGTH", 3);
        let tree = assembler().build(&selection(vec![keep]));
        assert_eq!(group_ids(&tree), vec!["token"]);
    }

    #[test]
    fn test_broken_category_does_not_affect_siblings() {
        let broken_weapon = Item::new("w1", "Axe", ItemKind::Weapon(WeaponData::default()));
        let tree = assembler().build(&selection(vec![hero().with_item(broken_weapon)]));

        let ids = group_ids(&tree);
        assert!(!ids.contains(&"armor".to_string()));
        assert!(!ids.contains(&"actions".to_string()));
        assert!(ids.contains(&"skills".to_string()));
        assert!(ids.contains(&"spells_rank_1".to_string()));
        assert!(ids.contains(&"character_utils".to_string()));
    }

    #[test]
    fn test_every_emitted_payload_decodes_back() {
        let armed = hero()
            .with_item(Item::new(
                "Xk29fQpL0aZ71bCd",
                "Broadsword",
                ItemKind::Weapon(WeaponData {
                    category: Some("blade".to_string()),
                    range: Some("arm".to_string()),
                    ..WeaponData::default()
                }),
            ))
            .with_item(Item::new(
                "h1",
                "Helmet",
                ItemKind::Armor(ArmorData {
                    part: Some("head".to_string()),
                    bonus: Bonus { value: 2, max: 2 },
                    features: None,
                }),
            ));
        let drake = Character::new("m1", "Drake", CharacterKind::Adversary)
            .with_armor(6, None)
            .with_item(Item::new(
                "b1",
                "Bite",
                ItemKind::MonsterAttack(MonsterAttackData {
                    damage_type: Some("slash".to_string()),
                    range: Some("arm".to_string()),
                    ..MonsterAttackData::default()
                }),
            ));
        let encounter = Encounter::new(vec![Combatant::new("c1").with_token("t1")]).with_turn(0);

        let trees = [
            assembler().build(&selection(vec![armed]).with_encounter(encounter)),
            assembler().build(&selection(vec![drake])),
            assembler().build(&SelectionContext::default()),
        ];

        let mut checked = 0;
        for action in trees.iter().flat_map(|tree| tree.actions()) {
            let (action_type, action_id) = decode(&action.encoded_value).unwrap();
            assert_eq!(action_type, action.system.action_type);
            assert_eq!(action_id, action.system.action_id);
            assert_eq!(encode(&action_type, &action_id), action.encoded_value);
            assert!(action.system.kind().is_some(), "{} has an unknown kind", action.encoded_value);
            checked += 1;
        }
        assert!(checked > 20);
    }

    #[test]
    fn test_tree_is_deterministic_with_unique_payloads() {
        let encounter = Encounter::new(vec![Combatant::new("c1").with_token("t1")]).with_turn(0);
        let context = selection(vec![hero()]).with_encounter(encounter);

        let first = assembler().build(&context);
        let second = assembler().build(&context);
        assert_eq!(first, second);

        let payloads: Vec<_> = first.actions().map(|a| a.encoded_value.clone()).collect();
        let unique: HashSet<_> = payloads.iter().collect();
        assert_eq!(unique.len(), payloads.len());
        assert!(payloads.contains(&"utility|endTurn".to_string()));
    }
}

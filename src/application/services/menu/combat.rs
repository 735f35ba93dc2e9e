//! Combat category - weapons, armor, monster attacks and generic maneuvers

use super::{BuildContext, BuildResult, MenuBuildError, TooltipContent};
use crate::domain::entities::{
    Action, ArmorData, Character, GroupData, InfoBadge, Item, ItemKind, MenuGroup,
    MonsterAttackData, Tab, WeaponData,
};
use crate::domain::value_objects::{
    ActionType, Maneuver, ARMOR_TOTAL_ID, MONSTER_ARMOR_ID, RANDOM_ATTACK_ID,
};

/// Weapons, worn armor with the armor total, and the maneuvers group
pub fn build_combat(ctx: &BuildContext<'_>, character: &Character) -> BuildResult {
    let mut weapons = Vec::new();
    let mut armor = Vec::new();
    let mut armor_total: i32 = 0;

    for item in &character.items {
        match &item.kind {
            ItemKind::Weapon(weapon) => weapons.push(weapon_action(ctx, item, weapon)?),
            ItemKind::Armor(data) => {
                armor.push(armor_action(ctx, item, data)?);
                armor_total = armor_total.saturating_add(data.bonus.value);
            }
            _ => {}
        }
    }

    armor.push(armor_total_action(ctx, armor_total));

    let mut groups = Vec::with_capacity(3);
    if !weapons.is_empty() {
        groups.push(MenuGroup::new(
            Tab::Combat,
            GroupData::new("weapon", ctx.t("HEADER.WEAPON")),
            weapons,
        ));
    }
    groups.push(MenuGroup::new(
        Tab::Combat,
        GroupData::new("armor", ctx.t("HEADER.ARMOR")),
        armor,
    ));
    groups.push(maneuvers_group(ctx));
    Ok(groups)
}

/// Monster attacks (led by a random attack), natural armor and the maneuvers group
pub fn build_adversary_combat(ctx: &BuildContext<'_>, character: &Character) -> BuildResult {
    let mut attacks = vec![Action::new(
        ActionType::MonsterAttack,
        RANDOM_ATTACK_ID,
        ctx.t("HEADER.ATTACK"),
    )];
    for item in &character.items {
        if let ItemKind::MonsterAttack(attack) = &item.kind {
            attacks.push(monster_attack_action(ctx, item, attack)?);
        }
    }

    let armor_name = ctx.t("MONSTER.ARMOR");
    let tooltip = TooltipContent::new(&armor_name)
        .entry(ctx.t("GEAR.BONUS"), character.armor.value)
        .line_opt(character.armor.description.as_deref());
    let armor = Action::new(ActionType::Armor, MONSTER_ARMOR_ID, ctx.t("ARMOR.TOTAL"))
        .with_tooltip(ctx.tooltip(tooltip))
        .with_info(InfoBadge {
            class: None,
            text: character.armor.value.to_string(),
        });

    Ok(vec![
        MenuGroup::new(
            Tab::Combat,
            GroupData::new("monsterAttack", ctx.t("ITEM.TypeMonsterattack")),
            attacks,
        ),
        MenuGroup::new(Tab::Combat, GroupData::new("armor", armor_name), vec![armor]),
        maneuvers_group(ctx),
    ])
}

fn weapon_action(ctx: &BuildContext<'_>, item: &Item, weapon: &WeaponData) -> Result<Action, MenuBuildError> {
    let category = weapon.category.as_deref().ok_or_else(|| missing(item, "category"))?;
    let range = weapon.range.as_deref().ok_or_else(|| missing(item, "range"))?;

    let features: Vec<String> = weapon
        .features
        .iter()
        .filter(|(_, enabled)| **enabled)
        .map(|(key, _)| ctx.t_upper("WEAPON.FEATURES", feature_key(key)))
        .collect();

    let tooltip = TooltipContent::new(&item.name)
        .entry(ctx.t("WEAPON.CATEGORY"), ctx.t_upper("WEAPON", category))
        .entry(ctx.t("WEAPON.RANGE"), ctx.t_upper("RANGE", range))
        .entry(ctx.t("WEAPON.DAMAGE"), display_or_empty(weapon.damage.as_ref()))
        .entry(ctx.t("WEAPON.FEATURE"), features.join(", "))
        .line(ctx.t("tokenActionHud.template.weaponTooltipParry"))
        .line(ctx.t("tokenActionHud.template.weaponTooltipDisarm"));

    Ok(Action::new(ActionType::Weapon, item.id.as_str(), item.name.as_str())
        .with_tooltip(ctx.tooltip(tooltip))
        .with_img(item.image()))
}

fn feature_key(key: &str) -> &str {
    match key {
        "slowReload" => "slow_reload",
        other => other,
    }
}

fn armor_action(ctx: &BuildContext<'_>, item: &Item, armor: &ArmorData) -> Result<Action, MenuBuildError> {
    let part = match armor.part.as_deref().ok_or_else(|| missing(item, "body part"))? {
        "head" => "helmet",
        other => other,
    };

    let tooltip = TooltipContent::new(&item.name)
        .entry(ctx.t("GEAR.TYPE"), ctx.t_upper("ARMOR", part))
        .line_opt(armor.features.as_deref())
        .entry(
            ctx.t("GEAR.BONUS"),
            format!("{}/{}", armor.bonus.value, armor.bonus.max),
        );

    Ok(Action::new(ActionType::Armor, item.id.as_str(), item.name.as_str())
        .with_tooltip(ctx.tooltip(tooltip))
        .with_img(item.image()))
}

fn armor_total_action(ctx: &BuildContext<'_>, total: i32) -> Action {
    let name = ctx.t("ARMOR.TOTAL");
    let tooltip = TooltipContent::new(&name).entry(ctx.t("GEAR.BONUS"), total);
    Action::new(ActionType::Armor, ARMOR_TOTAL_ID, name)
        .with_tooltip(ctx.tooltip(tooltip))
        .with_info(InfoBadge {
            class: None,
            text: total.to_string(),
        })
}

fn monster_attack_action(
    ctx: &BuildContext<'_>,
    item: &Item,
    attack: &MonsterAttackData,
) -> Result<Action, MenuBuildError> {
    let damage_type = attack.damage_type.as_deref().ok_or_else(|| missing(item, "damage type"))?;
    let range = attack.range.as_deref().ok_or_else(|| missing(item, "range"))?;

    let tooltip = TooltipContent::new(&item.name)
        .entry(ctx.t("WEAPON.CATEGORY"), ctx.t_upper("ATTACK", damage_type))
        .entry(ctx.t("WEAPON.RANGE"), ctx.t_upper("RANGE", range))
        .entry(ctx.t("WEAPON.DAMAGE"), display_or_empty(attack.damage.as_ref()))
        .line_opt(attack.description.as_deref());

    Ok(Action::new(ActionType::MonsterAttack, item.id.as_str(), item.name.as_str())
        .with_tooltip(ctx.tooltip(tooltip))
        .with_img(item.image()))
}

fn maneuvers_group(ctx: &BuildContext<'_>) -> MenuGroup {
    let actions = Maneuver::ALL
        .iter()
        .map(|maneuver| Action::new(ActionType::Action, maneuver.id(), ctx.t(maneuver.label_key())))
        .collect();
    MenuGroup::new(
        Tab::Combat,
        GroupData::new("actions", ctx.t("HEADER.ACTIONS")),
        actions,
    )
}

fn display_or_empty(value: Option<&impl std::fmt::Display>) -> String {
    value.map(ToString::to_string).unwrap_or_default()
}

fn missing(item: &Item, field: &'static str) -> MenuBuildError {
    MenuBuildError::MissingField {
        item: item.name.clone(),
        field,
    }
}

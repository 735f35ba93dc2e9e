//! Spells category - one group per spell rank

use std::collections::BTreeMap;

use super::{BuildContext, BuildResult, MenuBuildError, TooltipContent};
use crate::domain::entities::{Action, Character, GroupData, ItemKind, MenuGroup, Tab};
use crate::domain::value_objects::ActionType;

pub fn build_spells(ctx: &BuildContext<'_>, character: &Character) -> BuildResult {
    let mut ranks: BTreeMap<u8, Vec<Action>> = BTreeMap::new();

    for item in &character.items {
        let ItemKind::Spell(spell) = &item.kind else {
            continue;
        };
        let missing = |field| MenuBuildError::MissingField {
            item: item.name.clone(),
            field,
        };
        let rank = spell.rank.ok_or_else(|| missing("rank"))?;
        let range = spell.range.as_deref().ok_or_else(|| missing("range"))?;

        let tooltip = TooltipContent::new(&item.name)
            .entry(ctx.t("SPELL.SPELL_TYPE"), ctx.t(spell.spell_type.as_deref().unwrap_or_default()))
            .entry(ctx.t("SPELL.RANK"), rank)
            .entry(ctx.t("SPELL.RANGE"), ctx.t_upper("RANGE", range))
            .entry(ctx.t("SPELL.DURATION"), spell.duration.as_deref().unwrap_or_default())
            .entry(ctx.t("SPELL.INGREDIENT"), spell.ingredient.as_deref().unwrap_or_default())
            .line_opt(spell.description.as_deref());

        let action = Action::new(ActionType::Spell, item.id.as_str(), item.name.as_str())
            .with_tooltip(ctx.tooltip(tooltip))
            .with_img(item.image());
        ranks.entry(rank).or_default().push(action);
    }

    let rank_label = ctx.t("SPELL.RANK");
    Ok(ranks
        .into_iter()
        .map(|(rank, actions)| {
            let group = GroupData::new(format!("spells_rank_{}", rank), format!("{} {}", rank_label, rank));
            MenuGroup::new(Tab::Spells, group, actions)
        })
        .collect())
}

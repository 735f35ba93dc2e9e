//! Utility tab - token commands and character commands

use super::BuildContext;
use crate::domain::entities::{Action, ActionState, Encounter, GroupData, InfoBadge, MenuGroup, Tab};
use crate::domain::value_objects::{ActionType, TokenId, UtilityAction};

/// The tokens the token utility group is built for
#[derive(Debug, Clone, Copy)]
pub struct TokenScope<'a> {
    /// Every controlled token
    pub controlled: &'a [TokenId],
    /// The token when exactly one is controlled
    pub single: Option<&'a TokenId>,
    pub encounter: Option<&'a Encounter>,
}

/// Initiative toggle, plus "end turn" when the selected token is acting
pub fn build_token_utility(ctx: &BuildContext<'_>, scope: TokenScope<'_>) -> MenuGroup {
    let mut actions = vec![initiative_action(ctx, scope)];

    let acting = scope
        .single
        .zip(scope.encounter)
        .is_some_and(|(token, encounter)| encounter.is_current_token(token));
    if acting {
        actions.push(utility_action(ctx, UtilityAction::EndTurn));
    }

    MenuGroup::new(
        Tab::Utility,
        GroupData::new("token", ctx.t("tokenActionHud.token")),
        actions,
    )
}

fn initiative_action(ctx: &BuildContext<'_>, scope: TokenScope<'_>) -> Action {
    let action = utility_action(ctx, UtilityAction::Initiative);
    let Some(encounter) = scope.encounter else {
        return action;
    };

    let combatants: Vec<_> = encounter.combatants_for_tokens(scope.controlled).collect();
    let state = ActionState {
        toggle: true,
        active: !combatants.is_empty() && combatants.iter().all(|combatant| combatant.has_rolled()),
    };
    let action = action.with_state(state);

    match combatants.as_slice() {
        [combatant] => match combatant.initiative {
            Some(initiative) => action.with_info(InfoBadge {
                class: Some(ctx.settings.spotlight_class.clone()),
                text: initiative.to_string(),
            }),
            None => action,
        },
        _ => action,
    }
}

/// Rest, pride and reputation; standard characters only
pub fn build_character_utility(ctx: &BuildContext<'_>) -> MenuGroup {
    let actions = [UtilityAction::Rest, UtilityAction::Pride, UtilityAction::Reputation]
        .into_iter()
        .map(|action| utility_action(ctx, action))
        .collect();

    MenuGroup::new(
        Tab::Utility,
        GroupData::new("character_utils", ctx.t("ACTOR.TypeCharacter")),
        actions,
    )
}

fn utility_action(ctx: &BuildContext<'_>, action: UtilityAction) -> Action {
    let name = ctx.t(action.label_key());
    let list_name = format!("{}: {}", ctx.t(&format!("tokenActionHud.{}", ActionType::Utility)), name);
    Action::new(ActionType::Utility, action.id(), name).with_list_name(list_name)
}

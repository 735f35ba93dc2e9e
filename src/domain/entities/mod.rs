//! Domain entities - Core objects the HUD reads and produces

mod character;
mod encounter;
mod item;
mod layout;
mod menu;

pub use character::{ArmorDefense, Attribute, Character, CharacterKind, Condition, Consumable, Skill};
pub use encounter::{Combatant, Encounter};
pub use item::{
    ArmorData, Bonus, Damage, Item, ItemKind, MonsterAttackData, SpellData, WeaponData,
};
pub use layout::{Layout, LayoutGroup, LayoutTab};
pub use menu::{
    Action, ActionState, GroupData, GroupNode, GroupType, InfoBadge, MenuGroup, MenuTree, Tab,
    TabNode, Tooltip,
};

//! Data transfer objects exchanged with the host

mod selection;

pub use selection::{ClickEvent, ControlledToken, SelectionContext, TargetedActor};

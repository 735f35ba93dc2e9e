//! Ports - the seams between the HUD core and its collaborators

pub mod inbound;
pub mod outbound;

//! Forbidden Lands token action HUD
//!
//! Builds the action menu for the selected tokens and turns clicks on that menu
//! into character sheet and encounter tracker operations.

pub mod application;
pub mod domain;
pub mod infrastructure;

//! Application services - Use case implementations
//!
//! Menu synthesis turns a selection into a menu tree, the dispatch service turns a
//! click back into game operations, and registration hands the module to the HUD core.

pub mod dispatch_service;
pub mod menu;
pub mod registration;

pub use dispatch_service::DispatchService;
pub use menu::{MenuAssembler, MenuBuildError};
pub use registration::{register, RegistrationError, SystemRegistration};

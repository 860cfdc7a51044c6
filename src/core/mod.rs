pub mod action;
pub mod context;
pub mod module;

pub use action::{Action, StatusLevel};
pub use context::Context;
pub use module::Module;

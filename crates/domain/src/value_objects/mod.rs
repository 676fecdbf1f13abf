//! Domain Value Objects - fixed vocabulary of the program
//!
//! Immutable, closed enums: roles, datasets, tools and coordinator actions.

pub mod action;
pub mod dataset_kind;
pub mod role;
mod tool_kind;

pub use action::Action;
pub use dataset_kind::DatasetKind;
pub use role::Role;
pub use tool_kind::ToolKind;

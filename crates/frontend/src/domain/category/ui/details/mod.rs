//! Category Details UI Module
//!
//! MVVM split:
//! - view_model.rs: state, loading and save commands
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::CategoryDetails;
pub use view_model::CategoryDetailsViewModel;

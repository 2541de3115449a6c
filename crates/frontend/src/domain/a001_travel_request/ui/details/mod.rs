//! Request Detail UI Module
//!
//! - model.rs: API functions (fetch, update)
//! - view_model.rs: loaded request, edit mode and commands
//! - view.rs: Leptos component

mod model;
mod view;
mod view_model;

pub use view::RequestDetail;
pub use view_model::RequestDetailViewModel;

//! Upload Report UI Module
//!
//! Simplified MVVM pattern implementation:
//! - model.rs: API functions (generate, submit)
//! - view_model.rs: selected files, draft and commands
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use view::UploadReport;
pub use view_model::UploadReportViewModel;

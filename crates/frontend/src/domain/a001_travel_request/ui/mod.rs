pub mod details;
pub mod draft_form;
pub mod upload;

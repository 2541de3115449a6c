pub mod aggregate;
pub mod report_draft;

pub use aggregate::{Document, RequestHistory, RequestStatus, TravelRequest, TravelRequestId};
pub use report_draft::{Expense, ReportDraft, ReportPatch, UploadedFileInfo};

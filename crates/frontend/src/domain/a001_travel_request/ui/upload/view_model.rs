use super::model;
use crate::shared::api::{ApiClient, UploadFile};
use contracts::domain::a001_travel_request::ReportDraft;
use contracts::shared::upload::validate_upload_files;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Validation message for a file selection, if it cannot be uploaded
pub fn selection_error(files: &[UploadFile]) -> Option<String> {
    validate_upload_files(files).err().map(|e| e.to_string())
}

/// ViewModel for the upload → review → submit flow
#[derive(Clone, Copy)]
pub struct UploadReportViewModel {
    // web_sys::File is not Send+Sync, keep the selection in local storage
    pub files: RwSignal<Vec<UploadFile>, LocalStorage>,
    pub draft: RwSignal<ReportDraft>,
    pub has_draft: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub generating: RwSignal<bool>,
    pub submitting: RwSignal<bool>,
    pub submitted_id: RwSignal<Option<String>>,
}

impl UploadReportViewModel {
    pub fn new() -> Self {
        Self {
            files: RwSignal::new_local(Vec::new()),
            draft: RwSignal::new(ReportDraft::default()),
            has_draft: RwSignal::new(false),
            error: RwSignal::new(None),
            generating: RwSignal::new(false),
            submitting: RwSignal::new(false),
            submitted_id: RwSignal::new(None),
        }
    }

    /// Replace the selection with the files from the input and validate them
    pub fn select_files(&self, list: &web_sys::FileList) {
        let files = UploadFile::from_file_list(list);
        log::debug!("Selected {} file(s)", files.len());
        self.error.set(selection_error(&files));
        self.files.set(files);
    }

    pub fn can_generate(&self) -> bool {
        !self.generating.get()
            && self.error.with(|e| e.is_none())
            && self.files.with(|f| !f.is_empty())
    }

    pub fn can_submit(&self) -> bool {
        self.has_draft.get() && !self.submitting.get()
    }

    pub fn generate_command(&self, client: ApiClient) {
        let files = self.files.get_untracked();
        let this = *self;
        this.generating.set(true);
        this.error.set(None);

        spawn_local(async move {
            match model::generate(&client, &files).await {
                Ok(draft) => {
                    this.draft.set(draft);
                    this.has_draft.set(true);
                }
                Err(e) => {
                    log::error!("Generate report failed: {}", e);
                    this.error.set(Some(e));
                }
            }
            this.generating.set(false);
        });
    }

    pub fn submit_command(&self, client: ApiClient) {
        let mut draft = self.draft.get_untracked();
        draft.recalculate_total();
        let files = self.files.get_untracked();
        let this = *self;
        this.submitting.set(true);
        this.error.set(None);

        spawn_local(async move {
            match model::submit(&client, &draft, &files).await {
                Ok(request_id) => this.submitted_id.set(Some(request_id)),
                Err(e) => {
                    log::error!("Submit report failed: {}", e);
                    this.error.set(Some(e));
                }
            }
            this.submitting.set(false);
        });
    }

    /// Drop the draft and the selection and start over
    pub fn reset(&self) {
        self.files.set(Vec::new());
        self.draft.set(ReportDraft::default());
        self.has_draft.set(false);
        self.error.set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_error_messages() {
        assert_eq!(selection_error(&[]), Some("No files provided".to_string()));

        let files = vec![
            UploadFile::metadata_only("a.pdf", 100, "application/pdf"),
            UploadFile::metadata_only("scan.PNG", 100, "image/png"),
        ];
        assert_eq!(selection_error(&files), Some("File scan.PNG is not a PDF".to_string()));

        let files = vec![UploadFile::metadata_only("a.pdf", 100, "application/pdf")];
        assert_eq!(selection_error(&files), None);
    }
}

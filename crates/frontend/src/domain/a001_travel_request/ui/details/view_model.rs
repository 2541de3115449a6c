use super::model;
use crate::shared::api::ApiClient;
use contracts::domain::a001_travel_request::{ReportDraft, TravelRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel for a single travel request
#[derive(Clone, Copy)]
pub struct RequestDetailViewModel {
    pub request: RwSignal<Option<TravelRequest>>,
    pub draft: RwSignal<ReportDraft>,
    pub editing: RwSignal<bool>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl RequestDetailViewModel {
    pub fn new() -> Self {
        Self {
            request: RwSignal::new(None),
            draft: RwSignal::new(ReportDraft::default()),
            editing: RwSignal::new(false),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    pub fn load(&self, client: ApiClient, id: String) {
        let this = *self;
        this.loading.set(true);
        this.error.set(None);

        spawn_local(async move {
            match model::fetch_by_id(&client, &id).await {
                Ok(request) => this.request.set(Some(request)),
                Err(e) => {
                    log::error!("{}", e);
                    this.error.set(Some(e));
                }
            }
            this.loading.set(false);
        });
    }

    pub fn start_edit(&self) {
        if let Some(request) = self.request.get_untracked() {
            self.draft.set(request.to_draft());
            self.editing.set(true);
            self.error.set(None);
        }
    }

    pub fn cancel_edit(&self) {
        self.editing.set(false);
        self.error.set(None);
    }

    pub fn save_command(&self, client: ApiClient, id: String) {
        let mut draft = self.draft.get_untracked();
        draft.recalculate_total();
        let this = *self;
        this.saving.set(true);
        this.error.set(None);

        spawn_local(async move {
            match model::save(&client, &id, &draft).await {
                Ok(updated) => {
                    this.request.set(Some(updated));
                    this.editing.set(false);
                }
                Err(e) => {
                    log::error!("Update report failed: {}", e);
                    this.error.set(Some(e));
                }
            }
            this.saving.set(false);
        });
    }
}

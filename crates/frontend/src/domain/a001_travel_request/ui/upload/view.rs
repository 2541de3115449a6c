use super::view_model::UploadReportViewModel;
use crate::domain::a001_travel_request::ui::draft_form::ReportDraftForm;
use crate::routes::AppRoute;
use crate::shared::api::use_api_client;
use crate::shared::format::format_file_size;
use contracts::shared::upload::{MAX_UPLOAD_FILES, MAX_UPLOAD_FILE_SIZE};
use leptos::prelude::*;
use leptos_router::components::Redirect;
use thaw::*;

#[component]
pub fn UploadReport() -> impl IntoView {
    let client = use_api_client();
    let vm = UploadReportViewModel::new();

    let on_generate = {
        let client = client.clone();
        move |_| vm.generate_command(client.clone())
    };
    let on_submit = move |_| vm.submit_command(client.clone());

    view! {
        <div class="page upload-report">
            <h2>"Upload travel report"</h2>
            <p class="hint">
                {format!(
                    "Select up to {} PDF files, {} each at most.",
                    MAX_UPLOAD_FILES,
                    format_file_size(MAX_UPLOAD_FILE_SIZE),
                )}
            </p>

            <div class="form-group">
                <input
                    type="file"
                    accept=".pdf,application/pdf"
                    multiple=true
                    on:change=move |ev| {
                        let input: web_sys::HtmlInputElement = event_target(&ev);
                        if let Some(list) = input.files() {
                            vm.select_files(&list);
                        }
                    }
                />
            </div>

            <ul class="file-list">
                {move || vm.files.with(|files| {
                    files
                        .iter()
                        .map(|f| view! { <li>{format!("{} ({})", f.name(), format_file_size(f.size()))}</li> })
                        .collect_view()
                })}
            </ul>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <Flex gap=FlexGap::Large>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || !vm.can_generate())
                    on_click=on_generate
                >
                    "Generate report"
                </Button>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| vm.reset()>
                    "Clear"
                </Button>
            </Flex>

            <Show when=move || vm.generating.get() || vm.submitting.get()>
                <Spinner />
            </Show>

            <Show when=move || vm.has_draft.get()>
                <h3>"Review extracted report"</h3>
                <ReportDraftForm draft=vm.draft />
                <div class="details-actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || !vm.can_submit())
                        on_click=on_submit.clone()
                    >
                        "Submit report"
                    </Button>
                </div>
            </Show>

            {move || vm.submitted_id.get().map(|id| {
                let path = AppRoute::RequestDetail { id }.href();
                view! { <Redirect path=path /> }
            })}
        </div>
    }
}

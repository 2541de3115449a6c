use super::view_model::RequestDetailViewModel;
use crate::domain::a001_travel_request::ui::draft_form::ReportDraftForm;
use crate::shared::api::use_api_client;
use crate::shared::format::{format_amount, format_datetime, format_file_size};
use contracts::domain::a001_travel_request::{RequestStatus, TravelRequest};
use leptos::prelude::*;
use thaw::*;

fn status_color(status: RequestStatus) -> BadgeColor {
    match status {
        RequestStatus::Approved => BadgeColor::Success,
        RequestStatus::Rejected => BadgeColor::Danger,
        RequestStatus::PendingReview => BadgeColor::Warning,
        RequestStatus::Pending => BadgeColor::Brand,
    }
}

fn request_summary(request: TravelRequest) -> impl IntoView {
    let expenses = request
        .expenses
        .into_iter()
        .map(|e| {
            view! {
                <tr>
                    <td>{e.date}</td>
                    <td>{e.category}</td>
                    <td>{e.description}</td>
                    <td class="amount">{format_amount(e.amount)}</td>
                </tr>
            }
        })
        .collect_view();

    let documents = request
        .documents
        .into_iter()
        .map(|d| {
            view! {
                <li>{format!("{} ({})", d.file_name, format_file_size(d.file_size))}</li>
            }
        })
        .collect_view();

    let history = request
        .history
        .into_iter()
        .map(|h| {
            view! {
                <li>
                    <strong>{h.title}</strong>
                    {format!(" by {} at {}", h.user, format_datetime(&h.date))}
                    {h.comments.map(|c| view! { <div class="comment">{c}</div> })}
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="details-grid">
            <div><label>"Requester"</label><span>{request.requester}</span></div>
            <div><label>"Department"</label><span>{request.department}</span></div>
            <div><label>"Position"</label><span>{request.position}</span></div>
            <div><label>"Period"</label><span>{format!("{} – {}", request.start_date, request.end_date)}</span></div>
            <div><label>"Total"</label><span>{format_amount(request.total_amount)}</span></div>
            <div><label>"Updated"</label><span>{format_datetime(&request.metadata.updated_at)}</span></div>
        </div>

        <h4>"Expenses"</h4>
        <table class="expenses-table">
            <thead>
                <tr>
                    <th>"Date"</th>
                    <th>"Category"</th>
                    <th>"Description"</th>
                    <th>"Amount"</th>
                </tr>
            </thead>
            <tbody>{expenses}</tbody>
        </table>

        <h4>"Documents"</h4>
        <ul class="documents">{documents}</ul>

        <h4>"History"</h4>
        <ul class="history">{history}</ul>
    }
}

/// Travel request page. `id` comes from the `/requests/:id` route.
#[component]
pub fn RequestDetail(id: String) -> impl IntoView {
    let client = use_api_client();
    let vm = RequestDetailViewModel::new();
    vm.load(client.clone(), id.clone());

    let on_save = move |_| vm.save_command(client.clone(), id.clone());

    view! {
        <div class="page request-detail">
            <div class="details-header">
                <h2>"Travel request"</h2>
                {move || vm.request.get().map(|r| view! {
                    <Badge appearance=BadgeAppearance::Filled color=status_color(r.status)>
                        {r.status.label()}
                    </Badge>
                })}
            </div>

            <Show when=move || vm.loading.get()>
                <Spinner />
            </Show>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <Show
                when=move || vm.editing.get()
                fallback=move || view! {
                    {move || vm.request.get().map(request_summary)}
                    <Show when=move || vm.request.with(|r| r.is_some())>
                        <div class="details-actions">
                            <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.start_edit()>
                                "Edit"
                            </Button>
                        </div>
                    </Show>
                }
            >
                <ReportDraftForm draft=vm.draft />
                <div class="details-actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || vm.saving.get())
                        on_click=on_save.clone()
                    >
                        "Save"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.cancel_edit()>
                        "Cancel"
                    </Button>
                </div>
            </Show>
        </div>
    }
}

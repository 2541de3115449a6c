use crate::routes::AppRoute;
use crate::shared::api::use_api_client;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

/// Landing page: backend connectivity check and entry point to the upload flow
#[component]
pub fn Overview() -> impl IntoView {
    let client = use_api_client();

    let (checking, set_checking) = signal(false);
    let (status, set_status) = signal(None::<String>);
    let (error, set_error) = signal(None::<String>);

    let check_connection = move |_| {
        let client = client.clone();
        set_checking.set(true);
        set_status.set(None);
        set_error.set(None);

        spawn_local(async move {
            match client.test_connection().await {
                Ok(response) => {
                    log::info!("Backend connection: {}", response.status);
                    set_status.set(Some(response.message));
                }
                Err(e) => {
                    log::error!("Backend connection failed: {}", e);
                    set_error.set(Some(format!("Connection failed: {}", e)));
                }
            }
            set_checking.set(false);
        });
    };

    view! {
        <div class="page overview">
            <h1>"Travel Expense Reports"</h1>
            <p class="subtitle">
                "Upload PDF receipts, review the extracted report and submit it for approval."
            </p>

            <Flex gap=FlexGap::Large>
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || checking.get())
                    on_click=check_connection
                >
                    "Test backend connection"
                </Button>
                <A href=AppRoute::UploadReport.href()>
                    <Button appearance=ButtonAppearance::Primary>"Upload report"</Button>
                </A>
            </Flex>

            <Show when=move || checking.get()>
                <Spinner />
            </Show>

            {move || status.get().map(|s| view! {
                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>{s}</Badge>
            })}
            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
        </div>
    }
}

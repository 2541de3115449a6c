use crate::routes::AppRoutes;
use crate::shared::api::{ApiClient, ClientConfig};
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Один HTTP-клиент на всё приложение, доступен через use_api_client()
    provide_context(ApiClient::browser(ClientConfig::default()));

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}

//! Client-side routes
//!
//! Path patterns live in the `*_path!` macros below: `AppRoutes` registers
//! them with leptos_router and the tests match against the very same values.

use crate::dashboards::d400_overview::ui::Overview;
use crate::domain::a001_travel_request::ui::details::RequestDetail;
use crate::domain::a001_travel_request::ui::upload::UploadReport;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::hooks::use_params_map;

macro_rules! dashboard_path {
    () => {
        leptos_router::path!("/")
    };
}

macro_rules! upload_report_path {
    () => {
        leptos_router::path!("/upload-report")
    };
}

/// `id` is passed to `RequestDetail` as a prop
macro_rules! request_detail_path {
    () => {
        leptos_router::path!("/requests/:id")
    };
}

/// Navigation targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    Dashboard,
    UploadReport,
    RequestDetail { id: String },
}

impl AppRoute {
    pub fn href(&self) -> String {
        match self {
            AppRoute::Dashboard => "/".to_string(),
            AppRoute::UploadReport => "/upload-report".to_string(),
            AppRoute::RequestDetail { id } => format!("/requests/{}", urlencoding::encode(id)),
        }
    }
}

/// `/requests/:id` - forwards the `id` param as a prop
#[component]
fn RequestDetailRoute() -> impl IntoView {
    let params = use_params_map();
    let id = move || params.read().get("id").unwrap_or_default();

    move || {
        let id = id();
        view! { <RequestDetail id=id /> }
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page not-found">
            <h2>"Page not found"</h2>
            <A href=AppRoute::Dashboard.href()>"Back to dashboard"</A>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <nav class="top-nav">
                <A href=AppRoute::Dashboard.href()>"Dashboard"</A>
                <A href=AppRoute::UploadReport.href()>"Upload report"</A>
            </nav>
            <main class="app-main">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=dashboard_path!() view=Overview />
                    <Route path=upload_report_path!() view=UploadReport />
                    <Route path=request_detail_path!() view=RequestDetailRoute />
                </Routes>
            </main>
        </Router>
    }
}

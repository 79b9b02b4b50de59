use crate::routes::AppRoutes;
use crate::shared::toast::{ToastService, Toaster};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the ToastService to the whole app via context.
    provide_context(ToastService::new());

    view! {
        <AppRoutes />
        <Toaster />
    }
}

use crate::chat::ChatPage;
use crate::routes::not_found::NotFoundPage;
use crate::upload::UploadPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// Client-side routes: `/` (upload), `/chat` (requires navigation state) and a
/// catch-all not-found page.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=UploadPage />
                <Route path=path!("/chat") view=ChatPage />
            </Routes>
        </Router>
    }
}

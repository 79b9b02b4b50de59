use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Static fallback for unmatched routes.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="page page--centered">
            <div class="card card--narrow">
                <div class="not-found__badge">{icon("alert-circle")}</div>
                <h1 class="not-found__title">"Page Not Found"</h1>
                <p class="not-found__text">
                    "Sorry, we couldn't find the page you're looking for. "
                    "It might have been moved or doesn't exist."
                </p>
                <button
                    class="button button--primary button--wide"
                    on:click=move |_| navigate("/", Default::default())
                >
                    {icon("home")}
                    " Return to Home"
                </button>
                <p class="not-found__hint">
                    "Try uploading your documents again from the homepage."
                </p>
            </div>
        </div>
    }
}

use crate::shared::icons::icon;
use leptos::prelude::*;

/// Typing indicator row shown while a query is in flight.
#[component]
pub fn ThinkingAnimation() -> impl IntoView {
    view! {
        <div class="thinking">
            <div class="thinking__avatar">{icon("brain")}</div>
            <div class="thinking__bubble">
                <span class="thinking__spark">{icon("sparkles")}</span>
                <span class="thinking__dot"></span>
                <span class="thinking__dot thinking__dot--second"></span>
                <span class="thinking__dot thinking__dot--third"></span>
                <span class="thinking__text">"AI is thinking..."</span>
            </div>
        </div>
    }
}

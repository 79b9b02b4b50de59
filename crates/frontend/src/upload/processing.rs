//! Staged "processing" overlay shown while an upload is in flight.
//!
//! The pacing is purely cosmetic: steps advance on a timer, not on any signal
//! from the backend.

use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

/// Icon name and label for each stage of the animation.
pub const PROCESSING_STEPS: [(&str, &str); 3] = [
    ("file-text", "Reading your document..."),
    ("brain", "Analyzing content..."),
    ("zap", "Preparing AI assistant..."),
];

/// Percent fill of the progress bar once `step` (0-based) has been reached.
pub fn step_progress_percent(step: usize) -> usize {
    ((step + 1) * 100) / PROCESSING_STEPS.len()
}

/// Whether a finished timer may still report completion. `None` means the
/// liveness flag was disposed along with the overlay.
fn completion_allowed(alive: Option<bool>) -> bool {
    alive.unwrap_or(false)
}

#[component]
#[allow(non_snake_case)]
pub fn ProcessingAnimation(
    /// Leading message shown next to the current step label
    #[prop(default = String::from("Processing your PDF..."), into)]
    message: String,
    /// Total duration of the staged animation in milliseconds
    #[prop(default = 3000)]
    duration_ms: u32,
    /// Fired 500 ms after the last step completes
    on_complete: Callback<()>,
) -> impl IntoView {
    let (current_step, set_current_step) = signal(0usize);

    // A retried upload mounts a fresh overlay while the previous instance's
    // timer may still be pending. The flag dies with the instance, so a stale
    // timer can never fire `on_complete` for its successor.
    let alive = StoredValue::new(true);
    on_cleanup(move || {
        alive.try_set_value(false);
    });

    leptos::task::spawn_local(async move {
        let step_ms = duration_ms / PROCESSING_STEPS.len() as u32;
        for step in 1..PROCESSING_STEPS.len() {
            TimeoutFuture::new(step_ms).await;
            if !completion_allowed(alive.try_get_value()) {
                return;
            }
            set_current_step.set(step);
        }
        // Hold the last step for its slot, then linger briefly before handing
        // control back.
        TimeoutFuture::new(step_ms).await;
        TimeoutFuture::new(500).await;
        if completion_allowed(alive.try_get_value()) {
            on_complete.run(());
        }
    });

    view! {
        <div class="processing">
            <div class="processing__panel">
                <div class="processing__rings">
                    <div class="processing__ring processing__ring--outer"></div>
                    <div class="processing__ring processing__ring--spin"></div>
                    <div class="processing__ring processing__ring--ping"></div>
                    <div class="processing__icon">
                        {move || icon(PROCESSING_STEPS[current_step.get()].0)}
                    </div>
                </div>

                <h2 class="processing__title">"ScholarSight"</h2>
                <p class="processing__label">
                    {message}
                    " "
                    {move || PROCESSING_STEPS[current_step.get()].1}
                </p>

                <div class="progress">
                    <div
                        class="progress__fill"
                        style=move || {
                            format!("width: {}%", step_progress_percent(current_step.get()))
                        }
                    ></div>
                </div>

                <div class="processing__dots">
                    {(0..PROCESSING_STEPS.len())
                        .map(|i| {
                            view! {
                                <div class=move || {
                                    if i <= current_step.get() {
                                        "processing__dot processing__dot--active"
                                    } else {
                                        "processing__dot"
                                    }
                                }></div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_grows_to_full() {
        assert_eq!(step_progress_percent(0), 33);
        assert_eq!(step_progress_percent(1), 66);
        assert_eq!(step_progress_percent(2), 100);
    }

    #[test]
    fn stale_overlay_never_completes() {
        assert!(completion_allowed(Some(true)));
        // Torn down before the timer fired, or disposed outright.
        assert!(!completion_allowed(Some(false)));
        assert!(!completion_allowed(None));
    }
}

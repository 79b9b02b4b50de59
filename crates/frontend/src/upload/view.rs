//! Upload page - View Component

use super::processing::ProcessingAnimation;
use super::view_model::{can_submit, UploadVm};
use crate::shared::api::upload_pdf;
use crate::shared::components::ui::{Button, Input};
use crate::shared::format::format_file_size;
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;
use contracts::chat::ChatSession;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::location::State;
use leptos_router::NavigateOptions;
use wasm_bindgen::JsCast;

#[component]
pub fn UploadPage() -> impl IntoView {
    let vm = UploadVm::new();
    let toasts = use_context::<ToastService>().expect("ToastService not provided in context");
    let navigate = use_navigate();

    // Leave for the chat route once the upload has succeeded AND the staged
    // animation has run its course, carrying the session as history state.
    Effect::new(move |_| {
        if !(vm.upload_ok.get() && vm.animation_done.get()) {
            return;
        }
        let session = ChatSession {
            collection_name: vm.collection_name.get_untracked().trim().to_string(),
            file_name: vm
                .selected_file
                .get_untracked()
                .map(|f| f.name())
                .unwrap_or_default(),
        };
        let state = serde_wasm_bindgen::to_value(&session)
            .map(|js| State::new(Some(js)))
            .unwrap_or_default();
        navigate(
            "/chat",
            NavigateOptions {
                state,
                ..Default::default()
            },
        );
    });

    // File picker
    let handle_file_select = move |ev: leptos::ev::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
        if let Some(file) = input.and_then(|i| i.files()).and_then(|files| files.get(0)) {
            vm.accept_file(file);
        }
    };

    // Drag and drop
    let handle_drag_over = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        vm.drag_active.set(true);
    };
    let handle_drag_leave = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        vm.drag_active.set(false);
    };
    let handle_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        vm.drag_active.set(false);
        if let Some(file) = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0))
        {
            vm.accept_file(file);
        }
    };

    let handle_upload = Callback::new(move |_| {
        let file = vm.selected_file.get_untracked();
        let name = vm.collection_name.get_untracked().trim().to_string();
        let Some(file) = file else {
            vm.error
                .set(Some("Please select a file and provide a collection name.".to_string()));
            return;
        };
        if name.is_empty() {
            vm.error
                .set(Some("Please select a file and provide a collection name.".to_string()));
            return;
        }

        vm.is_processing.set(true);
        vm.error.set(None);
        vm.upload_ok.set(false);
        vm.animation_done.set(false);

        leptos::task::spawn_local(async move {
            match upload_pdf(file, &name).await {
                Ok(resp) if resp.is_success() => {
                    toasts.success("Upload successful!", format!("Indexed under \"{}\"", name));
                    vm.upload_ok.set(true);
                }
                Ok(_) => {
                    vm.error.set(Some("Upload failed".to_string()));
                    vm.is_processing.set(false);
                }
                Err(e) => {
                    log::error!("Upload error: {}", e);
                    vm.error.set(Some(e));
                    vm.is_processing.set(false);
                }
            }
        });
    });

    let dropzone_class = move || {
        if vm.drag_active.get() {
            "dropzone dropzone--active"
        } else if vm.selected_file.with(|f| f.is_some()) {
            "dropzone dropzone--selected"
        } else {
            "dropzone"
        }
    };

    let submit_disabled = Signal::derive(move || {
        !can_submit(
            vm.selected_file.with(|f| f.is_some()),
            &vm.collection_name.get(),
        )
    });

    view! {
        <div class="page page--centered page--upload">
            <Show when=move || vm.is_processing.get()>
                <ProcessingAnimation on_complete=Callback::new(move |_| {
                    vm.animation_done.set(true)
                }) />
            </Show>

            <div class="upload">
                <div class="upload__hero">
                    <div class="upload__logo">{icon("file-text")}</div>
                    <h1 class="upload__title">"ScholarSight"</h1>
                    <p class="upload__subtitle">"AI Powered Research Assistant"</p>
                </div>

                <Input
                    label="Collection Name"
                    value=vm.collection_name
                    on_input=Callback::new(move |v: String| vm.collection_name.set(v))
                    placeholder="Enter a unique name for your document set"
                />

                <div class="form__group">
                    <label class="form__label">"Upload PDF Document"</label>
                    <div
                        class=dropzone_class
                        on:dragenter=handle_drag_over
                        on:dragover=handle_drag_over
                        on:dragleave=handle_drag_leave
                        on:drop=handle_drop
                    >
                        <input
                            type="file"
                            accept=".pdf"
                            class="dropzone__input"
                            on:change=handle_file_select
                        />
                        {move || match vm.selected_file.get() {
                            Some(file) => view! {
                                <div class="dropzone__body">
                                    <div class="dropzone__icon dropzone__icon--selected">
                                        {icon("file-text")}
                                    </div>
                                    <p class="dropzone__name">{file.name()}</p>
                                    <p class="dropzone__size">{format_file_size(file.size())}</p>
                                </div>
                            }
                            .into_any(),
                            None => view! {
                                <div class="dropzone__body">
                                    <div class="dropzone__icon">{icon("upload")}</div>
                                    <p class="dropzone__name">
                                        "Drop your PDF here or click to browse"
                                    </p>
                                    <p class="dropzone__hint">
                                        "PDF files only • Max 10MB • Secure processing"
                                    </p>
                                </div>
                            }
                            .into_any(),
                        }}
                    </div>
                </div>

                {move || {
                    vm.error
                        .get()
                        .map(|e| view! { <div class="form__error">{e}</div> })
                }}

                <Button
                    class="button--wide"
                    disabled=submit_disabled
                    on_click=handle_upload
                >
                    "Process PDF with AI "
                    {icon("arrow-right")}
                </Button>
            </div>
        </div>
    }
}

//! Chat page - View Component

use super::thinking::ThinkingAnimation;
use super::view_model::{reply_from_result, ChatVm};
use crate::shared::api::query_pdf;
use crate::shared::clipboard::copy_to_clipboard_with_callback;
use crate::shared::components::ui::{Button, Input};
use crate::shared::download::download_text;
use crate::shared::format::format_clock_time;
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;
use chrono::Utc;
use contracts::chat::{ChatRole, ChatSession, Message};
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[component]
pub fn ChatPage() -> impl IntoView {
    let vm = ChatVm::new();
    let toasts = use_context::<ToastService>().expect("ToastService not provided in context");
    let navigate = use_navigate();
    let location = use_location();

    // Session carried over from the upload page via history state.
    let session = serde_wasm_bindgen::from_value::<ChatSession>(
        location.state.get_untracked().to_js_value(),
    )
    .ok();

    // Unreachable without a session: bounce back to the upload page.
    Effect::new({
        let navigate = navigate.clone();
        let missing = session.is_none();
        move |_| {
            if missing {
                navigate("/", Default::default());
            }
        }
    });

    let ChatSession {
        collection_name,
        file_name,
    } = session.unwrap_or(ChatSession {
        collection_name: String::new(),
        file_name: String::new(),
    });

    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let scroll_to_bottom = move || {
        if let Some(container) = messages_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    };

    let handle_send = {
        let collection_name = collection_name.clone();
        move || {
            let text = vm.input.get_untracked();
            if text.trim().is_empty() || vm.is_loading.get_untracked() {
                return;
            }

            vm.messages.update(|m| m.push(Message::user(text.clone())));
            vm.input.set(String::new());
            vm.is_loading.set(true);
            scroll_to_bottom();

            let collection_name = collection_name.clone();
            leptos::task::spawn_local(async move {
                let (reply, toast_error) =
                    reply_from_result(query_pdf(&text, &collection_name).await);
                if let Some(detail) = toast_error {
                    toasts.error("Error", detail);
                }
                vm.messages.update(|m| m.push(reply));
                vm.is_loading.set(false);
                scroll_to_bottom();
            });
        }
    };

    let send_disabled =
        Signal::derive(move || vm.input.get().trim().is_empty() || vm.is_loading.get());

    let header_collection = collection_name.clone();
    let empty_state_file = file_name.clone();

    view! {
        <div class="page page--chat">
            <header class="chat-header">
                <button
                    class="button button--ghost chat-header__back"
                    on:click=move |_| navigate("/", Default::default())
                >
                    {icon("arrow-left")}
                    " Back to Upload"
                </button>
                <div class="chat-header__collection">
                    <p class="chat-header__collection-label">"Active Collection"</p>
                    <p class="chat-header__collection-name">{header_collection}</p>
                </div>
            </header>

            <div class="chat-messages" node_ref=messages_ref>
                <Show when=move || vm.messages.with(|m| m.is_empty())>
                    <div class="chat-empty">
                        <div class="chat-empty__icon">{icon("bot")}</div>
                        <h3 class="chat-empty__title">"Ready to analyze your document"</h3>
                        <p class="chat-empty__text">
                            "Ask me anything about: "
                            <span class="chat-empty__file">
                                "\"" {empty_state_file.clone()} "\""
                            </span>
                        </p>
                        <p class="chat-empty__hint">
                            "I can help you summarize, analyze, or answer specific questions about your PDF"
                        </p>
                    </div>
                </Show>

                <For each=move || vm.messages.get() key=|msg| msg.id let:msg>
                    <MessageBubble msg=msg />
                </For>

                <Show when=move || vm.is_loading.get()>
                    <ThinkingAnimation />
                </Show>
            </div>

            <footer class="chat-input">
                <Input
                    value=vm.input
                    on_input=Callback::new(move |v: String| vm.input.set(v))
                    on_keydown=Callback::new({
                        let handle_send = handle_send.clone();
                        move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" && !ev.shift_key() {
                                ev.prevent_default();
                                handle_send();
                            }
                        }
                    })
                    placeholder="What would you like to know about your document?"
                    disabled=Signal::derive(move || vm.is_loading.get())
                    class="chat-input__field"
                />
                <Button
                    disabled=send_disabled
                    on_click=Callback::new(move |_| handle_send())
                >
                    {icon("send")}
                </Button>
            </footer>
        </div>
    }
}

/// One transcript entry: avatar, bubble, timestamp, and (for assistant
/// replies) copy/download affordances.
#[component]
fn MessageBubble(msg: Message) -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not provided in context");
    let is_user = msg.role == ChatRole::User;
    let timestamp = format_clock_time(&msg.timestamp);

    let copy_content = msg.content.clone();
    let handle_copy = move |_| {
        copy_to_clipboard_with_callback(&copy_content, move || {
            toasts.success(
                "Copied to clipboard",
                "The response has been copied to your clipboard.",
            );
        });
    };

    let download_content = msg.content.clone();
    let handle_download = move |_| {
        let filename = format!("response-{}.docx", Utc::now().timestamp_millis());
        match download_text(&download_content, &filename, DOCX_MIME) {
            Ok(()) => toasts.success(
                "Download started",
                "Your response is being downloaded as a DOCX file.",
            ),
            Err(e) => {
                log::error!("Download failed: {}", e);
                toasts.error("Download failed", e);
            }
        }
    };

    view! {
        <div class=if is_user { "chat-row chat-row--user" } else { "chat-row" }>
            <Show when=move || !is_user>
                <div class="chat-avatar chat-avatar--bot">{icon("bot")}</div>
            </Show>

            <div class=if is_user { "bubble bubble--user" } else { "bubble" }>
                <div class="bubble__body">
                    <p class="bubble__content">{msg.content.clone()}</p>
                    <Show when=move || !is_user>
                        <div class="bubble__actions">
                            <button
                                class="button button--ghost bubble__action"
                                on:click=handle_copy.clone()
                            >
                                {icon("copy")}
                            </button>
                            <button
                                class="button button--ghost bubble__action"
                                on:click=handle_download.clone()
                            >
                                {icon("download")}
                            </button>
                        </div>
                    </Show>
                </div>
                <p class="bubble__time">{timestamp}</p>
            </div>

            <Show when=move || is_user>
                <div class="chat-avatar chat-avatar--user">{icon("user")}</div>
            </Show>
        </div>
    }
}

//! Text input plus Send button shared by both chat pages.

use leptos::prelude::*;

/// Input row showing `value`; `on_send` fires on button click or Enter.
#[component]
pub fn ChatInput(
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    on_send: Callback<()>,
) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            on_send.run(());
        }
    };

    view! {
        <div class="chat-input">
            <input
                class="chat-input__field"
                type="text"
                placeholder="Type your message..."
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                on:keydown=on_keydown
            />
            <button class="btn btn--primary chat-input__send" on:click=move |_| on_send.run(())>
                "Send"
            </button>
        </div>
    }
}

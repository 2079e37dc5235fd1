use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::status::ErrorBanner;
use crate::hooks::use_chat::use_chat;
use crate::models::chat::{ChatMessage, ChatRole};

const EXAMPLE_PROMPTS: [&str; 4] = [
    "What is Bitcoin and how does it work?",
    "Explain Bitcoin mining in simple terms",
    "What makes Bitcoin different from traditional money?",
    "Who created Bitcoin and why?",
];

#[derive(Properties, PartialEq)]
pub struct ChatPanelProps {
    #[prop_or_default]
    pub session_id: Option<AttrValue>,
}

/// Chat assistant panel: example prompts, message transcript and input row.
#[function_component(ChatPanel)]
pub fn chat_panel(props: &ChatPanelProps) -> Html {
    let chat = use_chat(props.session_id.as_ref().map(ToString::to_string));
    let draft = use_state(String::new);

    let oninput = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(input.value());
        })
    };

    let submit = {
        let draft = draft.clone();
        let send = chat.send.clone();
        Callback::from(move |()| {
            let text = (*draft).clone();
            if text.trim().is_empty() {
                return;
            }
            draft.set(String::new());
            send.emit((text, None));
        })
    };

    let onclick_send = {
        let submit = submit.clone();
        Callback::from(move |_: MouseEvent| submit.emit(()))
    };

    let onkeydown = {
        let submit = submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" && !e.shift_key() {
                e.prevent_default();
                submit.emit(());
            }
        })
    };

    let clear = {
        let clear_messages = chat.clear_messages.clone();
        Callback::from(move |_: MouseEvent| clear_messages.emit(()))
    };

    let examples = EXAMPLE_PROMPTS
        .iter()
        .map(|&prompt| {
            let draft = draft.clone();
            let onclick = Callback::from(move |_| draft.set(prompt.to_string()));
            html! {
                <button class="example-prompt" {onclick}>{prompt}</button>
            }
        })
        .collect::<Html>();

    html! {
        <section class="chat-section">
            <div class="chat-section-header">
                <h2>{"Chat Assistant"}</h2>
                if !chat.conversation.is_empty() {
                    <button class="chat-clear" onclick={clear}>{"Clear"}</button>
                }
            </div>

            if let Some(error) = chat.error.clone() {
                <ErrorBanner message={error} on_dismiss={chat.clear_error.clone()} />
            }

            <div class="chat-messages">
                if chat.conversation.is_empty() && !chat.is_loading {
                    <div class="chat-welcome">
                        <p>{"I'm ready for all your Bitcoin questions"}</p>
                        <div class="example-prompts">{examples}</div>
                    </div>
                }
                { chat.conversation.messages().iter().map(render_message).collect::<Html>() }
                if chat.is_loading {
                    <div class="chat-message assistant typing">
                        <span class="dot" /><span class="dot" /><span class="dot" />
                    </div>
                }
            </div>

            <div class="chat-input-row">
                <input
                    type="text"
                    class="chat-input"
                    placeholder="Ask about Bitcoin..."
                    value={(*draft).clone()}
                    {oninput}
                    {onkeydown}
                />
                <button class="chat-send" onclick={onclick_send}>{"↑"}</button>
            </div>
        </section>
    }
}

fn render_message(message: &ChatMessage) -> Html {
    let role_class = match message.role {
        ChatRole::User => "user",
        ChatRole::Assistant => "assistant",
    };

    html! {
        <div class={classes!("chat-message", role_class)} key={message.id.clone()}>
            <p class="chat-content">{message.content.clone()}</p>
            if !message.citations.is_empty() {
                <ul class="chat-citations">
                    {
                        message.citations.iter().map(|citation| html! {
                            <li>{citation.clone()}</li>
                        }).collect::<Html>()
                    }
                </ul>
            }
            {
                message.model_used.as_ref().map(|model| html! {
                    <span class="chat-model">{model.clone()}</span>
                })
            }
        </div>
    }
}

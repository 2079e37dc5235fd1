use std::cell::RefCell;
use std::rc::Rc;

use chrono::Utc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::Config;
use crate::models::chat::{ChatResponse, Conversation};
use crate::services::chat_api;

/// State transitions of the chat log. Reduction appends; nothing is ever
/// removed except by `Clear`.
pub enum ChatAction {
    UserMessage(String),
    AssistantReply(ChatResponse),
    SendFailed,
    Clear,
}

impl Reducible for Conversation {
    type Action = ChatAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let now = Utc::now();
        match action {
            ChatAction::UserMessage(text) => Rc::new(self.with_user_message(&text, now)),
            ChatAction::AssistantReply(response) => {
                Rc::new(self.with_assistant_reply(&response, now))
            }
            ChatAction::SendFailed => Rc::new(self.with_error_reply(now)),
            ChatAction::Clear => Rc::new(Self::default()),
        }
    }
}

/// Handle returned by the `use_chat` hook. `send` takes the message text
/// plus an optional per-call session id overriding the one the hook was
/// created with.
#[derive(Clone, PartialEq)]
pub struct ChatHandle {
    pub conversation: UseReducerHandle<Conversation>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub send: Callback<(String, Option<String>)>,
    pub clear_messages: Callback<()>,
    pub clear_error: Callback<()>,
}

/// Per-send override falls back to the session bound at hook creation.
fn resolve_session(override_id: Option<&str>, bound: &str) -> String {
    override_id.map_or_else(|| bound.to_string(), ToString::to_string)
}

/// Chat hook: append-only message log, optimistic user append, fixed
/// apology turn plus inline error string on failure. Overlapping sends are
/// allowed; there is no in-flight guard.
#[hook]
pub fn use_chat(session_id: Option<String>) -> ChatHandle {
    let session_id = session_id.unwrap_or_else(|| Config::DEFAULT_SESSION_ID.to_string());
    let conversation = use_reducer(Conversation::default);
    let is_loading = use_state(|| false);
    let error = use_state(|| None::<String>);

    // Late responses must not touch state after unmount
    let alive = use_mut_ref(|| true);
    {
        let alive = alive.clone();
        use_effect_with((), move |()| {
            move || {
                *alive.borrow_mut() = false;
            }
        });
    }

    let send = {
        let conversation = conversation.clone();
        let is_loading = is_loading.clone();
        let error = error.clone();
        let alive = alive.clone();
        Callback::from(move |(text, session_override): (String, Option<String>)| {
            let text = text.trim().to_string();
            if text.is_empty() {
                return;
            }

            error.set(None);
            conversation.dispatch(ChatAction::UserMessage(text.clone()));
            is_loading.set(true);

            let conversation = conversation.clone();
            let is_loading = is_loading.clone();
            let error = error.clone();
            let session = resolve_session(session_override.as_deref(), &session_id);
            let alive: Rc<RefCell<bool>> = alive.clone();
            spawn_local(async move {
                let result = chat_api::send_chat_message(&text, &session).await;
                if !*alive.borrow() {
                    return;
                }
                match result {
                    Ok(response) => conversation.dispatch(ChatAction::AssistantReply(response)),
                    Err(e) => {
                        conversation.dispatch(ChatAction::SendFailed);
                        error.set(Some(e.to_string()));
                    }
                }
                is_loading.set(false);
            });
        })
    };

    let clear_messages = {
        let conversation = conversation.clone();
        let error = error.clone();
        Callback::from(move |()| {
            conversation.dispatch(ChatAction::Clear);
            error.set(None);
        })
    };

    let clear_error = {
        let error = error.clone();
        Callback::from(move |()| error.set(None))
    };

    ChatHandle {
        conversation: conversation.clone(),
        is_loading: *is_loading,
        error: (*error).clone(),
        send,
        clear_messages,
        clear_error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_uses_the_bound_session_by_default() {
        assert_eq!(resolve_session(None, "default"), "default");
    }

    #[test]
    fn per_send_override_wins_over_the_bound_session() {
        assert_eq!(resolve_session(Some("research"), "default"), "research");
    }
}

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            MessageKind::Success => "message success show",
            MessageKind::Error => "message error show",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub kind: MessageKind,
}

/// Global success/error banner.
///
/// A message hides itself after `timeout_ms`; a newer message restarts the
/// countdown instead of being cleared by the older timer.
#[derive(Clone, Copy)]
pub struct MessageService {
    current: RwSignal<Option<Message>>,
    generation: StoredValue<u64>,
    timeout_ms: u32,
}

impl MessageService {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            current: RwSignal::new(None),
            generation: StoredValue::new(0),
            timeout_ms,
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(text.into(), MessageKind::Success);
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(text.into(), MessageKind::Error);
    }

    pub fn current(&self) -> Option<Message> {
        self.current.get()
    }

    /// Hide the current message now
    pub fn clear(&self) {
        self.generation.update_value(|g| *g += 1);
        self.current.set(None);
    }

    fn show(&self, text: String, kind: MessageKind) {
        match kind {
            MessageKind::Success => log::info!("{}", text),
            MessageKind::Error => log::warn!("{}", text),
        }
        let ticket = self.post(text, kind);

        let service = *self;
        spawn_local(async move {
            TimeoutFuture::new(service.timeout_ms).await;
            service.expire(ticket);
        });
    }

    /// Put a message on screen and return the ticket its timer must present
    fn post(&self, text: String, kind: MessageKind) -> u64 {
        self.current.set(Some(Message { text, kind }));
        self.generation.update_value(|g| *g += 1);
        self.generation.get_value()
    }

    /// Hide the message only if nothing newer was posted since `ticket`.
    /// The owner may be gone by then (a closed form), so this never panics.
    fn expire(&self, ticket: u64) {
        if self.generation.try_get_value() == Some(ticket) {
            self.current.try_set(None);
        }
    }
}

#[component]
pub fn MessageBanner(service: MessageService) -> impl IntoView {
    view! {
        <div
            class=move || service.current().map(|m| m.kind.css_class()).unwrap_or("message")
            role="status"
        >
            {move || service.current().map(|m| m.text).unwrap_or_default()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_classes() {
        assert_eq!(MessageKind::Success.css_class(), "message success show");
        assert_eq!(MessageKind::Error.css_class(), "message error show");
    }

    #[test]
    fn test_message_expires_with_its_own_timer() {
        let service = MessageService::new(4000);
        let ticket = service.post("Saved".into(), MessageKind::Success);
        assert_eq!(service.current().map(|m| m.text), Some("Saved".to_string()));

        service.expire(ticket);
        assert_eq!(service.current(), None);
    }

    #[test]
    fn test_older_timer_keeps_newer_message() {
        let service = MessageService::new(4000);
        let first = service.post("Name is required".into(), MessageKind::Error);
        let second = service.post("Invalid date".into(), MessageKind::Error);

        service.expire(first);
        assert_eq!(
            service.current().map(|m| m.text),
            Some("Invalid date".to_string())
        );

        service.expire(second);
        assert_eq!(service.current(), None);
    }

    #[test]
    fn test_clear_outlives_pending_timer() {
        let service = MessageService::new(4000);
        let ticket = service.post("Request failed".into(), MessageKind::Error);
        service.clear();
        assert_eq!(service.current(), None);

        let newer = service.post("Catalogue created".into(), MessageKind::Success);
        service.expire(ticket);
        assert!(service.current().is_some());
        service.expire(newer);
        assert!(service.current().is_none());
    }
}

use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Warning,
}

impl NoticeKind {
    /// CSS modifier used by the toast element.
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Info => "info",
            NoticeKind::Warning => "warning",
        }
    }
}

/// Toast shown to the visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Blocking yes/no question, `window.confirm` in the browser.
pub trait Confirmer: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Notifier that queues notices for the UI layer to drain and display.
#[derive(Default)]
pub struct NoticeQueue {
    notices: Mutex<Vec<Notice>>,
}

impl NoticeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drain(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.notices.lock().unwrap_or_else(|e| e.into_inner()))
    }

    pub fn last(&self) -> Option<Notice> {
        self.notices.lock().unwrap_or_else(|e| e.into_inner()).last().cloned()
    }
}

impl Notifier for NoticeQueue {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap_or_else(|e| e.into_inner()).push(notice);
    }
}

impl<F> Confirmer for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

//! Hooks and traits for host-environment collaborators
//!
//! The submission pipeline reports outcomes through these interfaces without
//! depending on the rendering layer. The host (web frontend, CLI, tests)
//! implements them; no-op/echo implementations are provided for contexts
//! that don't care.

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Navigation targets the pipeline can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    MyApplications,
}

/// Localized string lookup.
///
/// Implementations fall back to echoing the key itself when a key is
/// unresolved, so missing translations degrade visibly instead of panicking.
pub trait Localizer: Send + Sync {
    fn t(&self, key: &str) -> String;
}

/// Localizer that echoes every key; the fallback behavior with no
/// translation catalog at all.
pub struct EchoLocalizer;

impl Localizer for EchoLocalizer {
    fn t(&self, key: &str) -> String {
        key.to_string()
    }
}

/// Fire-and-forget user-facing notifications. No acknowledgment is required
/// and implementations must not block.
pub trait Notifications: Send + Sync {
    fn notify(&self, kind: NoticeKind, title: &str, description: &str);
}

/// No-op implementation for headless contexts.
pub struct NoOpNotifications;

impl Notifications for NoOpNotifications {
    fn notify(&self, _kind: NoticeKind, _title: &str, _description: &str) {}
}

/// Post-submission navigation. Invoked only after a successful run.
pub trait Navigator: Send + Sync {
    fn go_to(&self, route: Route);
}

/// No-op implementation for headless contexts.
pub struct NoOpNavigator;

impl Navigator for NoOpNavigator {
    fn go_to(&self, _route: Route) {}
}

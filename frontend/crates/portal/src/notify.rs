//! User-facing Notifications

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Success(text) | Notice::Error(text) => text,
        }
    }
}

/// Shows transient messages to the user (toasts in a browser)
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);

    fn success(&self, text: &str) {
        self.notify(Notice::Success(text.to_string()));
    }

    fn error(&self, text: &str) {
        self.notify(Notice::Error(text.to_string()));
    }
}

/// Emits notices as log events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        match notice {
            Notice::Success(text) => tracing::info!(notice = %text, "Success"),
            Notice::Error(text) => tracing::warn!(notice = %text, "Error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingNotifier;

    #[test]
    fn test_default_methods_build_notices() {
        let notifier = RecordingNotifier::default();
        notifier.success("Account created successfully!");
        notifier.error("Failed to create user");

        let notices = notifier.notices();
        assert_eq!(
            notices,
            [
                Notice::Success("Account created successfully!".to_string()),
                Notice::Error("Failed to create user".to_string()),
            ]
        );
        assert_eq!(notices[1].text(), "Failed to create user");
    }

    #[test]
    fn test_tracing_notifier_is_usable_as_port() {
        let notifier: std::sync::Arc<dyn Notifier> = std::sync::Arc::new(TracingNotifier);
        notifier.success("Login successfully!");
        notifier.error("Failed to login.");
    }
}

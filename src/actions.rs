//! Outward-facing actions of the icon info sheet (open link, share)

use eframe::egui;
use tracing::{debug, warn};

/// Side-effecting capabilities the sheet needs from the platform.
/// Both are fire-and-forget; failures stay inside the implementation.
pub trait IconActions {
    fn open_link(&self, url: &str);
    fn share(&self, text: &str, mime_type: &str);
}

/// Desktop implementation: browser for links, clipboard for sharing
pub struct DesktopActions {
    ctx: egui::Context,
}

impl DesktopActions {
    pub fn new(ctx: &egui::Context) -> Self {
        Self { ctx: ctx.clone() }
    }
}

impl IconActions for DesktopActions {
    fn open_link(&self, url: &str) {
        debug!(url, "Opening link");
        if let Err(e) = open::that(url) {
            warn!(error = %e, url, "Failed to open link");
        }
    }

    fn share(&self, text: &str, mime_type: &str) {
        if !mime_type.starts_with("text/") {
            warn!(mime_type, "Clipboard share only supports text");
            return;
        }
        debug!(bytes = text.len(), mime_type, "Sharing via clipboard");
        self.ctx.copy_text(text.to_owned());
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::IconActions;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub(crate) enum Recorded {
        OpenLink(String),
        Share { text: String, mime_type: String },
    }

    /// Records every call instead of touching the platform
    #[derive(Default)]
    pub(crate) struct RecordingActions {
        pub calls: RefCell<Vec<Recorded>>,
    }

    impl IconActions for RecordingActions {
        fn open_link(&self, url: &str) {
            self.calls.borrow_mut().push(Recorded::OpenLink(url.to_owned()));
        }

        fn share(&self, text: &str, mime_type: &str) {
            self.calls.borrow_mut().push(Recorded::Share {
                text: text.to_owned(),
                mime_type: mime_type.to_owned(),
            });
        }
    }

    #[test]
    fn desktop_share_ignores_non_text_mime() {
        let ctx = eframe::egui::Context::default();
        let actions = super::DesktopActions::new(&ctx);
        let output = ctx.run(Default::default(), |_| {
            actions.share("payload", "image/png");
        });
        assert!(output.platform_output.commands.is_empty());
    }

    #[test]
    fn desktop_share_copies_text() {
        let ctx = eframe::egui::Context::default();
        let actions = super::DesktopActions::new(&ctx);
        let output = ctx.run(Default::default(), |_| {
            actions.share("payload", "text/plain");
        });
        assert!(output
            .platform_output
            .commands
            .iter()
            .any(|c| matches!(c, eframe::egui::OutputCommand::CopyText(t) if t == "payload")));
    }
}

//! # Application Dependencies
//!
//! Parameter grouping for use case construction. Not a builder: no build
//! steps, no defaults, every port is required.

use std::sync::Arc;

use cs_core::ports::{
    ClipboardHistoryPort, ContentHashPort, ImageEncoderPort, SystemClipboardPort,
};

use crate::usecases::{
    ClearHistory, GetClipboardHistory, GetClipboardImage, GetClipboardText, SetClipboardText,
    SubscribeHistory,
};

#[derive(Clone)]
pub struct AppDeps {
    // Clipboard
    pub clipboard: Arc<dyn SystemClipboardPort>,
    pub image_encoder: Arc<dyn ImageEncoderPort>,
    pub hasher: Arc<dyn ContentHashPort>,

    // History
    pub history: Arc<dyn ClipboardHistoryPort>,
}

impl AppDeps {
    pub fn usecases(&self) -> UseCases<'_> {
        UseCases::new(self)
    }
}

/// Builds use cases wired to one set of dependencies.
///
/// Driving adapter → `UseCases` → use case → ports.
pub struct UseCases<'a> {
    deps: &'a AppDeps,
}

impl<'a> UseCases<'a> {
    pub fn new(deps: &'a AppDeps) -> Self {
        Self { deps }
    }

    pub fn get_clipboard_text(&self) -> GetClipboardText {
        GetClipboardText::from_port(self.deps.clipboard.clone())
    }

    pub fn set_clipboard_text(&self) -> SetClipboardText {
        SetClipboardText::from_port(self.deps.clipboard.clone())
    }

    pub fn get_clipboard_image(&self) -> GetClipboardImage {
        GetClipboardImage::from_ports(
            self.deps.clipboard.clone(),
            self.deps.image_encoder.clone(),
            self.deps.hasher.clone(),
        )
    }

    pub fn get_clipboard_history(&self) -> GetClipboardHistory {
        GetClipboardHistory::from_port(self.deps.history.clone())
    }

    pub fn clear_history(&self) -> ClearHistory {
        ClearHistory::from_port(self.deps.history.clone())
    }

    pub fn subscribe_history(&self) -> SubscribeHistory {
        SubscribeHistory::from_port(self.deps.history.clone())
    }
}

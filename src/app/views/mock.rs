//! # Mock Render Stream
//!
//! Records every rendered screen instead of printing it.

use super::renderer::RenderStream;
use anyhow::Result;
use std::sync::{Arc, Mutex};

/// Shared so a test can keep a handle after moving the stream into the app
#[derive(Debug, Clone, Default)]
pub struct MockRenderStream {
    frames: Arc<Mutex<Vec<String>>>,
}

impl MockRenderStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every screen rendered so far
    pub fn frames(&self) -> Vec<String> {
        self.frames.lock().map(|f| f.clone()).unwrap_or_default()
    }

    /// Most recently rendered screen
    pub fn last_frame(&self) -> Option<String> {
        self.frames().pop()
    }
}

impl RenderStream for MockRenderStream {
    fn show(&mut self, text: &str) -> Result<()> {
        self.frames
            .lock()
            .map_err(|_| anyhow::anyhow!("render history lock poisoned"))?
            .push(text.to_string());
        Ok(())
    }
}

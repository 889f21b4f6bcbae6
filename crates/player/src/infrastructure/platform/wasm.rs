//! Browser platform implementation

use std::sync::Arc;

use crate::ports::outbound::PlatformPort;

/// Browser platform services backed by `web_sys`
#[derive(Clone, Default)]
pub struct WasmPlatform;

impl PlatformPort for WasmPlatform {
    fn set_page_title(&self, title: &str) {
        match web_sys::window().and_then(|w| w.document()) {
            Some(document) => document.set_title(title),
            None => tracing::warn!("no document available to set page title"),
        }
    }
}

/// Create the platform services for the browser
pub fn create_platform() -> Arc<dyn PlatformPort> {
    Arc::new(WasmPlatform)
}

//! Desktop platform implementation

use std::sync::Arc;

use crate::ports::outbound::PlatformPort;

/// Desktop platform services
#[derive(Clone, Default)]
pub struct DesktopPlatform;

impl PlatformPort for DesktopPlatform {
    fn set_page_title(&self, title: &str) {
        // Window title is managed by Dioxus desktop
        tracing::debug!(title, "page title change ignored on desktop");
    }
}

/// Create the platform services for desktop
pub fn create_platform() -> Arc<dyn PlatformPort> {
    Arc::new(DesktopPlatform)
}

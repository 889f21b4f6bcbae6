//! PlatformPort - Platform services needed by the UI layer
//!
//! Use via Dioxus context: `use_context::<Arc<dyn PlatformPort>>()`

/// Platform services port
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait PlatformPort: Send + Sync {
    /// Set the browser page title (no-op on desktop)
    fn set_page_title(&self, title: &str);
}

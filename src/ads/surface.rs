//! Rendering surface collaborator contract.
//!
//! The SDK never draws anything itself. The host supplies one surface per ad
//! unit (a WebView wrapper, a video player, a test double) and reports surface
//! events back to the unit via its `notify_*` methods: page finished, video
//! completed, clicked, dismissed.

use crate::error::AdError;

pub trait RenderSurface: Send + Sync {
    /// False when the owning screen is being torn down; `show()` refuses to
    /// render into an unavailable surface.
    fn is_available(&self) -> bool;

    /// Renders an HTML creative.
    fn load_html(&self, html: &str) -> Result<(), AdError>;

    /// Starts playback of a video creative from a URL.
    fn load_video(&self, url: &str) -> Result<(), AdError>;

    /// Closes the surface. Must be idempotent; the host reports the actual
    /// teardown through the unit's `notify_dismissed`.
    fn close(&self);
}

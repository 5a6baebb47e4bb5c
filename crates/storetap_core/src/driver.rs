//! The navigation primitive seam.

use crate::bridge::PageBridge;
use crate::error::Result;
use std::time::Duration;

/// Hook invoked with the new page after it is created but before any page
/// script executes.
pub type BeforeLoadHook<'a, P> = Box<dyn FnOnce(&P) -> Result<()> + 'a>;

/// Options forwarded to [`Driver::visit`].
pub struct VisitOptions<'a, P> {
    /// Runs strictly before the first page script executes.
    pub before_load: Option<BeforeLoadHook<'a, P>>,

    /// Passed through to the driver untouched; the helpers add no timeout
    /// behavior of their own.
    pub timeout: Option<Duration>,
}

impl<P> Default for VisitOptions<'_, P> {
    fn default() -> Self {
        Self {
            before_load: None,
            timeout: None,
        }
    }
}

impl<'a, P> VisitOptions<'a, P> {
    /// Options carrying only a before-load hook.
    pub fn before_load(hook: impl FnOnce(&P) -> Result<()> + 'a) -> Self {
        Self {
            before_load: Some(Box::new(hook)),
            timeout: None,
        }
    }
}

/// The browser automation seam: navigate to a URL and access the loaded page.
///
/// Commands execute one at a time to completion; there is no background work
/// between a visit and the next helper call.
pub trait Driver {
    /// Page handle produced by navigation.
    type Page: PageBridge;

    /// Navigate to `url` and return the loaded page.
    ///
    /// The `before_load` hook, when present, runs after the page is created
    /// and strictly before any page script executes.
    fn visit(&mut self, url: &str, options: VisitOptions<'_, Self::Page>) -> Result<Self::Page>;

    /// The currently loaded page.
    fn current_page(&self) -> Result<Self::Page>;
}

//! Error types for storetap_core operations.

use thiserror::Error;

/// Core error type for storetap operations.
#[derive(Error, Debug)]
pub enum TapError {
    /// No store object is exposed under the configured key on the current page.
    ///
    /// The application is not loaded, not instrumented, or was loaded the
    /// wrong way. There is no retry here; waiting for the page to be ready
    /// belongs to higher-level test setup.
    #[error("store not found under page global '{0}'")]
    StoreNotFound(String),

    /// The store's own dispatch/reducer logic rejected a submitted action.
    #[error("dispatch of '{action_type}' failed: {reason}")]
    Dispatch {
        /// The `type` of the action that was being dispatched
        action_type: String,
        /// The error raised by the store
        reason: String,
    },

    /// A creator or callback produced a value that does not decode as an action.
    #[error("invalid action: {0}")]
    InvalidAction(String),

    /// Transport failure in the page bridge (expose/read/call).
    #[error("page bridge error: {0}")]
    Bridge(String),

    /// The navigation primitive failed to load the target URL.
    #[error("navigation to '{url}' failed: {reason}")]
    Navigation {
        /// The URL that was being visited
        url: String,
        /// Description of the failure
        reason: String,
    },

    /// Configuration error (loading, parsing, invalid values).
    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience Result type for storetap_core operations.
pub type Result<T> = std::result::Result<T, TapError>;

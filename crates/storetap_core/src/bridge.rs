//! The page bridge: explicit handoff between the test process and the page's
//! global scope.

use crate::error::Result;
use serde_json::Value;

/// Property name under which seeded state is stashed on a new page's global
/// object.
///
/// Application bootstrap code reads and clears this key to pick up seeded
/// state. It is the one wire-format-like contract in the system and must
/// remain a stable, exact string.
pub const INITIAL_STATE_KEY: &str = "__PRELOADED_STATE__";

/// Access to one page's global scope from the test-runner side.
///
/// Implemented by the browser driver. Values cross the boundary as JSON.
/// A handle is only valid while its page is loaded; the helpers lend it to
/// callbacks rather than returning it.
pub trait PageBridge {
    /// Write `value` onto the page's global object under `key`.
    fn expose(&self, key: &str, value: Value) -> Result<()>;

    /// Read the value under `key`, or `None` when the key is absent.
    ///
    /// For a key holding an object of functions (a store or creator map),
    /// drivers surface an object whose keys are authoritative; the function
    /// values themselves may come back as `null`.
    fn read(&self, key: &str) -> Result<Option<Value>>;

    /// Invoke `method` on the object exposed under `target`, forwarding
    /// `args`, and return the JSON-encoded result.
    ///
    /// An error raised inside the page propagates as `Err`.
    fn call(&self, target: &str, method: &str, args: Vec<Value>) -> Result<Value>;
}

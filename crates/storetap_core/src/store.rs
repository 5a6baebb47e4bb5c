//! Scoped handles to the store and its action-creator map.
//!
//! Both handles borrow the current page and are only valid for the duration
//! of the helper callback they are lent to.

use crate::action::Action;
use crate::bridge::PageBridge;
use crate::error::{Result, TapError};
use serde_json::Value;

/// The application's store, reachable for the duration of one helper callback.
pub struct StoreHandle<'a> {
    page: &'a dyn PageBridge,
    key: &'a str,
}

impl<'a> StoreHandle<'a> {
    pub(crate) fn new(page: &'a dyn PageBridge, key: &'a str) -> Self {
        Self { page, key }
    }

    /// The store's current state.
    pub fn state(&self) -> Result<Value> {
        self.page.call(self.key, "getState", Vec::new())
    }

    /// Submit one action to the store's dispatch entry point.
    ///
    /// Errors raised by the store's own dispatch/reducer logic propagate as
    /// [`TapError::Dispatch`]; surfacing store misbehavior to the calling
    /// test is the point, so there is no local recovery.
    pub fn dispatch(&self, action: &Action) -> Result<Value> {
        self.page
            .call(self.key, "dispatch", vec![action.to_value()])
            .map_err(|e| TapError::Dispatch {
                action_type: action.kind.clone(),
                reason: e.to_string(),
            })
    }
}

/// Read-only view of the application's action-creator map.
///
/// Creator functions live inside the page; [`ActionCreators::create`]
/// forwards the call across the bridge and decodes the action it produces.
/// This layer never mutates the map.
pub struct ActionCreators<'a> {
    page: &'a dyn PageBridge,
    key: &'a str,
    names: Vec<String>,
}

impl<'a> ActionCreators<'a> {
    pub(crate) fn new(page: &'a dyn PageBridge, key: &'a str, names: Vec<String>) -> Self {
        Self { page, key, names }
    }

    /// Creator names defined by the application, in page order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Whether the application defined a creator with this name.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Number of creators defined by the application.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when the application exposed no creators.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Invoke the named creator with `args` and decode the action it produced.
    pub fn create(&self, name: &str, args: Vec<Value>) -> Result<Action> {
        if !self.contains(name) {
            return Err(TapError::InvalidAction(format!(
                "unknown action creator '{}'",
                name
            )));
        }
        let value = self.page.call(self.key, name, args)?;
        Action::from_value(value)
    }
}

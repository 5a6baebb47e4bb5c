//! Storetap Core Library
//!
//! Test-harness helpers that let an end-to-end browser suite inspect and
//! manipulate a Redux-style store running inside the page under test:
//! - Scoped access to the store handle and its action-creator map
//! - Dispatching actions into the running store from the test process
//! - Visiting a page with pre-seeded initial state
//!
//! The store itself, the browser automation mechanism, and the report UI are
//! external collaborators, reached through the [`Driver`], [`PageBridge`],
//! and [`LogSink`] seams.
//!
//! # Actions
//!
//! Actions are structural values: a `type` discriminator plus an optional
//! payload. A dispatch callback may return one action or a sequence; both
//! normalize the same way:
//!
//! ```
//! use storetap_core::{Action, IntoActions};
//! use serde_json::json;
//!
//! let single = Action::with_payload("items/add", json!("milk"));
//! assert_eq!(single.clone().into_actions(), vec![single]);
//! ```
//!
//! # Seeded state
//!
//! [`TapHarness::visit_seeded`] stashes the initial state under
//! [`INITIAL_STATE_KEY`] before any page script runs; application bootstrap
//! reads and clears that key to pick the state up:
//!
//! ```ignore
//! let page = harness.visit_seeded("/", SeededVisit::new(json!({"items": []})))?;
//! harness.with_store(|store, _| {
//!     assert_eq!(store.state()?, json!({"items": []}));
//!     Ok(())
//! })?;
//! ```

mod action;
mod bridge;
mod config;
mod driver;
mod error;
mod harness;
mod report;
mod store;

pub use action::{Action, IntoActions};
pub use bridge::{PageBridge, INITIAL_STATE_KEY};
pub use config::{Config, ReportConfig, StoreConfig};
pub use driver::{BeforeLoadHook, Driver, VisitOptions};
pub use error::{Result, TapError};
pub use harness::{SeededVisit, TapHarness};
pub use report::{init_diagnostics, CapturedRecord, LogRecord, LogSink, MemorySink, TracingSink};
pub use store::{ActionCreators, StoreHandle};

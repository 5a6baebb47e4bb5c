//! The three helper operations: inspect, dispatch, seeded visit.

use crate::action::{Action, IntoActions};
use crate::bridge::{PageBridge, INITIAL_STATE_KEY};
use crate::config::Config;
use crate::driver::{BeforeLoadHook, Driver, VisitOptions};
use crate::error::{Result, TapError};
use crate::report::{LogRecord, LogSink, TracingSink};
use crate::store::{ActionCreators, StoreHandle};
use serde_json::Value;
use std::time::Duration;
use uuid::Uuid;

/// Options for [`TapHarness::visit_seeded`].
pub struct SeededVisit<'a, P> {
    /// State stashed under [`INITIAL_STATE_KEY`] before any page script runs.
    pub initial_state: Value,

    /// Caller hook; runs after the seeding write with the same page
    /// reference, so it observes the reserved key already populated.
    pub before_load: Option<BeforeLoadHook<'a, P>>,

    /// Passed through to the driver untouched.
    pub timeout: Option<Duration>,
}

impl<P> SeededVisit<'_, P> {
    /// Seed `initial_state` with no caller hook.
    pub fn new(initial_state: Value) -> Self {
        Self {
            initial_state,
            before_load: None,
            timeout: None,
        }
    }
}

impl<'a, P> SeededVisit<'a, P> {
    /// Attach a caller before-load hook.
    pub fn before_load(mut self, hook: impl FnOnce(&P) -> Result<()> + 'a) -> Self {
        self.before_load = Some(Box::new(hook));
        self
    }
}

/// Entry point for the helper layer: owns the driver, the config, and the
/// log sink.
///
/// Every method runs to completion on the caller's thread before the next
/// command starts. Store and creator handles are lent to callbacks and are
/// not valid beyond them.
pub struct TapHarness<D: Driver, S: LogSink = TracingSink> {
    driver: D,
    config: Config,
    sink: S,
    visit_id: Option<Uuid>,
}

impl<D: Driver> TapHarness<D, TracingSink> {
    /// Harness with the default config and the tracing-backed sink.
    pub fn new(driver: D) -> Self {
        Self::with_sink(driver, Config::default(), TracingSink)
    }
}

impl<D: Driver, S: LogSink> TapHarness<D, S> {
    /// Harness with an explicit config and log sink.
    pub fn with_sink(driver: D, config: Config, sink: S) -> Self {
        Self {
            driver,
            config,
            sink,
            visit_id: None,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Id of the most recent navigation, for log correlation.
    pub fn visit_id(&self) -> Option<Uuid> {
        self.visit_id
    }

    /// Navigate without seeding state.
    pub fn visit(&mut self, url: &str, options: VisitOptions<'_, D::Page>) -> Result<D::Page> {
        self.visit_id = Some(Uuid::new_v4());
        self.driver.visit(url, options)
    }

    /// Navigate to `url`, stashing `initial_state` onto the new page's
    /// global object before any page script runs.
    ///
    /// The seeding write is the first statement of the before-load hook
    /// handed to the driver, so the caller's own hook and every page script
    /// observe the reserved key already populated. Returns the driver's page
    /// handle unchanged.
    pub fn visit_seeded(&mut self, url: &str, seeded: SeededVisit<'_, D::Page>) -> Result<D::Page> {
        let SeededVisit {
            initial_state,
            before_load,
            timeout,
        } = seeded;

        let visit_id = Uuid::new_v4();
        self.visit_id = Some(visit_id);

        let log_visits = self.config.report.log_visits;
        let sink = &self.sink;
        let state_for_log = initial_state.clone();

        let hook = move |page: &D::Page| -> Result<()> {
            page.expose(INITIAL_STATE_KEY, initial_state)?;

            if log_visits {
                sink.record(LogRecord::new("seeded_visit", "Store", "initialized state", move || {
                    serde_json::json!({
                        "visit": visit_id.to_string(),
                        "state": state_for_log,
                    })
                }));
            }

            if let Some(inner) = before_load {
                inner(page)?;
            }
            Ok(())
        };

        self.driver.visit(
            url,
            VisitOptions {
                before_load: Some(Box::new(hook)),
                timeout,
            },
        )
    }

    /// Hand the current page's store handle and action-creator map to `f`.
    ///
    /// Fails with [`TapError::StoreNotFound`] when the application did not
    /// expose a store under the configured key; there is no retry here, and
    /// callers are expected to ensure the page has loaded first. A present
    /// store with a missing creator map yields an empty map plus a warning,
    /// so state-only inspection of partially instrumented applications
    /// still works.
    pub fn with_store<T>(
        &self,
        f: impl FnOnce(&StoreHandle<'_>, &ActionCreators<'_>) -> Result<T>,
    ) -> Result<T> {
        let page = self.driver.current_page()?;
        let store_key = self.config.store.store_key.as_str();
        let creators_key = self.config.store.creators_key.as_str();

        if page.read(store_key)?.is_none() {
            return Err(TapError::StoreNotFound(store_key.to_string()));
        }

        let names = match page.read(creators_key)? {
            Some(Value::Object(map)) => map.keys().cloned().collect(),
            Some(other) => {
                return Err(TapError::Bridge(format!(
                    "creator map under '{}' is not an object: {}",
                    creators_key, other
                )))
            }
            None => {
                tracing::warn!(
                    key = creators_key,
                    "no action-creator map exposed; proceeding with an empty map"
                );
                Vec::new()
            }
        };

        let store = StoreHandle::new(&page, store_key);
        let creators = ActionCreators::new(&page, creators_key, names);
        f(&store, &creators)
    }

    /// Let `f` pick actions off the creator map, then dispatch each one in
    /// order, emitting one log record per dispatched action.
    ///
    /// Each dispatch completes before the next record is emitted and before
    /// the next action is submitted. A failed dispatch stops the batch:
    /// actions after it are not dispatched and the error propagates
    /// unchanged.
    pub fn dispatch_with<A: IntoActions>(
        &self,
        f: impl FnOnce(&ActionCreators<'_>) -> Result<A>,
    ) -> Result<()> {
        let log_dispatches = self.config.report.log_dispatches;
        let visit = self.visit_id;

        self.with_store(|store, creators| {
            let actions = f(creators)?.into_actions();
            for action in actions {
                store.dispatch(&action)?;
                if log_dispatches {
                    self.sink.record(dispatch_record(action, visit));
                }
            }
            Ok(())
        })
    }
}

fn dispatch_record(action: Action, visit: Option<Uuid>) -> LogRecord {
    LogRecord::new("dispatch", "Dispatch", action.kind.clone(), move || {
        let full = action.to_value();
        serde_json::json!({
            "visit": visit.map(|id| id.to_string()),
            "type": action.kind,
            "payload": action.payload,
            "action": full,
        })
    })
}

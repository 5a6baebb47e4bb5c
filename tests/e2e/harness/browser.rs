//! In-process simulation of the browser driver seam.
//!
//! A visit creates a fresh page, runs the before-load hook, then runs the
//! fixture app's bootstrap script. That ordering is what the seeded-visit
//! scenarios exercise: the hook must run strictly before any page script.

use super::app;
use serde_json::{json, Map, Value};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use storetap_core::{
    Action, Driver, PageBridge, Result, TapError, VisitOptions, INITIAL_STATE_KEY,
};

/// How much of the fixture app a URL hosts.
#[derive(Debug, Clone, Copy, PartialEq)]
enum AppMode {
    /// Store and creator map.
    Full,
    /// Store only, no creator map (partially instrumented application).
    StoreOnly,
    /// Blank page, no app at all.
    None,
}

struct PageState {
    globals: Map<String, Value>,
    /// `Some` once the app's bootstrap script has run.
    store_state: Option<Value>,
    creators_exposed: bool,
    dispatch_log: Vec<String>,
}

/// Handle to one simulated page. Cloning shares the page.
#[derive(Clone)]
pub struct FakePage {
    state: Rc<RefCell<PageState>>,
}

impl FakePage {
    fn blank() -> Self {
        Self {
            state: Rc::new(RefCell::new(PageState {
                globals: Map::new(),
                store_state: None,
                creators_exposed: false,
                dispatch_log: Vec::new(),
            })),
        }
    }

    /// Action types dispatched to this page's store, in order.
    pub fn dispatch_log(&self) -> Vec<String> {
        self.state.borrow().dispatch_log.clone()
    }

    /// The fixture app's bootstrap script: consume the reserved key (read
    /// it, then clear it), build the store, expose store and creators.
    fn boot(&self, expose_creators: bool) {
        let mut state = self.state.borrow_mut();
        let initial = state
            .globals
            .remove(INITIAL_STATE_KEY)
            .unwrap_or_else(app::default_state);
        state
            .globals
            .insert(app::BOOT_STATE_KEY.to_string(), initial.clone());
        state.store_state = Some(initial);
        state.creators_exposed = expose_creators;
    }
}

impl PageBridge for FakePage {
    fn expose(&self, key: &str, value: Value) -> Result<()> {
        self.state
            .borrow_mut()
            .globals
            .insert(key.to_string(), value);
        Ok(())
    }

    fn read(&self, key: &str) -> Result<Option<Value>> {
        let state = self.state.borrow();
        if key == app::STORE_KEY {
            // Function-valued members surface as null; presence is what counts.
            return Ok(state
                .store_state
                .as_ref()
                .map(|_| json!({ "getState": null, "dispatch": null })));
        }
        if key == app::CREATORS_KEY {
            if !state.creators_exposed {
                return Ok(None);
            }
            let map = app::CREATOR_NAMES
                .iter()
                .map(|name| ((*name).to_string(), Value::Null))
                .collect();
            return Ok(Some(Value::Object(map)));
        }
        Ok(state.globals.get(key).cloned())
    }

    fn call(&self, target: &str, method: &str, args: Vec<Value>) -> Result<Value> {
        if target == app::STORE_KEY {
            let mut state = self.state.borrow_mut();
            let Some(current) = state.store_state.clone() else {
                return Err(TapError::Bridge(format!(
                    "'{}' is not defined on the page",
                    target
                )));
            };
            return match method {
                "getState" => Ok(current),
                "dispatch" => {
                    let arg = args.into_iter().next().unwrap_or(Value::Null);
                    let action = Action::from_value(arg)?;
                    let next = app::reduce(&current, &action).map_err(TapError::Bridge)?;
                    state.dispatch_log.push(action.kind.clone());
                    state.store_state = Some(next);
                    Ok(action.to_value())
                }
                other => Err(TapError::Bridge(format!(
                    "store has no method '{}'",
                    other
                ))),
            };
        }

        if target == app::CREATORS_KEY {
            if !self.state.borrow().creators_exposed {
                return Err(TapError::Bridge(format!(
                    "'{}' is not defined on the page",
                    target
                )));
            }
            return app::create(method, &args).map_err(TapError::Bridge);
        }

        Err(TapError::Bridge(format!(
            "'{}' is not defined on the page",
            target
        )))
    }
}

/// Simulated navigation primitive: one page at a time, app hosting by URL.
pub struct FakeBrowser {
    full_urls: HashSet<String>,
    store_only_urls: HashSet<String>,
    unreachable_urls: HashSet<String>,
    current: Option<FakePage>,
}

impl FakeBrowser {
    /// Browser hosting the full fixture app at "/". URLs not registered
    /// anywhere load as blank pages.
    pub fn new() -> Self {
        let mut full_urls = HashSet::new();
        full_urls.insert("/".to_string());
        Self {
            full_urls,
            store_only_urls: HashSet::new(),
            unreachable_urls: HashSet::new(),
            current: None,
        }
    }

    /// Host the full fixture app at `url`.
    pub fn with_app_at(mut self, url: &str) -> Self {
        self.full_urls.insert(url.to_string());
        self
    }

    /// Host a store-only build (no creator map) at `url`.
    pub fn with_store_only_at(mut self, url: &str) -> Self {
        self.store_only_urls.insert(url.to_string());
        self
    }

    /// Make navigation to `url` fail outright.
    pub fn with_unreachable_at(mut self, url: &str) -> Self {
        self.unreachable_urls.insert(url.to_string());
        self
    }

    fn mode(&self, url: &str) -> AppMode {
        if self.store_only_urls.contains(url) {
            AppMode::StoreOnly
        } else if self.full_urls.contains(url) {
            AppMode::Full
        } else {
            AppMode::None
        }
    }
}

impl Default for FakeBrowser {
    fn default() -> Self {
        Self::new()
    }
}

impl Driver for FakeBrowser {
    type Page = FakePage;

    fn visit(&mut self, url: &str, options: VisitOptions<'_, FakePage>) -> Result<FakePage> {
        if self.unreachable_urls.contains(url) {
            return Err(TapError::Navigation {
                url: url.to_string(),
                reason: "connection refused".to_string(),
            });
        }

        let page = FakePage::blank();

        // Hook first, app scripts after; nothing runs in between.
        if let Some(hook) = options.before_load {
            hook(&page)?;
        }

        match self.mode(url) {
            AppMode::Full => page.boot(true),
            AppMode::StoreOnly => page.boot(false),
            AppMode::None => {}
        }

        self.current = Some(page.clone());
        Ok(page)
    }

    fn current_page(&self) -> Result<FakePage> {
        self.current
            .clone()
            .ok_or_else(|| TapError::Bridge("no page loaded".to_string()))
    }
}

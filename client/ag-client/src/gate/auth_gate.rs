//! Navigation-time session check.
//!
//! Each call to [`AuthGate::navigate`] starts a fresh evaluation: the gate
//! enters `Checking`, waits out the hydration delay, then applies
//! [`decide`]. Evaluations are numbered; one that finishes after a newer
//! navigation has started reports `Superseded` and leaves the gate state
//! alone.

use crate::gate::decide::{GateDecision, decide};
use crate::gate::gate_routes::GateRoutes;
use crate::session::session_store::SessionStore;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use log::debug;
use tokio::sync::watch;

pub const DEFAULT_HYDRATION_DELAY: Duration = Duration::from_secs(1);

/// Upper bound on redirects followed by [`AuthGate::resolve`].
pub const MAX_REDIRECTS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateState {
    Checking,
    Allowed,
    Redirecting(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    Allowed,
    Redirect(String),
    /// A newer navigation started before this one finished
    Superseded,
}

pub struct AuthGate {
    store: Arc<SessionStore>,
    routes: GateRoutes,
    hydration_delay: Duration,
    generation: AtomicU64,
    state: watch::Sender<GateState>,
}

impl AuthGate {
    pub fn new(store: Arc<SessionStore>, routes: GateRoutes, hydration_delay: Duration) -> Self {
        let (state, _) = watch::channel(GateState::Checking);

        Self {
            store,
            routes,
            hydration_delay,
            generation: AtomicU64::new(0),
            state,
        }
    }

    pub fn with_defaults(store: Arc<SessionStore>) -> Self {
        Self::new(store, GateRoutes::default(), DEFAULT_HYDRATION_DELAY)
    }

    pub fn routes(&self) -> &GateRoutes {
        &self.routes
    }

    pub fn state(&self) -> GateState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<GateState> {
        self.state.subscribe()
    }

    /// Evaluate the gate for a navigation to `path`.
    pub async fn navigate(&self, path: &str) -> GateOutcome {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_replace(GateState::Checking);

        tokio::time::sleep(self.hydration_delay).await;

        if self.generation.load(Ordering::SeqCst) != generation {
            debug!("Gate evaluation for {path} superseded");
            return GateOutcome::Superseded;
        }

        let session = self.store.state();
        match decide(&session, path, &self.routes) {
            GateDecision::Allow => {
                debug!("Gate allowed {path}");
                self.state.send_replace(GateState::Allowed);
                GateOutcome::Allowed
            }
            GateDecision::Redirect(target) => {
                debug!("Gate redirecting {path} -> {target}");
                self.state.send_replace(GateState::Redirecting(target.clone()));
                GateOutcome::Redirect(target)
            }
        }
    }

    /// Navigate to `path` and follow redirects until a route is allowed.
    ///
    /// Returns the allowed route, or `None` if the evaluation was
    /// superseded or did not settle within [`MAX_REDIRECTS`] hops.
    pub async fn resolve(&self, path: &str) -> Option<String> {
        let mut current = path.to_string();

        for _ in 0..=MAX_REDIRECTS {
            match self.navigate(&current).await {
                GateOutcome::Allowed => return Some(current),
                GateOutcome::Redirect(target) => current = target,
                GateOutcome::Superseded => return None,
            }
        }

        None
    }
}

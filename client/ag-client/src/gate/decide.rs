use crate::gate::gate_routes::GateRoutes;
use crate::session::session_state::SessionState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Allow,
    Redirect(String),
}

/// Navigation rule, checked in order:
///
/// 1. no session on a public route (landing or register): allow
/// 2. no session anywhere else: redirect to landing
/// 3. session on a public route: redirect to dashboard
/// 4. otherwise: allow
///
/// Pure and idempotent; the same session and path always give the same
/// decision.
pub fn decide(session: &SessionState, path: &str, routes: &GateRoutes) -> GateDecision {
    let path = normalize_path(path);
    let is_public =
        path == normalize_path(&routes.landing) || path == normalize_path(&routes.register);

    match (session.is_authenticated(), is_public) {
        (false, true) => GateDecision::Allow,
        (false, false) => GateDecision::Redirect(routes.landing.clone()),
        (true, true) => GateDecision::Redirect(routes.dashboard.clone()),
        (true, false) => GateDecision::Allow,
    }
}

/// Drop any query or fragment and trailing slashes; an empty path is `/`.
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');

    if trimmed.is_empty() { "/" } else { trimmed }
}

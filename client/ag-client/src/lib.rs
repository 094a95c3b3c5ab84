//! authgate client: session persistence, the navigation gate, and the
//! HTTP calls behind the login and registration pages.

pub mod app;
pub mod auth_flow;
pub mod cli;
pub mod client;
pub mod commands;
pub mod error;
pub mod forms;
pub mod gate;
pub mod logger;
pub mod session;
pub mod token;

#[cfg(test)]
mod tests;

pub use client::{Client, LoginResponse, UserRecord, UserUpdate};
pub use error::{ClientError, Result as ClientResult};
pub use forms::{LoginForm, RegisterForm};
pub use gate::auth_gate::{AuthGate, DEFAULT_HYDRATION_DELAY, GateOutcome, GateState};
pub use gate::decide::{GateDecision, decide};
pub use gate::gate_routes::GateRoutes;
pub use session::file_storage::FileStorage;
pub use session::memory_storage::MemoryStorage;
pub use session::remember_me::RememberMe;
pub use session::session_state::SessionState;
pub use session::session_storage::SessionStorage;
pub use session::session_store::SessionStore;
pub use token::{TokenClaims, decode_claims};

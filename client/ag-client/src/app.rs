//! Command dispatch for the `ag` binary.

use crate::auth_flow;
use crate::cli::Cli;
use crate::client::{Client, UserUpdate};
use crate::commands::{Commands, UserCommands};
use crate::error::{ClientError, Result as ClientErrorResult};
use crate::forms::{LoginForm, RegisterForm};
use crate::gate::auth_gate::AuthGate;
use crate::gate::gate_routes::GateRoutes;
use crate::session::file_storage::FileStorage;
use crate::session::remember_me::RememberMe;
use crate::session::session_storage::SessionStorage;
use crate::session::session_store::SessionStore;
use crate::token::decode_claims;

use ag_core::ValidationErrors;

use std::panic::Location;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::Utc;
use error_location::ErrorLocation;
use log::warn;
use serde_json::{Value, json};

pub const DATA_DIR_NAME: &str = "authgate";

/// Explicit directory, else `<platform data dir>/authgate`.
pub fn resolve_data_dir(explicit: Option<PathBuf>) -> ClientErrorResult<PathBuf> {
    match explicit {
        Some(dir) => Ok(dir),
        None => dirs::data_dir()
            .map(|dir| dir.join(DATA_DIR_NAME))
            .ok_or_else(|| {
                ClientError::data_dir("no platform data directory; pass --data-dir")
            }),
    }
}

/// Run one command and return its JSON output.
pub async fn run(cli: &Cli) -> ClientErrorResult<Value> {
    let data_dir = resolve_data_dir(cli.data_dir.clone())?;
    let storage: Arc<dyn SessionStorage> = Arc::new(FileStorage::new(data_dir));
    let store = Arc::new(SessionStore::hydrate(storage.clone())?);
    let remember = RememberMe::new(storage);
    let client = Client::new(&cli.server).with_token(store.state().token());

    match &cli.command {
        Commands::Register {
            name,
            email,
            password,
            confirm_password,
        } => {
            let form = RegisterForm {
                name: name.clone(),
                email: email.clone(),
                password: password.clone(),
                confirm_password: confirm_password.clone(),
            };
            let user = auth_flow::register(&client, &form).await?;
            Ok(json!({ "data": user }))
        }

        Commands::Login {
            email,
            password,
            remember_me,
        } => {
            let email = match email {
                Some(email) => email.clone(),
                None => remember.email()?.ok_or_else(missing_email)?,
            };
            let form = LoginForm {
                email,
                password: password.clone(),
                remember_me: *remember_me,
            };
            let user = auth_flow::login(&client, &store, &remember, &form).await?;
            Ok(json!({ "message": "Login successful", "data": user }))
        }

        Commands::Logout => {
            auth_flow::logout(&store)?;
            Ok(json!({ "message": "Logged out" }))
        }

        Commands::Whoami { verify } => whoami(&client, &store, *verify).await,

        Commands::Open { path } => {
            let gate = AuthGate::new(store.clone(), GateRoutes::default(), cli.hydration_delay);
            let route = gate
                .resolve(path)
                .await
                .ok_or_else(|| ClientError::Navigation {
                    path: path.clone(),
                    location: ErrorLocation::from(Location::caller()),
                })?;
            Ok(json!({ "requested": path, "route": route }))
        }

        Commands::Users { action } => match action {
            UserCommands::List => {
                let users = client.list_users().await?;
                Ok(json!({ "data": users }))
            }
            UserCommands::Update {
                id,
                name,
                email,
                password,
            } => {
                let update = UserUpdate {
                    name: name.clone(),
                    email: email.clone(),
                    password: password.clone(),
                };
                let user = client.update_user(*id, &update).await?;
                Ok(json!({ "data": user }))
            }
            UserCommands::Delete { id } => {
                let message = client.delete_user(*id).await?;
                Ok(json!({ "message": message }))
            }
        },
    }
}

async fn whoami(client: &Client, store: &SessionStore, verify: bool) -> ClientErrorResult<Value> {
    let state = store.state();
    let Some(token) = state.token() else {
        return Ok(json!({ "authenticated": false, "data": null }));
    };

    if verify {
        let user = client.me().await?;
        return Ok(json!({ "authenticated": true, "verified": true, "data": user }));
    }

    let expired = token_expired(token, Utc::now().timestamp());

    Ok(json!({
        "authenticated": true,
        "verified": false,
        "expired": expired,
        "data": state.user(),
    }))
}

/// `None` when the stored token's claims cannot be read.
pub(crate) fn token_expired(token: &str, now: i64) -> Option<bool> {
    match decode_claims(token) {
        Ok(claims) => Some(claims.is_expired_at(now)),
        Err(e) => {
            warn!("Stored token is unreadable: {e}");
            None
        }
    }
}

#[track_caller]
fn missing_email() -> ClientError {
    let mut errors = ValidationErrors::new();
    errors.push("email", "is required");
    ClientError::from(errors)
}

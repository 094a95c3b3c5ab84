//! The steps the login and registration pages run, minus the UI.

use crate::client::{Client, UserRecord};
use crate::error::Result as ClientErrorResult;
use crate::forms::{LoginForm, RegisterForm};
use crate::session::remember_me::RememberMe;
use crate::session::session_store::SessionStore;
use crate::token::decode_claims;

use ag_core::UserIdentity;

use log::info;

/// Validate the form, exchange credentials for a token, and start a
/// session from the token's claims.
///
/// Nothing is sent if the form is invalid. The remember-me record is
/// written only after the session was stored.
pub async fn login(
    client: &Client,
    store: &SessionStore,
    remember: &RememberMe,
    form: &LoginForm,
) -> ClientErrorResult<UserIdentity> {
    form.validate()?;

    let response = client.login(&form.email, &form.password).await?;
    let claims = decode_claims(&response.token)?;
    let user = claims.identity();

    store.set_user(user.clone(), response.token)?;
    remember.apply(&form.email, form.remember_me)?;

    info!("Logged in as {}", user.email);
    Ok(user)
}

/// Validate the form and create the account. Does not log in.
pub async fn register(client: &Client, form: &RegisterForm) -> ClientErrorResult<UserRecord> {
    form.validate()?;

    let user = client.register(form).await?;
    info!("Registered {}", user.email);
    Ok(user)
}

pub fn logout(store: &SessionStore) -> ClientErrorResult<()> {
    store.remove_user()
}

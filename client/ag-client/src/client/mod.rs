pub(crate) mod client;
pub(crate) mod responses;

pub use client::Client;
pub use responses::{LoginResponse, UserRecord, UserUpdate};

//! Text renderings handed to the operator after a key pair is written.
//!
//! Everything here is a pure function of its arguments.

pub mod secret;
pub mod sql;

pub use secret::{render_pkcs8_json, render_secret_json};
pub use sql::{public_key_payload, render_grant_sql};

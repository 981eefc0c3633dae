//! Authentication and authorization.
//!
//! The transfer engine calls [`Authenticator`] once when a session is
//! established and [`Authorizer`] for every privileged action afterwards.

mod authenticator;
mod authorizer;

pub use authenticator::{Authenticator, Credentials};
pub use authorizer::{Authorization, Authorizer};

//! Request guards and typed session access.
//!
//! Handlers call `AuthGuard::require` first and work with the returned user; nothing
//! below the controller layer reads the session.

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;

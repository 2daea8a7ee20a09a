//! Configuration modules for the Vestry console.
//!
//! Each submodule handles one aspect of configuration, loaded from
//! environment variables.
//!
//! # Modules
//!
//! - [`api`]: backend base URL and request timeout
//! - [`session`]: reading the persisted login session

pub mod api;
pub mod session;

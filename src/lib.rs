//! # Vestry
//!
//! The data-access core of the Vestry administration console for a
//! school/seminary management system: typed Entity Access Modules over
//! the backend REST API, the list/pagination contract shared by every
//! list screen, and the status lifecycle state machines.
//!
//! ## Overview
//!
//! The console's screens never talk to the network directly. Each
//! entity (classes, subjects, teachers, students, examinations, terms,
//! users, evaluations, sessions) has a service mediating all of its
//! reads and writes:
//!
//! - `list(api, query)` — one page of records plus the filtered total;
//!   failures degrade to an empty page so the screen shows "no records"
//!   instead of crashing
//! - `get(api, id)` — single fetch for edit dialogs; fails loudly
//! - `create` / `update` — confirmed by the server before `Ok` is
//!   returned; on `Err` the dialog stays open and nothing is mutated
//! - `change_status` — the soft-delete/graduate/disable transition,
//!   computed from the row's last-known status by a pure per-entity
//!   state machine and re-rendered from the server's response
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── config/           # Base URL, timeout, persisted session loading
//! ├── http/             # ApiClient (bearer auth, response envelope)
//! ├── logging.rs        # tracing console init
//! └── modules/          # Feature modules
//!     ├── resource.rs   # Generic list/read/write/status implementation
//!     ├── classes/      # ONGOING ↔ GRADUATED cohorts
//!     ├── subjects/     # One-way deletion, class assignment
//!     ├── teachers/     # Subject assignment
//!     ├── students/     # Per-class listing with status sets
//!     ├── examinations/ # Publishing, class sittings
//!     ├── terms/        # Server-side rotation
//!     ├── users/        # Role-gated creation
//!     ├── evaluations/  # PATCH partial updates
//!     └── sessions/     # Academic sessions
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use vestry::config::api::ApiConfig;
//! use vestry::http::ApiClient;
//! use vestry::modules::StudentService;
//! use vestry_core::pagination::{PageQuery, PageState};
//!
//! let api = ApiClient::new(&ApiConfig::from_env())?.with_token(token);
//!
//! let mut state = PageState::new(10);
//! state.set_filter(Some("ACTIVE".to_string()));
//! let page = StudentService::list(&api, &state.query()).await;
//! ```
//!
//! ## Error handling
//!
//! All failures are [`vestry_core::errors::ApiError`]. List reads
//! swallow and log; everything else propagates. 401/403 responses are
//! distinguishable via `ApiError::is_auth` so the shell can route to
//! re-authentication. Nothing in this layer retries.

pub mod config;
pub mod http;
pub mod logging;
pub mod modules;

// Re-export workspace crates for convenience
pub use vestry_core;
pub use vestry_models;

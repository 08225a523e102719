//! Roster manager core for the PuppyBowl API.
//!
//! # Overview
//! Lists players, shows one player's detail, creates players from a form
//! and deletes them, re-rendering after every mutation. All persistence
//! lives behind the remote API.
//!
//! # Design
//! - `RosterClient` is stateless and splits each call into `build_*`
//!   (produces a request) and `parse_*` (consumes a response), so the I/O
//!   boundary is explicit and the client is testable without a network.
//! - A `Transport` executes requests; `UreqTransport` does it over HTTP.
//! - Views are pure functions from `View` to a `markup::Node` tree.
//! - `App` owns the view state and the document and re-runs `init` after
//!   every successful mutation.
//! - DTOs are defined independently from the mock-server crate;
//!   integration tests catch schema drift.

pub mod app;
pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod http;
pub mod logging;
pub mod markup;
pub mod transport;
pub mod types;
pub mod view;

pub use app::{App, Document, Ticket};
pub use client::RosterClient;
pub use config::Config;
pub use error::ApiError;
pub use form::FormData;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use logging::init_logging;
pub use markup::{Action, Element, Node};
pub use transport::UreqTransport;
pub use types::{Entry, EntryDraft, Team};
pub use view::{Mode, View};

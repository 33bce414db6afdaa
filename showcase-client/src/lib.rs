//! Client SDK for the Showcase platform API
//!
//! This crate provides the client side of the showcase platform:
//!
//! - [`graphql`]: a thin GraphQL-over-HTTP wrapper with per-request
//!   credentials and offline mock support
//! - [`actions`]: one operation per use case (users, projects, session
//!   token, image upload)
//! - [`pagination`]: cursor-based feed navigation over query strings
//! - [`rest`]: the plain-HTTP transport behind the companion server
//!   endpoints

pub mod actions;
pub mod errors;
pub mod graphql;
pub mod pagination;
pub mod queries;
pub mod rest;

// Re-export main types for convenience
pub use actions::{is_base64_data_url, Actions};
pub use errors::{ClientError, ClientResult};
pub use graphql::{AuthKind, GraphqlClient, RecordedRequest, RequestAuth};
pub use pagination::{Direction, PageCursors, END_CURSOR_PARAM, START_CURSOR_PARAM};
pub use rest::{HttpTransport, MockTransport, RestTransport};

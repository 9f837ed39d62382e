//! # oraculum-api
//!
//! HTTP API server for the Oraculum content fabric.
//!
//! Every principle is URL-addressable by slug; unknown slugs resolve to a
//! distinguishable 404 JSON body rather than an error page or a panic. The
//! prompt library is filterable through query-string facets. All responses
//! are JSON — presentation belongs to the clients.
//!
//! # Routes
//!
//! | Route | Description |
//! |-------|-------------|
//! | `GET /healthz` | Liveness probe |
//! | `GET /api/principles` | Principle summaries, in number order |
//! | `GET /api/principles/{slug}` | Full principle, or 404 |
//! | `GET /api/principles/{slug}/neighbors` | Previous/next navigation, or 404 |
//! | `GET /api/prompts` | Library search (`q`, `category`, `principle`, `flagship`) |
//! | `GET /api/workflows` | Workflow summaries |
//! | `GET /api/workflows/{id}` | Full workflow, or 404 |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use routes::router;

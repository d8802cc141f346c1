//! Business-management backend for a solar installation company.
//!
//! Hexagonal layout: `domain` holds the entities, validation, ports, and the
//! insights computation; `inbound` adapts HTTP onto the domain; `outbound`
//! implements the ports over PostgreSQL or an in-memory store; `server`
//! assembles the application.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

pub use doc::ApiDoc;
pub use middleware::Trace;

//! Session-authenticated blog backend.
//!
//! Hexagonal layout: `domain` holds entities, ports, and services;
//! `inbound::http` adapts them to Actix handlers; `outbound` provides the
//! PostgreSQL, in-memory, and credential adapters.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

pub use domain::TraceId;
pub use middleware::Trace;

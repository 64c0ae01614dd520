//! Infrastructure Layer
//!
//! This module contains the adapters for the ports defined in the
//! application layer. Following hexagonal architecture:
//!
//! - **Driven Adapters (Outbound)**
//!   - `persistence/`: In-memory leg catalog
//!
//! - **Driver Adapters (Inbound)**
//!   - `stdio/`: JSON-lines request protocol
//!
//! - **Wiring**
//!   - `config/`: Dependency injection container

pub mod config;
pub mod persistence;
pub mod stdio;

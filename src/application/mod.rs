//! Application layer containing business logic services.
//!
//! Sits between the API layer (HTTP concerns) and the domain layer
//! (entities and registry contract).

pub mod services;

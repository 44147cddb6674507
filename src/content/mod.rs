//! Civic content tables
//!
//! Read-only reference data the application surfaces: outbreak hotspots
//! for the map, the wellness screening catalog, and the emergency
//! identification cards. All of it is fixed at build time and exposed as
//! plain data for presentation layers.

pub mod identify;
pub mod outbreak;
pub mod screening;

//! Core domain logic for azdo-annotator
//!
//! This module contains pure business logic with no I/O dependencies.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Entity, LocationSpec, HostRegistry, ParsedLocation)
//! - `services/` - URL matching and entity annotation
//! - `ports/` - Trait definitions for the ingestion pipeline

pub mod models;
pub mod ports;
pub mod services;

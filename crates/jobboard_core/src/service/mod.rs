//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep boundary layers decoupled from storage details.
//!
//! # Invariants
//! - Services never bypass repository authorization or validation.

pub mod account_service;
pub mod job_service;
pub mod response_service;

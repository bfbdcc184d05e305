//! Business logic services for the application layer.

pub mod reliability_service;

pub use reliability_service::ReliabilityService;

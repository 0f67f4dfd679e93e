//! Application layer services implementing business logic.
//!
//! Services orchestrate repository calls, validation, and business rules,
//! and provide a clean API for HTTP handlers.
//!
//! - [`services::link_service::LinkService`] - Link creation, resolution, and management
//! - [`services::analytics_service::AnalyticsService`] - Aggregated statistics and timelines
//! - [`services::maintenance_service::MaintenanceService`] - Expired link sweeping

pub mod services;

//! Simulated AR surface tracking.
//!
//! Stands in for a device AR session: tracked planes, sparse feature points
//! and an estimated ground plane, each discovered after a scan delay.

/// Surface tracker resource, ray hit tests and scan clock.
pub mod simulated_tracker;

//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Access control is declared in `app` via `RoleGate`, not
//! re-implemented per page.

pub mod admin_dashboard;
pub mod auth;
pub mod client_dashboard;
pub mod kyc;
pub mod landing;
pub mod rfq_detail;
pub mod root;
pub mod vendor_dashboard;

//! Shared wire DTOs for the hosted backend's REST surface.
//!
//! DESIGN
//! ======
//! These types mirror the backend's record shapes so serde round-trips stay
//! lossless. Status enums the backend may extend carry an `Unknown` catch-all
//! so new server-side values degrade instead of failing deserialization.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Marketplace role. Exactly one per profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Buyer: creates RFQs, accepts bids, goes through KYC.
    Client,
    /// Supplier: browses open RFQs and places bids.
    Vendor,
    /// Operator: reviews KYC submissions.
    Admin,
}

impl Role {
    /// Lowercase wire name, as used in profile records and UI badges.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Client => "client",
            Role::Vendor => "vendor",
            Role::Admin => "admin",
        }
    }
}

/// Verification progress recorded on a profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VerificationStatus {
    /// The user has never submitted verification documents.
    NoneSubmitted,
    /// A submission exists and awaits review.
    Pending,
    /// The latest submission was rejected.
    Rejected,
    /// Verification complete.
    Approved,
}

/// Authenticated identity as returned by the identity lookup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Opaque user identifier, stable for the life of the session.
    pub user_id: String,
    /// Sign-in email, if the backend exposes it.
    pub email: Option<String>,
}

/// Profile record keyed by user id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub user_id: String,
    /// Display name chosen at registration.
    pub display_name: Option<String>,
    pub role: Role,
    /// Absent on roles that never go through verification.
    #[serde(default)]
    pub verification_status: Option<VerificationStatus>,
}

/// Review state of a KYC submission record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Pending,
    Approved,
    Rejected,
    /// Any status value this client version does not know about.
    #[serde(other)]
    Unknown,
}

/// A KYC submission as stored by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KycSubmission {
    pub user_id: String,
    pub submission_status: SubmissionStatus,
    /// Reviewer feedback, populated on rejection.
    pub reviewer_note: Option<String>,
    /// ISO 8601 submission timestamp.
    pub submitted_at: Option<String>,
}

/// Body for creating or resubmitting a KYC record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KycSubmissionRequest {
    pub company_name: String,
    pub registration_number: String,
    /// Link to the uploaded registration document.
    pub document_url: String,
}

/// An RFQ summary for dashboard lists and the detail header.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RfqSummary {
    pub id: String,
    pub title: String,
    pub category: Option<String>,
    /// Budget ceiling in minor currency units, if the client disclosed one.
    pub budget: Option<i64>,
    /// Lifecycle state (e.g. `"open"`, `"awarded"`, `"closed"`).
    pub status: String,
    /// Owning client's user id.
    pub created_by: String,
    #[serde(default)]
    pub bid_count: i64,
}

/// Body for creating a new RFQ.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRfqRequest {
    pub title: String,
    pub category: Option<String>,
    pub budget: Option<i64>,
}

/// A vendor bid on an RFQ.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BidSummary {
    pub id: String,
    pub rfq_id: String,
    pub vendor_id: String,
    pub vendor_name: Option<String>,
    /// Offered price in minor currency units.
    pub amount: i64,
    pub message: Option<String>,
    /// Lifecycle state (e.g. `"submitted"`, `"accepted"`, `"declined"`).
    pub status: String,
}

/// Body for placing a bid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceBidRequest {
    pub amount: i64,
    pub message: Option<String>,
}

/// One row in the admin KYC review queue.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KycQueueItem {
    pub user_id: String,
    pub company_name: String,
    pub submission_status: SubmissionStatus,
    pub submitted_at: Option<String>,
}

/// Body for an admin KYC review action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KycReviewRequest {
    pub approve: bool,
    /// Feedback shown to the applicant, required on rejection.
    pub note: Option<String>,
}

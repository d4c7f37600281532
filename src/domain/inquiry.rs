//! Inquiry domain model.
//!
//! An [`Inquiry`] is one customer contact-form submission, optionally tied to
//! a vehicle by identifier. The vehicle reference is weak: deleting the
//! vehicle leaves the inquiry intact, and resolving the reference simply
//! fails lookup.

use serde::{Deserialize, Serialize};

/// What the customer is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InquiryKind {
    /// General question, not tied to a purchase intent.
    General,
    /// Request to test-drive a specific vehicle.
    TestDrive,
    /// Request for a purchase or financing consultation.
    Consultation,
}

/// Processing state of an inquiry.
///
/// Transitions are unrestricted: an administrator may set any status at any
/// time. There is no enforced state machine beyond these three members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryStatus {
    /// Newly submitted, nobody has responded yet. Forced at creation.
    Pending,
    /// An administrator has reached out to the customer.
    Contacted,
    /// The inquiry has been resolved.
    Completed,
}

/// One customer contact-form submission.
///
/// Created by a customer action with `status` forced to
/// [`InquiryStatus::Pending`] regardless of caller input; mutated only via
/// status changes by an administrator; never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inquiry {
    /// Process-unique identifier assigned at creation.
    pub id: String,
    /// Customer name as entered.
    pub name: String,
    /// Customer email as entered. No format validation in the core.
    pub email: String,
    /// Customer phone as entered. No format validation in the core.
    pub phone: String,
    /// Free-form message body.
    pub message: String,
    /// Weak reference to the vehicle this inquiry concerns, if any.
    ///
    /// Lookup-only: the referenced vehicle may have been deleted since, in
    /// which case resolution yields nothing.
    #[serde(default)]
    pub vehicle_id: Option<String>,
    /// What the customer is asking for.
    pub kind: InquiryKind,
    /// Current processing state.
    pub status: InquiryStatus,
    /// Unix timestamp (seconds) set once at creation.
    pub created_at: i64,
}

/// Caller-suppliable fields for submitting an inquiry.
///
/// Deliberately has no `status` field: creation always yields
/// [`InquiryStatus::Pending`], so a caller cannot smuggle in a different
/// initial state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    #[serde(default)]
    pub vehicle_id: Option<String>,
    pub kind: InquiryKind,
}

impl Inquiry {
    /// Materializes a draft into a full record, forcing `Pending` status.
    #[must_use]
    pub(crate) fn from_draft(draft: InquiryDraft, id: String, created_at: i64) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            message: draft.message,
            vehicle_id: draft.vehicle_id,
            kind: draft.kind,
            status: InquiryStatus::Pending,
            created_at,
        }
    }
}

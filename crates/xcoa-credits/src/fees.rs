//! Copyright-contact fee schedule
//!
//! This module prices a copyright-contact request from two static tables:
//! a base fee keyed by the requesting organization's type, scaled by a
//! request-type multiplier and rounded up to whole credits.

use serde::{Deserialize, Serialize};

/// The type of organization making a copyright-contact request.
///
/// Copyright holders price licensing differently by requester category, so
/// the base fee follows the organization type.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OrganizationType {
    /// Individual clinician or independent researcher
    Individual,

    /// University or academic research group
    University,

    /// Hospital or clinical care provider
    Hospital,

    /// Pharmaceutical or biotech company
    PharmaCompany,

    /// Government agency or public-health body
    Government,
}

impl OrganizationType {
    /// Base fee in credits for this organization type.
    pub fn base_fee(&self) -> u32 {
        match self {
            OrganizationType::Individual => 5,
            OrganizationType::University => 8,
            OrganizationType::Hospital => 10,
            OrganizationType::PharmaCompany => 20,
            OrganizationType::Government => 12,
        }
    }

    /// Get the string representation of the organization type.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrganizationType::Individual => "individual",
            OrganizationType::University => "university",
            OrganizationType::Hospital => "hospital",
            OrganizationType::PharmaCompany => "pharma_company",
            OrganizationType::Government => "government",
        }
    }

    /// Parse organization type from string representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "individual" => Some(OrganizationType::Individual),
            "university" | "academic" => Some(OrganizationType::University),
            "hospital" | "clinic" => Some(OrganizationType::Hospital),
            "pharma_company" | "pharma" => Some(OrganizationType::PharmaCompany),
            "government" => Some(OrganizationType::Government),
            _ => None,
        }
    }
}

/// The kind of copyright-contact request being made.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RequestType {
    /// Standard single-scale license inquiry
    LicenseInquiry,

    /// Bulk licensing across multiple scales or sites
    BulkLicense,

    /// Request for a validated translation of a scale
    Translation,

    /// Follow-up or support contact on an existing request
    Support,
}

impl RequestType {
    /// Fee multiplier applied on top of the organization base fee.
    pub fn multiplier(&self) -> f64 {
        match self {
            RequestType::LicenseInquiry => 1.0,
            RequestType::BulkLicense => 2.0,
            RequestType::Translation => 1.5,
            RequestType::Support => 0.6,
        }
    }

    /// Get the string representation of the request type.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestType::LicenseInquiry => "license_inquiry",
            RequestType::BulkLicense => "bulk_license",
            RequestType::Translation => "translation",
            RequestType::Support => "support",
        }
    }

    /// Parse request type from string representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "license_inquiry" | "licenseinquiry" => Some(RequestType::LicenseInquiry),
            "bulk_license" | "bulklicense" => Some(RequestType::BulkLicense),
            "translation" => Some(RequestType::Translation),
            "support" => Some(RequestType::Support),
            _ => None,
        }
    }
}

/// Compute the credit fee for a copyright-contact request.
///
/// Base fee for the organization type, scaled by the request-type
/// multiplier, rounded up to the nearest whole credit.
///
/// # Examples
///
/// ```
/// use xcoa_credits::{contact_fee, OrganizationType, RequestType};
///
/// assert_eq!(
///     contact_fee(OrganizationType::University, RequestType::LicenseInquiry),
///     8
/// );
/// assert_eq!(
///     contact_fee(OrganizationType::University, RequestType::Support),
///     5 // 8 × 0.6 = 4.8, rounded up
/// );
/// ```
pub fn contact_fee(organization: OrganizationType, request: RequestType) -> u32 {
    (f64::from(organization.base_fee()) * request.multiplier()).ceil() as u32
}

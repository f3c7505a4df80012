//! Plan limits catalog
//!
//! This module defines the limits/features record for each subscription
//! tier. The catalog is static configuration baked in at build time: every
//! tier has a complete record by construction, and lookups by feature key
//! are total functions over the closed feature enums.

use serde::{Deserialize, Serialize};

use crate::features::{MeteredFeature, PlanFeature};
use crate::quota::Quota;
use crate::tier::PlanTier;

impl PlanTier {
    /// Get the feature limits for this tier.
    ///
    /// # Returns
    ///
    /// A `PlanLimits` struct containing the limits for this tier
    ///
    /// # Examples
    ///
    /// ```
    /// use xcoa_plans::{PlanTier, Quota};
    ///
    /// let limits = PlanTier::Free.limits();
    /// assert_eq!(limits.searches_per_month, Quota::Limited(30));
    /// assert!(!limits.data_export);
    /// ```
    pub fn limits(&self) -> PlanLimits {
        match self {
            PlanTier::Free => PlanLimits {
                searches_per_month: Quota::Limited(30),
                scale_views_per_month: Quota::Limited(10),
                ai_interpretations_per_month: Quota::Limited(3),
                api_calls_per_month: Quota::Limited(0),
                team_members: Quota::Limited(1),
                case_study_access: false,
                pdf_watermark: true,
                data_export: false,
                copyright_assistance: false,
                support_level: SupportLevel::Community,
            },
            PlanTier::Professional => PlanLimits {
                searches_per_month: Quota::Limited(500),
                scale_views_per_month: Quota::Limited(200),
                ai_interpretations_per_month: Quota::Limited(50),
                api_calls_per_month: Quota::Limited(1000),
                team_members: Quota::Limited(3),
                case_study_access: true,
                pdf_watermark: true,
                data_export: false,
                copyright_assistance: true,
                support_level: SupportLevel::Email,
            },
            PlanTier::Advanced => PlanLimits {
                searches_per_month: Quota::Limited(2000),
                scale_views_per_month: Quota::Limited(1000),
                ai_interpretations_per_month: Quota::Limited(200),
                api_calls_per_month: Quota::Limited(10000),
                team_members: Quota::Limited(10),
                case_study_access: true,
                pdf_watermark: false,
                data_export: true,
                copyright_assistance: true,
                support_level: SupportLevel::Priority,
            },
            PlanTier::Enterprise => PlanLimits {
                searches_per_month: Quota::Unlimited,
                scale_views_per_month: Quota::Unlimited,
                ai_interpretations_per_month: Quota::Unlimited,
                api_calls_per_month: Quota::Unlimited,
                team_members: Quota::Unlimited,
                case_study_access: true,
                pdf_watermark: false,
                data_export: true,
                copyright_assistance: true,
                support_level: SupportLevel::Dedicated,
            },
        }
    }
}

/// Feature limits for a subscription tier.
///
/// Quotas of `Quota::Unlimited` serialize as `null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanLimits {
    /// Catalog searches per month
    pub searches_per_month: Quota,

    /// Scale detail views per month
    pub scale_views_per_month: Quota,

    /// AI-assisted interpretations per month
    pub ai_interpretations_per_month: Quota,

    /// API calls per month
    pub api_calls_per_month: Quota,

    /// Maximum team members on the account
    pub team_members: Quota,

    /// Access to published case studies
    pub case_study_access: bool,

    /// Whether PDF exports carry the xCOA watermark
    pub pdf_watermark: bool,

    /// Bulk data export enabled
    pub data_export: bool,

    /// Copyright-contact assistance enabled
    pub copyright_assistance: bool,

    /// Support level
    pub support_level: SupportLevel,
}

impl PlanLimits {
    /// Look up the quota for a metered feature.
    ///
    /// Total over the closed feature set; there is no missing-key case.
    pub fn quota(&self, feature: MeteredFeature) -> Quota {
        match feature {
            MeteredFeature::Search => self.searches_per_month,
            MeteredFeature::ScaleView => self.scale_views_per_month,
            MeteredFeature::AiInterpretation => self.ai_interpretations_per_month,
            MeteredFeature::ApiCall => self.api_calls_per_month,
        }
    }

    /// Look up whether a boolean-gated feature is granted.
    ///
    /// `WatermarkFree` is granted when the plan does not watermark exports.
    pub fn grants(&self, feature: PlanFeature) -> bool {
        match feature {
            PlanFeature::CaseStudies => self.case_study_access,
            PlanFeature::DataExport => self.data_export,
            PlanFeature::CopyrightAssistance => self.copyright_assistance,
            PlanFeature::WatermarkFree => !self.pdf_watermark,
        }
    }
}

/// Support level for a subscription tier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum SupportLevel {
    /// Community support (forums, docs)
    Community,

    /// Email support
    Email,

    /// Priority support with faster response
    Priority,

    /// Dedicated support representative
    Dedicated,
}

//! # Feature Keys
//!
//! Typed identifiers for the features a plan can gate. A feature is either
//! metered (counted against a monthly quota) or boolean-gated (a flat
//! on/off flag per tier). The sets are closed enums, so an unrecognized
//! feature key is a parse failure at the boundary rather than a silent
//! lookup miss inside the core.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A metered feature, counted against a monthly quota.
///
/// Each value maps to one usage counter per user per billing period.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MeteredFeature {
    /// Scale catalog search.
    Search,

    /// Viewing a scale's full detail page.
    ScaleView,

    /// AI-assisted scale interpretation.
    AiInterpretation,

    /// Programmatic API call.
    ApiCall,
}

impl MeteredFeature {
    /// Get the string representation of the feature.
    pub fn as_str(&self) -> &'static str {
        match self {
            MeteredFeature::Search => "search",
            MeteredFeature::ScaleView => "scale_view",
            MeteredFeature::AiInterpretation => "ai_interpretation",
            MeteredFeature::ApiCall => "api_call",
        }
    }

    /// Parse feature from string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - String to parse (case-insensitive, supports aliases)
    ///
    /// # Returns
    ///
    /// `Some(MeteredFeature)` if valid, `None` otherwise
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "search" => Some(MeteredFeature::Search),
            "scale_view" | "scaleview" => Some(MeteredFeature::ScaleView),
            "ai_interpretation" | "aiinterpretation" => Some(MeteredFeature::AiInterpretation),
            "api_call" | "apicall" => Some(MeteredFeature::ApiCall),
            _ => None,
        }
    }

    /// Get all metered features.
    pub fn all() -> [MeteredFeature; 4] {
        [
            MeteredFeature::Search,
            MeteredFeature::ScaleView,
            MeteredFeature::AiInterpretation,
            MeteredFeature::ApiCall,
        ]
    }
}

/// A boolean-gated feature, granted or withheld per tier without counting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PlanFeature {
    /// Access to published case studies.
    CaseStudies,

    /// Bulk export of scale and usage data.
    DataExport,

    /// Copyright-contact assistance for licensing requests.
    CopyrightAssistance,

    /// PDF downloads without the xCOA watermark.
    ///
    /// This is the inverse of the catalog's `pdf_watermark` flag: the gate
    /// is open when the plan does not watermark exports.
    WatermarkFree,
}

impl PlanFeature {
    /// Get the string representation of the feature.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanFeature::CaseStudies => "case_studies",
            PlanFeature::DataExport => "data_export",
            PlanFeature::CopyrightAssistance => "copyright_assistance",
            PlanFeature::WatermarkFree => "watermark_free",
        }
    }

    /// Parse feature from string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - String to parse (case-insensitive, supports aliases)
    ///
    /// # Returns
    ///
    /// `Some(PlanFeature)` if valid, `None` otherwise
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "case_studies" | "casestudies" | "case_study_access" => Some(PlanFeature::CaseStudies),
            "data_export" | "dataexport" => Some(PlanFeature::DataExport),
            "copyright_assistance" | "copyrightassistance" => {
                Some(PlanFeature::CopyrightAssistance)
            }
            "watermark_free" | "watermarkfree" => Some(PlanFeature::WatermarkFree),
            _ => None,
        }
    }

    /// Get all boolean-gated features.
    pub fn all() -> [PlanFeature; 4] {
        [
            PlanFeature::CaseStudies,
            PlanFeature::DataExport,
            PlanFeature::CopyrightAssistance,
            PlanFeature::WatermarkFree,
        ]
    }
}

/// A feature key of either kind, for the unified access-check entry point.
///
/// This is the type that crosses the HTTP boundary (e.g. the
/// `?feature=<key>` query on the check-feature endpoint), so it serializes
/// as the flat feature string rather than a tagged variant.
///
/// # Examples
///
/// ```
/// use xcoa_plans::{FeatureKey, MeteredFeature, PlanFeature};
///
/// assert_eq!(
///     FeatureKey::parse("search"),
///     Some(FeatureKey::Metered(MeteredFeature::Search))
/// );
/// assert_eq!(
///     FeatureKey::parse("data_export"),
///     Some(FeatureKey::Gated(PlanFeature::DataExport))
/// );
/// assert_eq!(FeatureKey::parse("nonsense"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureKey {
    /// A quota-metered feature.
    Metered(MeteredFeature),

    /// A boolean-gated feature.
    Gated(PlanFeature),
}

impl FeatureKey {
    /// Get the string representation of the key.
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureKey::Metered(feature) => feature.as_str(),
            FeatureKey::Gated(feature) => feature.as_str(),
        }
    }

    /// Parse a feature key of either kind from string representation.
    ///
    /// Metered features are tried first; the two namespaces are disjoint.
    ///
    /// # Returns
    ///
    /// `Some(FeatureKey)` if valid, `None` otherwise
    pub fn parse(s: &str) -> Option<Self> {
        if let Some(feature) = MeteredFeature::parse(s) {
            return Some(FeatureKey::Metered(feature));
        }
        PlanFeature::parse(s).map(FeatureKey::Gated)
    }

    /// Check if this key refers to a metered feature.
    pub fn is_metered(&self) -> bool {
        matches!(self, FeatureKey::Metered(_))
    }
}

impl From<MeteredFeature> for FeatureKey {
    fn from(feature: MeteredFeature) -> Self {
        FeatureKey::Metered(feature)
    }
}

impl From<PlanFeature> for FeatureKey {
    fn from(feature: PlanFeature) -> Self {
        FeatureKey::Gated(feature)
    }
}

impl Serialize for FeatureKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FeatureKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        FeatureKey::parse(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown feature key: {s}")))
    }
}

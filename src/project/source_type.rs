use serde::{Deserialize, Serialize};

use super::{is_blank, NOT_SPECIFIED};

/// Links under this prefix point at the Texas TABS project registry
pub const TEXAS_PORTAL_PREFIX: &str = "https://www.tdlr.texas.gov/TABS/";

/// Where a project's source link points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SourceType {
    #[serde(rename = "PDF")]
    Pdf,
    Texas,
    Website,
    #[serde(rename = "Not specified")]
    NotSpecified,
}

impl SourceType {
    /// Classify a link. The `.pdf` suffix check runs before the portal prefix
    /// check, so a PDF hosted on the Texas portal is a PDF.
    pub fn classify(link: Option<&str>) -> Self {
        let link = match link {
            Some(l) if !is_blank(Some(l)) => l.trim(),
            _ => return SourceType::NotSpecified,
        };
        if link.to_ascii_lowercase().ends_with(".pdf") {
            SourceType::Pdf
        } else if link.starts_with(TEXAS_PORTAL_PREFIX) {
            SourceType::Texas
        } else {
            SourceType::Website
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SourceType::Pdf => "PDF",
            SourceType::Texas => "Texas",
            SourceType::Website => "Website",
            SourceType::NotSpecified => NOT_SPECIFIED,
        }
    }
}

impl std::fmt::Display for SourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Display bucket for a free-text stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageClass {
    Approved,
    Proposed,
    Planning,
    Completed,
    Other,
}

impl StageClass {
    pub fn classify(stage: Option<&str>) -> Self {
        let stage = match stage {
            Some(s) => s.to_lowercase(),
            None => return StageClass::Other,
        };
        if stage.contains("approved") {
            StageClass::Approved
        } else if stage.contains("proposed") {
            StageClass::Proposed
        } else if stage.contains("planning") {
            StageClass::Planning
        } else if stage.contains("completed") {
            StageClass::Completed
        } else {
            StageClass::Other
        }
    }

    /// CSS class used by the printable report; only approved/proposed get their own style
    pub fn report_class(&self) -> &'static str {
        match self {
            StageClass::Approved => "stage-approved",
            StageClass::Proposed => "stage-proposed",
            _ => "stage-default",
        }
    }
}

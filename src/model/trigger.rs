//! Trigger types and their categories.
//!
//! A funnel's trigger decides how merchants enter it. Some triggers point at
//! another funnel's completion ("linking" triggers); those are the only ones
//! that produce edges in the relationship graph.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ─── TriggerCategory ─────────────────────────────────────────────────────────

/// Coarse classification of a trigger type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerCategory {
    /// References a predecessor funnel's completion.
    Linking,
    /// Marks an entry point into the workspace.
    Entry,
    /// Fires on profile/tag membership changes.
    Membership,
    Other,
}

// ─── TriggerType ─────────────────────────────────────────────────────────────

/// A funnel trigger type.
///
/// Unknown wire strings are kept in [`TriggerType::Other`] so a newer host
/// never breaks the layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TriggerType {
    QualificationMerchantComplete,
    CheckoutMerchantComplete,
    ReviewMerchantComplete,
    FunnelComplete,
    Manual,
    LinkClicked,
    FormSubmitted,
    Webhook,
    ProfileAdded,
    ProfileRemoved,
    TagAdded,
    Other(String),
}

impl TriggerType {
    /// Every known trigger type, in catalog order.
    pub const KNOWN: [TriggerType; 11] = [
        TriggerType::QualificationMerchantComplete,
        TriggerType::CheckoutMerchantComplete,
        TriggerType::ReviewMerchantComplete,
        TriggerType::FunnelComplete,
        TriggerType::Manual,
        TriggerType::LinkClicked,
        TriggerType::FormSubmitted,
        TriggerType::Webhook,
        TriggerType::ProfileAdded,
        TriggerType::ProfileRemoved,
        TriggerType::TagAdded,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            TriggerType::QualificationMerchantComplete => "qualification_merchant_complete",
            TriggerType::CheckoutMerchantComplete => "checkout_merchant_complete",
            TriggerType::ReviewMerchantComplete => "review_merchant_complete",
            TriggerType::FunnelComplete => "funnel_complete",
            TriggerType::Manual => "manual",
            TriggerType::LinkClicked => "link_clicked",
            TriggerType::FormSubmitted => "form_submitted",
            TriggerType::Webhook => "webhook",
            TriggerType::ProfileAdded => "profile_added",
            TriggerType::ProfileRemoved => "profile_removed",
            TriggerType::TagAdded => "tag_added",
            TriggerType::Other(s) => s,
        }
    }

    /// The built-in category of this trigger type.
    pub fn default_category(&self) -> TriggerCategory {
        match self {
            TriggerType::QualificationMerchantComplete
            | TriggerType::CheckoutMerchantComplete
            | TriggerType::ReviewMerchantComplete
            | TriggerType::FunnelComplete => TriggerCategory::Linking,
            TriggerType::Manual
            | TriggerType::LinkClicked
            | TriggerType::FormSubmitted
            | TriggerType::Webhook => TriggerCategory::Entry,
            TriggerType::ProfileAdded | TriggerType::ProfileRemoved | TriggerType::TagAdded => {
                TriggerCategory::Membership
            }
            TriggerType::Other(_) => TriggerCategory::Other,
        }
    }
}

impl From<&str> for TriggerType {
    fn from(s: &str) -> Self {
        TriggerType::KNOWN
            .iter()
            .find(|t| t.as_str() == s)
            .cloned()
            .unwrap_or_else(|| TriggerType::Other(s.to_string()))
    }
}

impl From<String> for TriggerType {
    fn from(s: String) -> Self {
        match TriggerType::from(s.as_str()) {
            TriggerType::Other(_) => TriggerType::Other(s),
            known => known,
        }
    }
}

impl From<TriggerType> for String {
    fn from(t: TriggerType) -> Self {
        match t {
            TriggerType::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for TriggerType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(TriggerType::from(s))
    }
}

impl fmt::Display for TriggerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

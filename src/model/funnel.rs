//! Funnel records as supplied by the host application.

use serde::{Deserialize, Deserializer, Serialize};

use super::trigger::TriggerType;

/// Trigger configuration attached to a funnel.
///
/// Keys other than the funnel reference and the sub-filter are kept in
/// `extra` untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawTriggerConfig")]
pub struct TriggerConfig {
    /// Id of the funnel whose completion fires this trigger.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funnel_id: Option<String>,
    /// Optional narrowing of the trigger, e.g. a profile id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_filter_id: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Wire shape of [`TriggerConfig`]. Hosts spell the same key several ways,
/// sometimes more than one in a single record; the first non-null spelling
/// wins.
#[derive(Deserialize)]
struct RawTriggerConfig {
    #[serde(default)]
    funnel_id: Option<String>,
    #[serde(default, rename = "funnelId")]
    funnel_id_camel: Option<String>,
    #[serde(default)]
    sub_filter_id: Option<String>,
    #[serde(default, rename = "subFilterId")]
    sub_filter_id_camel: Option<String>,
    #[serde(default, rename = "profileId")]
    profile_id_camel: Option<String>,
    #[serde(default)]
    profile_id: Option<String>,
    #[serde(flatten)]
    extra: serde_json::Map<String, serde_json::Value>,
}

impl From<RawTriggerConfig> for TriggerConfig {
    fn from(raw: RawTriggerConfig) -> Self {
        Self {
            funnel_id: raw.funnel_id.or(raw.funnel_id_camel),
            sub_filter_id: raw
                .sub_filter_id
                .or(raw.sub_filter_id_camel)
                .or(raw.profile_id_camel)
                .or(raw.profile_id),
            extra: raw.extra,
        }
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl TriggerConfig {
    pub fn referencing(funnel_id: impl Into<String>) -> Self {
        Self {
            funnel_id: Some(funnel_id.into()),
            ..Self::default()
        }
    }

    pub fn with_sub_filter(mut self, sub_filter_id: impl Into<String>) -> Self {
        self.sub_filter_id = Some(sub_filter_id.into());
        self
    }
}

/// A single funnel (merchant) in the workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunnelNode {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, alias = "triggerType", skip_serializing_if = "Option::is_none")]
    pub trigger_type: Option<TriggerType>,
    #[serde(default, alias = "triggerConfig", skip_serializing_if = "Option::is_none")]
    pub trigger_config: Option<TriggerConfig>,
}

impl FunnelNode {
    /// Create a funnel with no trigger; the name defaults to the id.
    pub fn bare(id: impl Into<String>) -> Self {
        let id = id.into();
        let name = id.clone();
        Self {
            id,
            name,
            trigger_type: None,
            trigger_config: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_trigger(mut self, trigger_type: TriggerType, config: Option<TriggerConfig>) -> Self {
        self.trigger_type = Some(trigger_type);
        self.trigger_config = config;
        self
    }

    /// Shorthand for a funnel triggered by completion of `source`.
    pub fn linked(id: impl Into<String>, trigger_type: TriggerType, source: &str) -> Self {
        Self::bare(id).with_trigger(trigger_type, Some(TriggerConfig::referencing(source)))
    }

    /// The funnel id this funnel's trigger references, if any.
    pub fn referenced_funnel(&self) -> Option<&str> {
        self.trigger_config.as_ref()?.funnel_id.as_deref()
    }

    pub fn sub_filter(&self) -> Option<&str> {
        self.trigger_config.as_ref()?.sub_filter_id.as_deref()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

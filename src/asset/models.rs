use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Keys the server owns; client-supplied copies are discarded so they can
/// never shadow the real ones through the passthrough map.
const RESERVED_KEYS: [&str; 3] = ["id", "createdAt", "updatedAt"];

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct Asset {
    #[schema(example = 1763000000000_i64)]
    pub id: i64,
    #[schema(example = "Server1")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[schema(example = "Hardware")]
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[schema(example = "Active")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[schema(example = 500.0)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[schema(example = "2025-01-01T00:00:00+00:00")]
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[schema(example = "2025-01-01T00:00:00+00:00")]
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// Arbitrary extra fields pass through storage unchanged.
    #[schema(value_type = Object)]
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Request body for create and update. Same shape as `Asset` minus the
/// server-assigned fields; anything unrecognized lands in `extra`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AssetPayload {
    #[schema(example = "Server1")]
    pub name: Option<String>,
    #[schema(example = "Hardware")]
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[schema(example = "Active")]
    pub status: Option<String>,
    #[schema(example = 500.0)]
    pub value: Option<f64>,
    #[schema(value_type = Object)]
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Asset {
    /// Builds a record from a client payload with server-assigned identity
    /// and timestamps. Reserved keys smuggled in through the passthrough map
    /// are dropped, otherwise they would serialize as duplicate JSON keys.
    pub fn from_payload(
        id: i64,
        payload: AssetPayload,
        created_at: String,
        updated_at: String,
    ) -> Self {
        let mut extra = payload.extra;
        for key in RESERVED_KEYS {
            extra.remove(key);
        }
        Self {
            id,
            name: payload.name,
            kind: payload.kind,
            status: payload.status,
            value: payload.value,
            created_at: Some(created_at),
            updated_at: Some(updated_at),
            extra,
        }
    }
}

impl AssetPayload {
    /// Create-time validation: both required fields present and non-empty.
    /// Returns the message used in the 400 body.
    pub fn validate_required(&self) -> Result<(), &'static str> {
        if self.name.as_deref().map_or(true, |n| n.is_empty()) {
            return Err("Name required");
        }
        if self.kind.as_deref().map_or(true, |t| t.is_empty()) {
            return Err("Type required");
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StatsResponse {
    #[schema(example = 3)]
    pub total: usize,
    #[schema(example = 1)]
    pub active: usize,
    #[schema(example = 500.0)]
    #[serde(rename = "totalValue")]
    pub total_value: f64,
}

impl StatsResponse {
    pub fn compute(assets: &[Asset]) -> Self {
        Self {
            total: assets.len(),
            active: assets
                .iter()
                .filter(|a| a.status.as_deref() == Some("Active"))
                .count(),
            total_value: assets.iter().filter_map(|a| a.value).sum(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Deleted successfully")]
    pub message: String,
}

use serde::{Deserialize, Serialize};

// ============================================================================
// Entity
// ============================================================================

/// Template of a shift slot (e.g. "Morning 06:00–14:00") used when planning
/// shifts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftSlotType {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    /// Local time "HH:MM"
    pub start_time: String,
    /// Local time "HH:MM"; may be earlier than `start_time` for overnight slots
    pub end_time: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

fn default_active() -> bool {
    true
}

impl ShiftSlotType {
    /// "06:00 – 14:00"
    pub fn time_range(&self) -> String {
        format!("{} – {}", self.start_time, self.end_time)
    }

    /// Slot crosses midnight
    pub fn is_overnight(&self) -> bool {
        self.end_time < self.start_time
    }
}

// ============================================================================
// DTOs
// ============================================================================

/// Body of `POST /shift-slot-types`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShiftSlotTypeDto {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub start_time: String,
    pub end_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_active: bool,
}

/// Body of `PATCH /shift-slot-types/{id}`; only present fields are changed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateShiftSlotTypeDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Query of `GET /shift-slot-types`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftSlotTypeListQuery {
    pub page: u64,
    pub limit: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl Default for ShiftSlotTypeListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 20,
            search: None,
            is_active: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal() {
        let slot: ShiftSlotType = serde_json::from_str(
            r#"{ "id": "s1", "name": "Night", "startTime": "22:00", "endTime": "06:00" }"#,
        )
        .unwrap();
        assert!(slot.is_active);
        assert!(slot.is_overnight());
        assert_eq!(slot.time_range(), "22:00 – 06:00");
    }

    #[test]
    fn test_update_dto_sends_only_changed_fields() {
        let dto = UpdateShiftSlotTypeDto {
            is_active: Some(false),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            serde_json::json!({ "isActive": false })
        );
    }
}

use chrono::NaiveTime;
use contracts::domain::a001_shift_slot_type::{
    CreateShiftSlotTypeDto, ShiftSlotType, UpdateShiftSlotTypeDto,
};

const DEFAULT_COLOR: &str = "#3b82f6";

/// Editable copy of a slot type. Optional text fields are kept as plain
/// strings while editing; blank means "not set".
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftSlotTypeForm {
    pub id: Option<String>,
    pub name: String,
    pub code: String,
    pub start_time: String,
    pub end_time: String,
    pub color: String,
    pub description: String,
    pub is_active: bool,
}

impl Default for ShiftSlotTypeForm {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            code: String::new(),
            start_time: "08:00".to_string(),
            end_time: "17:00".to_string(),
            color: DEFAULT_COLOR.to_string(),
            description: String::new(),
            is_active: true,
        }
    }
}

impl From<ShiftSlotType> for ShiftSlotTypeForm {
    fn from(slot: ShiftSlotType) -> Self {
        Self {
            id: Some(slot.id),
            name: slot.name,
            code: slot.code.unwrap_or_default(),
            start_time: slot.start_time,
            end_time: slot.end_time,
            color: slot.color.unwrap_or_else(|| DEFAULT_COLOR.to_string()),
            description: slot.description.unwrap_or_default(),
            is_active: slot.is_active,
        }
    }
}

fn blank_to_none(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn parse_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").ok()
}

impl ShiftSlotTypeForm {
    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Name is required");
        }
        let start = parse_time(&self.start_time).ok_or("Start time must be HH:MM")?;
        let end = parse_time(&self.end_time).ok_or("End time must be HH:MM")?;
        if start == end {
            return Err("Start and end time must differ");
        }
        Ok(())
    }

    pub fn to_create_dto(&self) -> CreateShiftSlotTypeDto {
        CreateShiftSlotTypeDto {
            name: self.name.trim().to_string(),
            code: blank_to_none(&self.code),
            start_time: self.start_time.trim().to_string(),
            end_time: self.end_time.trim().to_string(),
            color: blank_to_none(&self.color),
            description: blank_to_none(&self.description),
            is_active: self.is_active,
        }
    }

    /// Fields that differ from `original`
    pub fn to_update_dto(&self, original: &ShiftSlotTypeForm) -> UpdateShiftSlotTypeDto {
        let changed = |now: &str, before: &str| {
            (now.trim() != before.trim()).then(|| now.trim().to_string())
        };
        UpdateShiftSlotTypeDto {
            name: changed(&self.name, &original.name),
            code: changed(&self.code, &original.code),
            start_time: changed(&self.start_time, &original.start_time),
            end_time: changed(&self.end_time, &original.end_time),
            color: changed(&self.color, &original.color),
            description: changed(&self.description, &original.description),
            is_active: (self.is_active != original.is_active).then_some(self.is_active),
        }
    }
}

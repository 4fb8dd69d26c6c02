use serde::{Deserialize, Serialize};

/// Body of the public `POST /kiotviet/invoices` lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceLookupRequest {
    /// Customer phone number or product serial number
    pub phone_or_serial: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Invoice {
    pub id: String,
    pub code: String,
    pub purchase_date: String,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub branch_name: Option<String>,
    pub total_amount: f64,
    pub items: Vec<InvoiceItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvoiceItem {
    pub product_code: String,
    pub product_name: String,
    pub serial_numbers: Vec<String>,
    pub quantity: f64,
    pub price: f64,
    pub warranty: Option<WarrantyInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WarrantyInfo {
    pub status: WarrantyStatus,
    pub warranty_type: String,
    pub warranty_days: i64,
    pub warranty_start_date: Option<String>,
    pub warranty_end_date: Option<String>,
    /// Negative once the warranty has expired
    pub remaining_days: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarrantyStatus {
    Active,
    Expired,
    #[default]
    #[serde(other)]
    Unknown,
}

impl WarrantyStatus {
    pub fn label(&self) -> &'static str {
        match self {
            WarrantyStatus::Active => "Active",
            WarrantyStatus::Expired => "Expired",
            WarrantyStatus::Unknown => "Unknown",
        }
    }
}

use serde::{Deserialize, Serialize};

/// Session profile persisted as a flat JSON blob (see `store`).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub company_name: String,
    pub address: String,
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum VehicleStatus {
    Available,
    Sold,
    Booked,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum PaymentType {
    Cash,
    Online,
    Cheque,
    Finance,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: i64,
    /// Display sequence number assigned at creation; never renumbered.
    pub s_no: i64,
    pub frame_no: String,
    pub engine_no: String,
    pub model: String,
    pub variant: String,
    pub color: String,
    pub status: VehicleStatus,
    pub price: f64,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicle {
    pub frame_no: String,
    pub engine_no: String,
    pub model: String,
    pub variant: String,
    pub color: String,
    pub status: VehicleStatus,
    pub price: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentEntry {
    /// Calendar date, YYYY-MM-DD.
    pub date: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub payment_type: PaymentType,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInput {
    pub amount: f64,
    #[serde(rename = "type")]
    pub payment_type: PaymentType,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: i64,
    pub name: String,
    /// Father's or husband's name.
    pub relation_name: Option<String>,
    pub mobile: String,
    pub email: Option<String>,
    /// Free-text reference to a vehicle from inventory.
    pub vehicle_details: Option<String>,
    /// Signed: positive = customer owes the dealer, negative = advance held.
    pub balance: f64,
    pub last_payment_date: String,
    /// Newest first.
    pub history: Vec<PaymentEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomer {
    pub name: String,
    pub relation_name: Option<String>,
    pub mobile: String,
    pub email: Option<String>,
    pub vehicle_details: Option<String>,
    pub balance: f64,
}

/// Handle for a destructive operation awaiting user confirmation.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRequest {
    pub token: u64,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub stock_count: usize,
    pub customer_count: usize,
    /// Sum of all positive customer balances.
    pub total_receivables: f64,
    /// Up to three customers with an outstanding balance, in list order.
    pub top_defaulters: Vec<Customer>,
    /// Up to three most recently added inventory items.
    pub recent_inventory: Vec<InventoryItem>,
}

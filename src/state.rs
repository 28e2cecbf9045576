use crate::models::{
    CreateCustomer, CreateVehicle, Customer, DashboardSummary, DeleteRequest, InventoryItem,
    PaymentEntry, PaymentInput, UserProfile,
};
use std::collections::HashMap;

/// Login fabricates a profile locally; there is no credential backend.
pub const PLACEHOLDER_EMAIL: &str = "demo@example.com";

/// Local calendar date, YYYY-MM-DD.
pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// A destructive operation parked until the user confirms it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteTarget {
    Vehicle(i64),
    Customer(i64),
    Payment { customer_id: i64, index: usize },
}

/// The whole application state: session profile, inventory, customer ledger
/// and the pending delete confirmations. Owned by the `Store` and mutated
/// only through the methods below.
#[derive(Debug, Default)]
pub struct AppState {
    pub profile: Option<UserProfile>,
    /// Newest first.
    pub inventory: Vec<InventoryItem>,
    /// Newest first.
    pub customers: Vec<Customer>,
    next_id: i64,
    next_token: u64,
    pending: HashMap<u64, DeleteTarget>,
}

impl AppState {
    pub(crate) fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn next_token(&mut self) -> u64 {
        self.next_token += 1;
        self.next_token
    }

    // ===== Session =====

    pub fn log_in(&mut self, company_name: String, address: String) -> UserProfile {
        let profile = UserProfile {
            company_name,
            address,
            email: PLACEHOLDER_EMAIL.to_string(),
        };
        self.profile = Some(profile.clone());
        profile
    }

    pub fn log_out(&mut self) {
        self.profile = None;
    }

    // ===== Inventory =====

    pub fn create_vehicle(&mut self, vehicle: CreateVehicle) -> InventoryItem {
        let item = InventoryItem {
            id: self.next_id(),
            s_no: self.inventory.len() as i64 + 1,
            frame_no: vehicle.frame_no,
            engine_no: vehicle.engine_no,
            model: vehicle.model,
            variant: vehicle.variant,
            color: vehicle.color,
            status: vehicle.status,
            price: vehicle.price,
        };
        self.inventory.insert(0, item.clone());
        item
    }

    pub fn request_delete_vehicle(&mut self, id: i64) -> Result<DeleteRequest, String> {
        if !self.inventory.iter().any(|v| v.id == id) {
            return Err("Vehicle not found".to_string());
        }
        let token = self.next_token();
        self.pending.insert(token, DeleteTarget::Vehicle(id));
        Ok(DeleteRequest {
            token,
            message: "Are you sure you want to delete this vehicle from stock?".to_string(),
        })
    }

    // ===== Customers =====

    pub fn create_customer(&mut self, customer: CreateCustomer) -> Customer {
        let customer = Customer {
            id: self.next_id(),
            name: customer.name,
            relation_name: customer.relation_name,
            mobile: customer.mobile,
            email: customer.email,
            vehicle_details: customer.vehicle_details,
            balance: customer.balance,
            last_payment_date: today(),
            history: Vec::new(),
        };
        self.customers.insert(0, customer.clone());
        customer
    }

    pub fn request_delete_customer(&mut self, id: i64) -> Result<DeleteRequest, String> {
        if !self.customers.iter().any(|c| c.id == id) {
            return Err("Customer not found".to_string());
        }
        let token = self.next_token();
        self.pending.insert(token, DeleteTarget::Customer(id));
        Ok(DeleteRequest {
            token,
            message: "Are you sure you want to delete this customer? This will remove all \
                      their payment history and balance data."
                .to_string(),
        })
    }

    // ===== Payments =====

    /// Records a payment dated today at the head of the customer's history and
    /// deducts its amount from the balance. A missing customer id is a no-op
    /// and returns `None`.
    pub fn add_payment(&mut self, customer_id: i64, payment: PaymentInput) -> Option<Customer> {
        let customer = self.customers.iter_mut().find(|c| c.id == customer_id)?;

        let entry = PaymentEntry {
            date: today(),
            amount: payment.amount,
            payment_type: payment.payment_type,
            description: payment.description,
        };
        customer.balance -= entry.amount;
        customer.last_payment_date = entry.date.clone();
        customer.history.insert(0, entry);
        Some(customer.clone())
    }

    /// Replaces the amount/type/description of an existing entry, adjusting the
    /// balance by `old amount - new amount`. The entry's date and the
    /// customer's `last_payment_date` are left untouched.
    pub fn edit_payment(
        &mut self,
        customer_id: i64,
        index: usize,
        payment: PaymentInput,
    ) -> Result<Option<Customer>, String> {
        let customer = match self.customers.iter_mut().find(|c| c.id == customer_id) {
            Some(c) => c,
            None => return Ok(None),
        };
        if index >= customer.history.len() {
            return Err(format!("Payment index {} out of range", index));
        }

        let entry = &mut customer.history[index];
        let old_amount = entry.amount;
        entry.amount = payment.amount;
        entry.payment_type = payment.payment_type;
        entry.description = payment.description;
        customer.balance += old_amount - payment.amount;
        Ok(Some(customer.clone()))
    }

    pub fn request_delete_payment(
        &mut self,
        customer_id: i64,
        index: usize,
    ) -> Result<DeleteRequest, String> {
        let customer = self
            .customers
            .iter()
            .find(|c| c.id == customer_id)
            .ok_or_else(|| "Customer not found".to_string())?;
        if index >= customer.history.len() {
            return Err(format!("Payment index {} out of range", index));
        }
        let token = self.next_token();
        self.pending
            .insert(token, DeleteTarget::Payment { customer_id, index });
        Ok(DeleteRequest {
            token,
            message: "Are you sure you want to delete this transaction? The balance will be \
                      adjusted accordingly."
                .to_string(),
        })
    }

    // ===== Confirmations =====

    /// Applies a pending delete and consumes its token. A target that vanished
    /// after the request was issued is a silent no-op; an unknown token is an
    /// error.
    pub fn confirm_delete(&mut self, token: u64) -> Result<(), String> {
        let target = self
            .pending
            .remove(&token)
            .ok_or_else(|| "Unknown or expired confirmation token".to_string())?;

        match target {
            DeleteTarget::Vehicle(id) => {
                // Surviving sequence numbers are deliberately not renumbered.
                self.inventory.retain(|v| v.id != id);
            }
            DeleteTarget::Customer(id) => {
                self.customers.retain(|c| c.id != id);
            }
            DeleteTarget::Payment { customer_id, index } => {
                let customer = match self.customers.iter_mut().find(|c| c.id == customer_id) {
                    Some(c) => c,
                    None => return Ok(()),
                };
                if index >= customer.history.len() {
                    return Err(format!("Payment index {} out of range", index));
                }
                let entry = customer.history.remove(index);
                customer.balance += entry.amount;
                if let Some(head) = customer.history.first() {
                    customer.last_payment_date = head.date.clone();
                }
            }
        }
        Ok(())
    }

    /// Drops a pending delete without applying it. Unknown tokens are ignored.
    pub fn cancel_delete(&mut self, token: u64) {
        self.pending.remove(&token);
    }

    #[cfg(test)]
    pub(crate) fn pending_count(&self) -> usize {
        self.pending.len()
    }

    // ===== Dashboard =====

    /// Read-side aggregation, re-derived on every call and never persisted.
    pub fn dashboard_summary(&self) -> DashboardSummary {
        DashboardSummary {
            stock_count: self.inventory.len(),
            customer_count: self.customers.len(),
            total_receivables: self
                .customers
                .iter()
                .filter(|c| c.balance > 0.0)
                .map(|c| c.balance)
                .sum(),
            top_defaulters: self
                .customers
                .iter()
                .filter(|c| c.balance > 0.0)
                .take(3)
                .cloned()
                .collect(),
            recent_inventory: self.inventory.iter().take(3).cloned().collect(),
        }
    }
}

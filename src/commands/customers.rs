use crate::models::{CreateCustomer, Customer, DeleteRequest, PaymentInput};
use crate::store::StoreExt;
use tauri::AppHandle;

#[tauri::command]
pub fn get_customers(app: AppHandle) -> Result<Vec<Customer>, String> {
    let store = app.store();
    let state = store.state.lock().map_err(|e| e.to_string())?;

    Ok(state.customers.clone())
}

#[tauri::command]
pub fn create_customer(app: AppHandle, customer: CreateCustomer) -> Result<Customer, String> {
    let store = app.store();
    let mut state = store.state.lock().map_err(|e| e.to_string())?;

    Ok(state.create_customer(customer))
}

#[tauri::command]
pub fn request_delete_customer(app: AppHandle, id: i64) -> Result<DeleteRequest, String> {
    let store = app.store();
    let mut state = store.state.lock().map_err(|e| e.to_string())?;

    state.request_delete_customer(id)
}

/// Returns the updated customer, or `None` if the id matched nothing (the
/// state is left unchanged in that case).
#[tauri::command]
#[allow(non_snake_case)]
pub fn add_payment(
    app: AppHandle,
    customerId: i64,
    payment: PaymentInput,
) -> Result<Option<Customer>, String> {
    let customer_id = customerId;
    let store = app.store();
    let mut state = store.state.lock().map_err(|e| e.to_string())?;

    Ok(state.add_payment(customer_id, payment))
}

#[tauri::command]
#[allow(non_snake_case)]
pub fn edit_payment(
    app: AppHandle,
    customerId: i64,
    index: usize,
    payment: PaymentInput,
) -> Result<Option<Customer>, String> {
    let customer_id = customerId;
    let store = app.store();
    let mut state = store.state.lock().map_err(|e| e.to_string())?;

    state.edit_payment(customer_id, index, payment)
}

#[tauri::command]
#[allow(non_snake_case)]
pub fn request_delete_payment(
    app: AppHandle,
    customerId: i64,
    index: usize,
) -> Result<DeleteRequest, String> {
    let customer_id = customerId;
    let store = app.store();
    let mut state = store.state.lock().map_err(|e| e.to_string())?;

    state.request_delete_payment(customer_id, index)
}

use crate::models::{CreateVehicle, DeleteRequest, InventoryItem};
use crate::store::StoreExt;
use tauri::AppHandle;

#[tauri::command]
pub fn get_inventory(app: AppHandle) -> Result<Vec<InventoryItem>, String> {
    let store = app.store();
    let state = store.state.lock().map_err(|e| e.to_string())?;

    Ok(state.inventory.clone())
}

#[tauri::command]
pub fn create_vehicle(app: AppHandle, vehicle: CreateVehicle) -> Result<InventoryItem, String> {
    let store = app.store();
    let mut state = store.state.lock().map_err(|e| e.to_string())?;

    Ok(state.create_vehicle(vehicle))
}

#[tauri::command]
pub fn request_delete_vehicle(app: AppHandle, id: i64) -> Result<DeleteRequest, String> {
    let store = app.store();
    let mut state = store.state.lock().map_err(|e| e.to_string())?;

    state.request_delete_vehicle(id)
}

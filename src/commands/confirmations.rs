use crate::store::StoreExt;
use tauri::AppHandle;

#[tauri::command]
pub fn confirm_delete(app: AppHandle, token: u64) -> Result<(), String> {
    let store = app.store();
    let mut state = store.state.lock().map_err(|e| e.to_string())?;

    state.confirm_delete(token)
}

#[tauri::command]
pub fn cancel_delete(app: AppHandle, token: u64) -> Result<(), String> {
    let store = app.store();
    let mut state = store.state.lock().map_err(|e| e.to_string())?;

    state.cancel_delete(token);
    Ok(())
}

use crate::models::DashboardSummary;
use crate::store::StoreExt;
use tauri::AppHandle;

#[tauri::command]
pub fn get_dashboard_summary(app: AppHandle) -> Result<DashboardSummary, String> {
    let store = app.store();
    let state = store.state.lock().map_err(|e| e.to_string())?;

    Ok(state.dashboard_summary())
}

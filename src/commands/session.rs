use crate::models::UserProfile;
use crate::store::StoreExt;
use tauri::AppHandle;

#[tauri::command]
pub fn get_session(app: AppHandle) -> Result<Option<UserProfile>, String> {
    let store = app.store();
    let state = store.state.lock().map_err(|e| e.to_string())?;

    Ok(state.profile.clone())
}

#[tauri::command]
#[allow(non_snake_case)]
pub fn login(app: AppHandle, companyName: String, address: String) -> Result<UserProfile, String> {
    let company_name = companyName;
    let store = app.store();
    let mut state = store.state.lock().map_err(|e| e.to_string())?;

    let profile = state.log_in(company_name, address);
    store.save_session(&profile);

    Ok(profile)
}

#[tauri::command]
pub fn logout(app: AppHandle) -> Result<(), String> {
    let store = app.store();
    let mut state = store.state.lock().map_err(|e| e.to_string())?;

    state.log_out();
    store.clear_session();

    Ok(())
}

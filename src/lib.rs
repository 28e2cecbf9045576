mod commands;
mod models;
mod seed;
mod state;
mod store;


use commands::{confirmations, customers, dashboard, inventory, session};
use store::Store;
use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_log::Builder::new().build())
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_fs::init())
        .setup(|app| {
            // Load the persisted session and seed the demo ledger
            let store = Store::new(app.handle()).expect("Failed to initialize app store");
            app.manage(store);

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Session
            session::get_session,
            session::login,
            session::logout,
            // Inventory
            inventory::get_inventory,
            inventory::create_vehicle,
            inventory::request_delete_vehicle,
            // Customers
            customers::get_customers,
            customers::create_customer,
            customers::request_delete_customer,
            customers::add_payment,
            customers::edit_payment,
            customers::request_delete_payment,
            // Confirmations
            confirmations::confirm_delete,
            confirmations::cancel_delete,
            // Dashboard
            dashboard::get_dashboard_summary,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

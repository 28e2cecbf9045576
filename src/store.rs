use crate::models::UserProfile;
use crate::state::AppState;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tauri::{AppHandle, Manager};

/// Flat session key: one JSON blob holding the `UserProfile`.
pub const SESSION_FILE: &str = "khata_user.json";

pub struct Store {
    pub state: Mutex<AppState>,
    session_path: PathBuf,
}

impl Store {
    pub fn new(app_handle: &AppHandle) -> Result<Self, String> {
        let app_dir = app_handle
            .path()
            .app_data_dir()
            .map_err(|e| e.to_string())?;

        std::fs::create_dir_all(&app_dir).map_err(|e| e.to_string())?;

        let session_path = app_dir.join(SESSION_FILE);

        let mut state = AppState::default();
        state.profile = load_session(&session_path);
        state.seed_demo_data();

        Ok(Store {
            state: Mutex::new(state),
            session_path,
        })
    }

    /// Persistence failures are non-fatal: the session simply won't survive a
    /// restart.
    pub fn save_session(&self, profile: &UserProfile) {
        if let Err(e) = save_session(&self.session_path, profile) {
            log::warn!("Failed to persist session: {}", e);
        }
    }

    pub fn clear_session(&self) {
        if let Err(e) = clear_session(&self.session_path) {
            log::warn!("Failed to clear session: {}", e);
        }
    }
}

/// A missing file or a structurally incompatible blob both mean "no session".
pub fn load_session(path: &Path) -> Option<UserProfile> {
    let raw = std::fs::read_to_string(path).ok()?;
    match serde_json::from_str(&raw) {
        Ok(profile) => Some(profile),
        Err(e) => {
            log::warn!("Ignoring malformed session data: {}", e);
            None
        }
    }
}

pub fn save_session(path: &Path, profile: &UserProfile) -> Result<(), String> {
    let raw = serde_json::to_string(profile).map_err(|e| e.to_string())?;
    std::fs::write(path, raw).map_err(|e| e.to_string())
}

pub fn clear_session(path: &Path) -> Result<(), String> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.to_string()),
    }
}

pub trait StoreExt {
    fn store(&self) -> &Store;
}

impl StoreExt for AppHandle {
    fn store(&self) -> &Store {
        self.state::<Store>().inner()
    }
}

// src/core/session.rs

//! The single owner of the authenticated session.
//!
//! `App` constructs one `SessionStore` at startup and passes it by reference;
//! nothing else writes session state. The persisted copy lives in one
//! string-keyed entry (a small JSON file in the data directory).

use crate::core::auth::{AuthError, AuthGateway, AuthOutcome};
use crate::core::models::Session;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Durable key-value slot holding the serialized session.
pub trait SessionStorage {
    fn read(&self) -> io::Result<Option<String>>;
    fn write(&self, value: &str) -> io::Result<()>;
    fn remove(&self) -> io::Result<()>;
}

/// Stores the entry `key` as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(dir: &Path, key: &str) -> Self {
        Self { path: dir.join(format!("{}.json", key)) }
    }
}

impl SessionStorage for FileStorage {
    fn read(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&self, value: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, value)
    }

    fn remove(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}

pub struct SessionStore<S: SessionStorage = FileStorage> {
    storage: S,
    current: Option<Session>,
    hydrated: bool,
}

impl<S: SessionStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage, current: None, hydrated: false }
    }

    /// Loads the persisted session. Storage is read only on the first call.
    ///
    /// Unreadable or corrupt entries are logged and treated as "no session".
    pub fn hydrate(&mut self) -> Option<Session> {
        if self.hydrated {
            return self.current.clone();
        }
        self.hydrated = true;
        self.current = match self.storage.read() {
            Ok(Some(raw)) => match serde_json::from_str::<Session>(&raw) {
                Ok(session) => {
                    info!("Restored persisted session.");
                    Some(session)
                }
                Err(e) => {
                    warn!(error = %e, "Persisted session is corrupt, ignoring it.");
                    None
                }
            },
            Ok(None) => {
                debug!("No persisted session.");
                None
            }
            Err(e) => {
                warn!(error = %e, "Could not read persisted session.");
                None
            }
        };
        self.current.clone()
    }

    /// Authenticates through `gateway` and, on success, persists the session.
    pub async fn login(
        &mut self,
        gateway: &AuthGateway,
        identifier: &str,
        secret: &str,
    ) -> Result<Session, AuthError> {
        let outcome = gateway.authenticate(identifier, secret).await;
        self.establish(identifier, outcome)
    }

    /// Applies the result of an authentication attempt.
    ///
    /// On failure nothing changes, in memory or on disk.
    pub fn establish(
        &mut self,
        identifier: &str,
        outcome: Result<AuthOutcome, AuthError>,
    ) -> Result<Session, AuthError> {
        if let Err(e) = outcome {
            warn!(error = %e, "Login failed.");
            return Err(e);
        }

        let session = Session::new(identifier);
        match serde_json::to_string(&session) {
            Ok(raw) => {
                if let Err(e) = self.storage.write(&raw) {
                    warn!(error = %e, "Could not persist session; it will last until exit.");
                }
            }
            Err(e) => warn!(error = %e, "Could not serialize session."),
        }
        info!("Login succeeded.");
        self.current = Some(session.clone());
        self.hydrated = true;
        Ok(session)
    }

    pub fn logout(&mut self) {
        self.current = None;
        if let Err(e) = self.storage.remove() {
            warn!(error = %e, "Could not remove persisted session.");
        }
        info!("Logged out.");
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }
}

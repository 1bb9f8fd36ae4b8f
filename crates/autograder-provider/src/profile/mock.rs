//! In-memory profile store for tests.

use std::sync::Mutex;

use async_trait::async_trait;

use autograder_core::error::AppError;
use autograder_core::result::AppResult;
use autograder_entity::profile::NewProfile;

use super::ProfileStore;

/// Recording profile store with failure injection.
#[derive(Debug, Default)]
pub struct MockProfileStore {
    rows: Mutex<Vec<NewProfile>>,
    fail_next: Mutex<Option<AppError>>,
}

impl MockProfileStore {
    /// An empty store that accepts every insert.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next insert fail with the given error.
    pub fn fail_next(&self, error: AppError) {
        *self.fail_next.lock().expect("mock store lock poisoned") = Some(error);
    }

    /// All rows inserted so far.
    pub fn rows(&self) -> Vec<NewProfile> {
        self.rows.lock().expect("mock store lock poisoned").clone()
    }
}

#[async_trait]
impl ProfileStore for MockProfileStore {
    async fn insert(&self, profile: &NewProfile) -> AppResult<()> {
        if let Some(err) = self
            .fail_next
            .lock()
            .expect("mock store lock poisoned")
            .take()
        {
            return Err(err);
        }

        self.rows
            .lock()
            .expect("mock store lock poisoned")
            .push(profile.clone());
        Ok(())
    }
}

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::date::format_date;
use crate::models::{
    Exercise, ExerciseAdded, ExerciseLog, LogEntry, LogFilter, NewExercise, User, UserSummary,
};

/// In-memory store of users and their exercise logs.
///
/// Cloning the repository clones the handle, not the data; every clone sees
/// the same users. Each method takes the lock exactly once.
#[derive(Clone, Default)]
pub struct UserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl UserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<User>>> {
        self.users
            .read()
            .map_err(|_| AppError::Internal("user store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<User>>> {
        self.users
            .write()
            .map_err(|_| AppError::Internal("user store lock poisoned".to_string()))
    }

    pub fn count(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }

    pub fn find_by_id(&self, id: &str) -> Result<Option<User>> {
        Ok(self.read()?.iter().find(|u| u.id == id).cloned())
    }

    /// All users in creation order.
    pub fn find_all(&self) -> Result<Vec<UserSummary>> {
        Ok(self.read()?.iter().map(User::summary).collect())
    }

    pub fn create(&self, username: &str) -> Result<UserSummary> {
        let mut users = self.write()?;

        let mut id = Uuid::new_v4().simple().to_string();
        while users.iter().any(|u| u.id == id) {
            id = Uuid::new_v4().simple().to_string();
        }

        let user = User {
            id,
            username: username.to_string(),
            exercises: Vec::new(),
        };
        let summary = user.summary();
        users.push(user);

        tracing::info!(user_id = %summary.id, username = %summary.username, "created user");
        Ok(summary)
    }

    pub fn add_exercise(&self, user_id: &str, exercise: NewExercise) -> Result<ExerciseAdded> {
        let mut users = self.write()?;
        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or_else(|| AppError::NotFound("user not found".to_string()))?;

        let date = exercise.resolve_date()?;
        let exercise = Exercise {
            description: exercise.description,
            duration: exercise.duration,
            date,
        };

        let added = ExerciseAdded {
            username: user.username.clone(),
            description: exercise.description.clone(),
            duration: exercise.duration,
            date: format_date(&exercise.date),
            id: user.id.clone(),
        };
        user.exercises.push(exercise);

        tracing::debug!(
            user_id = %user.id,
            exercises = user.exercises.len(),
            "appended exercise"
        );
        Ok(added)
    }

    pub fn log(&self, user_id: &str, filter: &LogFilter) -> Result<ExerciseLog> {
        let users = self.read()?;
        let user = users
            .iter()
            .find(|u| u.id == user_id)
            .ok_or_else(|| AppError::NotFound("user not found".to_string()))?;

        let log: Vec<LogEntry> = filter
            .apply(&user.exercises)
            .into_iter()
            .map(LogEntry::from)
            .collect();

        Ok(ExerciseLog {
            username: user.username.clone(),
            count: log.len(),
            id: user.id.clone(),
            log,
        })
    }
}

pub mod date;
pub mod exercise;
pub mod log_query;
pub mod number;
pub mod user;

pub use exercise::{CreateExercise, Exercise, ExerciseAdded, LogEntry, NewExercise};
pub use log_query::{DateBound, ExerciseLog, Limit, LogFilter, LogParams};
pub use user::{CreateUser, User, UserSummary};

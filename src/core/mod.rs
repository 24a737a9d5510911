pub mod arithmetic;
pub mod calculator;
pub mod registration;
pub mod validator;

pub use crate::domain::model::{FieldId, Notification, ValidationResult};
pub use crate::domain::ports::Notifier;
pub use crate::utils::error::Result;

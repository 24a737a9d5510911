//! Registration form: five fields, re-validated on every write.
//!
//! Validity is always computed; `touched` only decides whether an error is
//! shown. Submission is gated on the aggregate validity.

use serde::{Deserialize, Serialize};

use crate::core::validator::ValidationRules;
use crate::domain::model::{FieldId, Notification, ValidationResult};
use crate::domain::ports::Notifier;
use crate::utils::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

impl FormData {
    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::FullName => &self.full_name,
            FieldId::Email => &self.email,
            FieldId::Phone => &self.phone,
            FieldId::Password => &self.password,
            FieldId::ConfirmPassword => &self.confirm_password,
        }
    }

    fn slot(&mut self, field: FieldId) -> &mut String {
        match field {
            FieldId::FullName => &mut self.full_name,
            FieldId::Email => &mut self.email,
            FieldId::Phone => &mut self.phone,
            FieldId::Password => &mut self.password,
            FieldId::ConfirmPassword => &mut self.confirm_password,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldState {
    pub touched: bool,
    pub validation: ValidationResult,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The form was valid; carries the values that were submitted.
    Accepted(FormData),
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSnapshot {
    pub id: FieldId,
    pub value: String,
    pub touched: bool,
    pub is_valid: bool,
    pub message: String,
    pub visible_error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationSnapshot {
    pub form_is_valid: bool,
    pub fields: Vec<FieldSnapshot>,
}

pub struct RegistrationForm<N: Notifier> {
    data: FormData,
    fields: [FieldState; 5],
    form_is_valid: bool,
    rules: ValidationRules,
    notifier: N,
}

impl<N: Notifier> RegistrationForm<N> {
    pub fn new(notifier: N) -> Self {
        Self::with_rules(ValidationRules::default(), notifier)
    }

    pub fn with_rules(rules: ValidationRules, notifier: N) -> Self {
        let blank = FieldState {
            touched: false,
            validation: ValidationResult::valid(),
        };
        let mut form = Self {
            data: FormData::default(),
            fields: std::array::from_fn(|_| blank.clone()),
            form_is_valid: false,
            rules,
            notifier,
        };
        form.revalidate_all();
        form
    }

    pub fn values(&self) -> &FormData {
        &self.data
    }

    pub fn value(&self, field: FieldId) -> &str {
        self.data.get(field)
    }

    pub fn field(&self, field: FieldId) -> &FieldState {
        &self.fields[field.index()]
    }

    pub fn validation(&self, field: FieldId) -> &ValidationResult {
        &self.field(field).validation
    }

    pub fn is_touched(&self, field: FieldId) -> bool {
        self.field(field).touched
    }

    /// The field's message, but only once the user has left the field.
    pub fn visible_error(&self, field: FieldId) -> Option<&str> {
        let state = self.field(field);
        (state.touched && !state.validation.is_valid).then_some(state.validation.message.as_str())
    }

    pub fn is_valid(&self) -> bool {
        self.form_is_valid
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn into_notifier(self) -> N {
        self.notifier
    }

    /// Stores a new value and re-validates the field plus every field that
    /// compares against it.
    pub fn change(&mut self, field: FieldId, value: impl Into<String>) {
        *self.data.slot(field) = value.into();

        self.revalidate(field);
        for &dependent in field.dependents() {
            self.revalidate(dependent);
        }
        self.recompute_aggregate();

        tracing::debug!(
            field = %field,
            valid = self.validation(field).is_valid,
            form_valid = self.form_is_valid,
            "registration field changed"
        );
    }

    pub fn change_by_id(&mut self, id: &str, value: impl Into<String>) -> Result<()> {
        let field = id.parse::<FieldId>()?;
        self.change(field, value);
        Ok(())
    }

    pub fn blur(&mut self, field: FieldId) {
        self.fields[field.index()].touched = true;
    }

    pub fn touch_all(&mut self) {
        for state in self.fields.iter_mut() {
            state.touched = true;
        }
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if !self.form_is_valid {
            tracing::info!("registration rejected, form has invalid fields");
            self.notifier.notify(Notification::error(
                "Registration Failed",
                "Please fix the errors in the form before submitting.",
            ));
            return SubmitOutcome::Rejected;
        }

        tracing::info!(email = %self.data.email, "registration accepted");
        self.notifier.notify(Notification::info(
            "Registration Successful!",
            "Your account has been created successfully.",
        ));

        let submitted = std::mem::take(&mut self.data);
        for state in self.fields.iter_mut() {
            state.touched = false;
        }
        self.revalidate_all();
        SubmitOutcome::Accepted(submitted)
    }

    pub fn snapshot(&self) -> RegistrationSnapshot {
        let fields = FieldId::ALL
            .into_iter()
            .map(|id| {
                let state = self.field(id);
                let raw = self.data.get(id);
                FieldSnapshot {
                    id,
                    value: if id.is_secret() {
                        "*".repeat(raw.chars().count())
                    } else {
                        raw.to_string()
                    },
                    touched: state.touched,
                    is_valid: state.validation.is_valid,
                    message: state.validation.message.clone(),
                    visible_error: self.visible_error(id).map(str::to_string),
                }
            })
            .collect();

        RegistrationSnapshot {
            form_is_valid: self.form_is_valid,
            fields,
        }
    }

    fn check(&self, field: FieldId) -> ValidationResult {
        let data = &self.data;
        match field {
            FieldId::FullName => self.rules.validate_name(&data.full_name),
            FieldId::Email => self.rules.validate_email(&data.email),
            FieldId::Phone => self.rules.validate_phone(&data.phone),
            FieldId::Password => self
                .rules
                .validate_password(&data.password, &data.full_name),
            FieldId::ConfirmPassword => self
                .rules
                .validate_confirm_password(&data.password, &data.confirm_password),
        }
    }

    fn revalidate(&mut self, field: FieldId) {
        self.fields[field.index()].validation = self.check(field);
    }

    fn revalidate_all(&mut self) {
        for field in FieldId::ALL {
            self.revalidate(field);
        }
        self.recompute_aggregate();
    }

    fn recompute_aggregate(&mut self) {
        self.form_is_valid = FieldId::ALL.into_iter().all(|field| {
            self.fields[field.index()].validation.is_valid && !self.data.get(field).is_empty()
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::notifier::RecordingNotifier;
    use crate::core::validator::{PASSWORDS_DIFFER, PASSWORD_CONTAINS_NAME};

    fn form() -> RegistrationForm<RecordingNotifier> {
        RegistrationForm::new(RecordingNotifier::default())
    }

    fn filled() -> RegistrationForm<RecordingNotifier> {
        let mut form = form();
        form.change(FieldId::FullName, "Alice Smith");
        form.change(FieldId::Email, "alice@example.com");
        form.change(FieldId::Phone, "555-123-4567");
        form.change(FieldId::Password, "mysecret1");
        form.change(FieldId::ConfirmPassword, "mysecret1");
        form
    }

    #[test]
    fn test_new_form_is_invalid_but_shows_no_errors() {
        let form = form();
        assert!(!form.is_valid());
        assert!(!form.validation(FieldId::FullName).is_valid);
        for field in FieldId::ALL {
            assert_eq!(form.visible_error(field), None);
        }
    }

    #[test]
    fn test_errors_visible_only_after_blur() {
        let mut form = form();
        form.change(FieldId::FullName, "Al");
        assert!(!form.validation(FieldId::FullName).is_valid);
        assert_eq!(form.visible_error(FieldId::FullName), None);

        form.blur(FieldId::FullName);
        assert_eq!(
            form.visible_error(FieldId::FullName),
            Some("Name must be at least 5 characters long")
        );

        form.change(FieldId::FullName, "Alice");
        assert_eq!(form.visible_error(FieldId::FullName), None);
    }

    #[test]
    fn test_filled_form_is_valid() {
        assert!(filled().is_valid());
    }

    #[test]
    fn test_empty_field_blocks_aggregate_validity() {
        let mut form = filled();
        form.change(FieldId::Password, "");
        form.change(FieldId::ConfirmPassword, "");
        // confirm matches the empty password, yet the form stays invalid
        assert!(form.validation(FieldId::ConfirmPassword).is_valid);
        assert!(!form.is_valid());
    }

    #[test]
    fn test_name_change_revalidates_password() {
        let mut form = filled();
        form.change(FieldId::FullName, "mysecret");
        assert_eq!(
            form.validation(FieldId::Password).message,
            PASSWORD_CONTAINS_NAME
        );
        assert!(!form.is_valid());
    }

    #[test]
    fn test_password_change_revalidates_confirmation() {
        let mut form = filled();
        form.change(FieldId::Password, "othersecret");
        assert_eq!(
            form.validation(FieldId::ConfirmPassword).message,
            PASSWORDS_DIFFER
        );
        form.change(FieldId::ConfirmPassword, "othersecret");
        assert!(form.is_valid());
    }

    #[test]
    fn test_submit_valid_form_resets_fields() {
        let mut form = filled();
        form.touch_all();

        let outcome = form.submit();
        match outcome {
            SubmitOutcome::Accepted(data) => assert_eq!(data.email, "alice@example.com"),
            SubmitOutcome::Rejected => panic!("valid form was rejected"),
        }

        assert_eq!(form.values(), &FormData::default());
        assert!(!form.is_valid());
        assert!(!form.is_touched(FieldId::Email));
        assert_eq!(form.visible_error(FieldId::FullName), None);

        let last = form.notifier().last().unwrap();
        assert_eq!(last.title, "Registration Successful!");
        assert!(!last.is_destructive());
    }

    #[test]
    fn test_submit_invalid_form_keeps_state() {
        let mut form = filled();
        form.change(FieldId::Phone, "123-456-7890");
        form.blur(FieldId::Phone);
        let before = form.snapshot();

        assert_eq!(form.submit(), SubmitOutcome::Rejected);
        assert_eq!(form.snapshot(), before);
        assert_eq!(form.value(FieldId::Phone), "123-456-7890");

        let last = form.notifier().last().unwrap();
        assert_eq!(last.title, "Registration Failed");
        assert!(last.is_destructive());
    }

    #[test]
    fn test_change_by_id() {
        let mut form = form();
        form.change_by_id("confirmPassword", "abc").unwrap();
        assert_eq!(form.value(FieldId::ConfirmPassword), "abc");
        assert!(form.change_by_id("nickname", "x").is_err());
    }

    #[test]
    fn test_snapshot_masks_passwords() {
        let snapshot = filled().snapshot();
        let password = snapshot
            .fields
            .iter()
            .find(|f| f.id == FieldId::Password)
            .unwrap();
        assert_eq!(password.value, "*********");

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["formIsValid"], true);
        assert_eq!(json["fields"][0]["id"], "fullName");
        assert_eq!(json["fields"][0]["value"], "Alice Smith");
    }
}

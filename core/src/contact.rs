use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
    Privacy,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Subject,
        Field::Message,
        Field::Privacy,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
            Field::Privacy => "privacy",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{} is required", .0.as_str())]
    Required(Field),
    #[error("`{0}` is not a valid e-mail address")]
    InvalidEmail(String),
    #[error("a submission is already in flight")]
    AlreadySending,
}

impl FormError {
    pub fn field(&self) -> Option<Field> {
        match self {
            FormError::Required(field) => Some(*field),
            FormError::InvalidEmail(_) => Some(Field::Email),
            FormError::AlreadySending => None,
        }
    }
}

/// Errors left once `field` has been edited, or `None` when it had none.
pub fn clear_field_errors(errors: &[FormError], field: Field) -> Option<Vec<FormError>> {
    if !errors.iter().any(|error| error.field() == Some(field)) {
        return None;
    }
    Some(
        errors
            .iter()
            .filter(|error| error.field() != Some(field))
            .cloned()
            .collect(),
    )
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub privacy: bool,
    #[serde(skip)]
    status: SubmitStatus,
}

impl ContactForm {
    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn is_sending(&self) -> bool {
        self.status == SubmitStatus::Sending
    }

    pub fn set_text(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
            Field::Privacy => self.privacy = !value.is_empty(),
        }
    }

    pub fn set_privacy(&mut self, accepted: bool) {
        self.privacy = accepted;
    }

    /// Required-field and e-mail checks. Returns every problem found.
    pub fn validate(&self) -> Result<(), Vec<FormError>> {
        let mut errors = Vec::new();
        for (field, value) in [
            (Field::Name, &self.name),
            (Field::Email, &self.email),
            (Field::Subject, &self.subject),
            (Field::Message, &self.message),
        ] {
            if value.trim().is_empty() {
                errors.push(FormError::Required(field));
            }
        }
        let email = self.email.trim();
        if !email.is_empty() && !looks_like_email(email) {
            errors.push(FormError::InvalidEmail(email.to_string()));
        }
        if !self.privacy {
            errors.push(FormError::Required(Field::Privacy));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validates and moves to `Sending`. On error nothing changes.
    pub fn begin_submit(&mut self) -> Result<(), Vec<FormError>> {
        if self.is_sending() {
            return Err(vec![FormError::AlreadySending]);
        }
        self.validate()?;
        self.status = SubmitStatus::Sending;
        Ok(())
    }

    /// Records the outcome of the submission. Success clears the fields,
    /// failure keeps them so the visitor can retry.
    pub fn finish_submit(&mut self, succeeded: bool) {
        if !self.is_sending() {
            log::warn!("finish_submit called without a submission in flight");
            return;
        }
        if succeeded {
            *self = ContactForm {
                status: SubmitStatus::Success,
                ..ContactForm::default()
            };
        } else {
            self.status = SubmitStatus::Error;
        }
    }
}

fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !value.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .map(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
            .unwrap_or(false)
}

/// Ways to reach out besides the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactMethod {
    Whatsapp,
    Behance,
    Email,
}

impl ContactMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            ContactMethod::Whatsapp => "whatsapp",
            ContactMethod::Behance => "behance",
            ContactMethod::Email => "email",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Lea".into(),
            email: "lea@example.com".into(),
            subject: "Packaging".into(),
            message: "Hello".into(),
            privacy: true,
            ..ContactForm::default()
        }
    }

    #[test]
    fn empty_form_is_blocked_before_sending() {
        let mut form = ContactForm::default();
        let errors = form.begin_submit().unwrap_err();
        assert_eq!(errors.len(), 5);
        assert!(errors.contains(&FormError::Required(Field::Name)));
        assert!(errors.contains(&FormError::Required(Field::Privacy)));
        assert_eq!(form.status(), SubmitStatus::Idle);
    }

    #[test]
    fn whitespace_does_not_count() {
        let mut form = filled();
        form.subject = "   ".into();
        assert_eq!(
            form.validate().unwrap_err(),
            vec![FormError::Required(Field::Subject)]
        );
    }

    #[test]
    fn malformed_email_is_reported() {
        for bad in ["lea", "lea@", "@example.com", "lea@example", "le a@example.com", "lea@example."] {
            let mut form = filled();
            form.email = bad.into();
            let errors = form.validate().unwrap_err();
            assert_eq!(errors.len(), 1, "{bad}");
            assert_eq!(errors[0].field(), Some(Field::Email));
        }
    }

    #[test]
    fn success_resets_fields() {
        let mut form = filled();
        form.begin_submit().unwrap();
        assert!(form.is_sending());
        assert_eq!(
            form.begin_submit().unwrap_err(),
            vec![FormError::AlreadySending]
        );
        form.finish_submit(true);
        assert_eq!(form.status(), SubmitStatus::Success);
        assert!(form.name.is_empty());
        assert!(!form.privacy);
    }

    #[test]
    fn failure_keeps_fields_for_retry() {
        let mut form = filled();
        form.begin_submit().unwrap();
        form.finish_submit(false);
        assert_eq!(form.status(), SubmitStatus::Error);
        assert_eq!(form.name, "Lea");
        form.begin_submit().unwrap();
        assert_eq!(form.status(), SubmitStatus::Sending);
    }

    #[test]
    fn finishing_without_sending_is_ignored() {
        let mut form = filled();
        form.finish_submit(true);
        assert_eq!(form.status(), SubmitStatus::Idle);
        assert_eq!(form.name, "Lea");
    }

    #[test]
    fn accepting_privacy_clears_only_its_error() {
        let mut form = ContactForm::default();
        let errors = form.begin_submit().unwrap_err();
        form.set_privacy(true);
        let remaining = clear_field_errors(&errors, Field::Privacy).unwrap();
        assert_eq!(remaining.len(), 4);
        assert!(!remaining.contains(&FormError::Required(Field::Privacy)));
        assert_eq!(clear_field_errors(&remaining, Field::Privacy), None);
    }

    #[test]
    fn set_text_routes_to_fields() {
        let mut form = ContactForm::default();
        form.set_text(Field::Message, "Hi".into());
        form.set_privacy(true);
        assert_eq!(form.message, "Hi");
        assert!(form.privacy);
    }
}

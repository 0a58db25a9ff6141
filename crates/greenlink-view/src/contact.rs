//! Contact and newsletter form validation.

use std::sync::LazyLock;

use greenlink_commerce::cart::Notice;
use regex::Regex;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\d\s\-\+\(\)]{10,}$").expect("phone pattern is valid")
});

/// Check an email address the way the page does: something@something.tld.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// At least ten digits, spaces, dashes, plus signs or parentheses.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE.is_match(phone)
}

/// Input type of a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    TextArea,
}

/// Visual validation state of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldState {
    #[default]
    Untouched,
    Valid,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub kind: FieldKind,
    pub required: bool,
    pub value: String,
    pub state: FieldState,
}

impl Field {
    pub fn new(name: impl Into<String>, kind: FieldKind, required: bool) -> Self {
        Self {
            name: name.into(),
            kind,
            required,
            value: String::new(),
            state: FieldState::Untouched,
        }
    }

    /// Whether the current value passes the field's rules.
    pub fn is_valid(&self) -> bool {
        let value = self.value.trim();
        if value.is_empty() {
            return !self.required;
        }
        match self.kind {
            FieldKind::Email => is_valid_email(value),
            FieldKind::Tel => is_valid_phone(value),
            FieldKind::Text | FieldKind::TextArea => true,
        }
    }

    /// Validate and record the visual state.
    fn validate(&mut self) -> bool {
        let valid = self.is_valid();
        self.state = if valid {
            FieldState::Valid
        } else {
            FieldState::Error
        };
        valid
    }
}

/// Result of submitting the contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Accepted; the submitted `(field, value)` pairs, trimmed.
    Sent(Vec<(String, String)>),
    /// Blocked; names of the failing fields.
    Rejected(Vec<String>),
}

impl Submission {
    /// The message to toast for this outcome.
    pub fn notice(&self) -> Notice {
        match self {
            Submission::Sent(_) => Notice::success("Message sent successfully!"),
            Submission::Rejected(_) => Notice::error("Please fix the errors in the form"),
        }
    }
}

/// The contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    fields: Vec<Field>,
}

impl Default for ContactForm {
    /// Name, email, optional phone, subject and message.
    fn default() -> Self {
        Self::new(vec![
            Field::new("name", FieldKind::Text, true),
            Field::new("email", FieldKind::Email, true),
            Field::new("phone", FieldKind::Tel, false),
            Field::new("subject", FieldKind::Text, false),
            Field::new("message", FieldKind::TextArea, true),
        ])
    }
}

impl ContactForm {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Typing into a field. A field already in error is revalidated live.
    pub fn input(&mut self, name: &str, value: impl Into<String>) {
        if let Some(field) = self.field_mut(name) {
            field.value = value.into();
            if field.state == FieldState::Error {
                field.validate();
            }
        }
    }

    /// Leaving a field validates it. Returns `None` for unknown fields.
    pub fn blur(&mut self, name: &str) -> Option<bool> {
        self.field_mut(name).map(Field::validate)
    }

    /// Validate everything; on success clear the form.
    pub fn submit(&mut self) -> Submission {
        let mut failing = Vec::new();
        for field in &mut self.fields {
            if !field.validate() {
                failing.push(field.name.clone());
            }
        }
        if !failing.is_empty() {
            tracing::debug!(fields = ?failing, "contact form rejected");
            return Submission::Rejected(failing);
        }

        let values = self
            .fields
            .iter()
            .map(|f| (f.name.clone(), f.value.trim().to_string()))
            .collect();
        self.reset();
        Submission::Sent(values)
    }

    /// Clear values and validation states.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
            field.state = FieldState::Untouched;
        }
    }
}

/// Newsletter sign-up: a single email address.
pub fn subscribe_newsletter(email: &str) -> Notice {
    if is_valid_email(email.trim()) {
        Notice::success("Subscribed successfully!")
    } else {
        Notice::error("Invalid email")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use greenlink_commerce::cart::Severity;

    #[test]
    fn test_email_rules() {
        assert!(is_valid_email("hello@greenlink.eco"));
        assert!(is_valid_email("a.b+c@d.co.uk"));
        assert!(!is_valid_email("hello@greenlink"));
        assert!(!is_valid_email("hello greenlink@x.eco"));
        assert!(!is_valid_email("@x.eco"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_phone_rules() {
        assert!(is_valid_phone("+33 (0)1 23 45 67 89"));
        assert!(is_valid_phone("0123456789"));
        assert!(!is_valid_phone("012345678"));
        assert!(!is_valid_phone("01 23 45 67 8x"));
    }

    #[test]
    fn test_optional_empty_field_is_valid() {
        let field = Field::new("phone", FieldKind::Tel, false);
        assert!(field.is_valid());
    }

    #[test]
    fn test_blur_then_live_revalidation() {
        let mut form = ContactForm::default();
        form.input("email", "bad");
        assert_eq!(form.field("email").unwrap().state, FieldState::Untouched);

        assert_eq!(form.blur("email"), Some(false));
        assert_eq!(form.field("email").unwrap().state, FieldState::Error);

        form.input("email", "good@greenlink.eco");
        assert_eq!(form.field("email").unwrap().state, FieldState::Valid);
        assert_eq!(form.blur("nope"), None);
    }

    #[test]
    fn test_valid_field_is_not_revalidated_on_input() {
        let mut form = ContactForm::default();
        form.input("name", "Ada");
        form.blur("name");
        form.input("name", "   ");
        assert_eq!(form.field("name").unwrap().state, FieldState::Valid);
    }

    #[test]
    fn test_submit_rejects_and_marks_fields() {
        let mut form = ContactForm::default();
        form.input("name", "Ada");
        form.input("email", "ada@greenlink");

        let outcome = form.submit();
        assert_eq!(
            outcome,
            Submission::Rejected(vec!["email".to_string(), "message".to_string()])
        );
        assert_eq!(outcome.notice().severity, Severity::Error);
        assert_eq!(form.field("name").unwrap().state, FieldState::Valid);
        assert_eq!(form.field("name").unwrap().value, "Ada");
    }

    #[test]
    fn test_submit_sends_and_resets() {
        let mut form = ContactForm::default();
        form.input("name", " Ada ");
        form.input("email", "ada@greenlink.eco");
        form.input("message", "Do you ship to Lyon?");

        let outcome = form.submit();
        let Submission::Sent(values) = &outcome else {
            panic!("expected sent, got {outcome:?}");
        };
        assert!(values.contains(&("name".to_string(), "Ada".to_string())));
        assert_eq!(outcome.notice(), Notice::success("Message sent successfully!"));
        assert!(form
            .fields()
            .iter()
            .all(|f| f.value.is_empty() && f.state == FieldState::Untouched));
    }

    #[test]
    fn test_newsletter() {
        assert_eq!(subscribe_newsletter(" me@x.eco ").severity, Severity::Success);
        assert_eq!(subscribe_newsletter("me@x").message, "Invalid email");
    }
}

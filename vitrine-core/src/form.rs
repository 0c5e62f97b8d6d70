//! Contact form validation and the transient "sent" confirmation.

/// How long the sent confirmation shows before the form resets.
pub const SENT_RESET_MS: u64 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

pub const FIELDS: [Field; 3] = [Field::Name, Field::Email, Field::Message];

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }

    fn index(self) -> usize {
        match self {
            Field::Name => 0,
            Field::Email => 1,
            Field::Message => 2,
        }
    }
}

/// Validation state driving a field's border styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState {
    Neutral,
    Valid,
    Invalid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    /// Submission accepted; resets after [`SENT_RESET_MS`].
    Sent { sent_at: u64 },
}

#[derive(Debug)]
pub struct ContactForm {
    values: [String; 3],
    /// Set once a field has been validated (on blur or submit).
    touched: [bool; 3],
    phase: FormPhase,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            values: Default::default(),
            touched: [false; 3],
            phase: FormPhase::Editing,
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_sent(&self) -> bool {
        matches!(self.phase, FormPhase::Sent { .. })
    }

    pub fn value(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    pub fn push_char(&mut self, field: Field, ch: char) {
        if !self.is_sent() {
            self.values[field.index()].push(ch);
        }
    }

    pub fn pop_char(&mut self, field: Field) {
        if !self.is_sent() {
            self.values[field.index()].pop();
        }
    }

    fn field_valid(&self, field: Field) -> bool {
        let value = self.value(field).trim();
        match field {
            Field::Email => is_valid_email(value),
            _ => !value.is_empty(),
        }
    }

    /// Border state for a field: neutral until first validated.
    pub fn field_state(&self, field: Field) -> FieldState {
        if !self.touched[field.index()] {
            FieldState::Neutral
        } else if self.field_valid(field) {
            FieldState::Valid
        } else {
            FieldState::Invalid
        }
    }

    /// Validate a field as focus leaves it.
    pub fn blur(&mut self, field: Field) {
        self.touched[field.index()] = true;
    }

    /// Validate everything; on success enter the sent phase. Returns true
    /// if the submission was accepted.
    pub fn submit(&mut self, now_ms: u64) -> bool {
        if self.is_sent() {
            return false;
        }
        self.touched = [true; 3];
        if FIELDS.iter().all(|&f| self.field_valid(f)) {
            self.phase = FormPhase::Sent { sent_at: now_ms };
            true
        } else {
            false
        }
    }

    /// Clear the confirmation and the fields once the reset delay passes.
    pub fn advance(&mut self, now_ms: u64) {
        if let FormPhase::Sent { sent_at } = self.phase {
            if now_ms >= sent_at + SENT_RESET_MS {
                *self = Self::new();
            }
        }
    }
}

/// Same shape check the original applies: non-empty local part, non-empty
/// domain containing a dot, no whitespace or extra at-signs.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    let mut domain_parts = domain.rsplitn(2, '.');
    match (domain_parts.next(), domain_parts.next()) {
        (Some(tld), Some(rest)) => !tld.is_empty() && !rest.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(form: &mut ContactForm, field: Field, s: &str) {
        for ch in s.chars() {
            form.push_char(field, ch);
        }
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plain"));
        assert!(!is_valid_email("no-domain@"));
        assert!(!is_valid_email("@no-local.com"));
        assert!(!is_valid_email("a@nodot"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("two@@signs.com"));
        assert!(!is_valid_email("sp ace@b.co"));
    }

    #[test]
    fn fields_start_neutral_until_blurred() {
        let mut form = ContactForm::new();
        assert_eq!(form.field_state(Field::Name), FieldState::Neutral);
        form.blur(Field::Name);
        assert_eq!(form.field_state(Field::Name), FieldState::Invalid);
        type_str(&mut form, Field::Name, "Ada");
        assert_eq!(form.field_state(Field::Name), FieldState::Valid);
    }

    #[test]
    fn whitespace_only_name_is_invalid() {
        let mut form = ContactForm::new();
        type_str(&mut form, Field::Name, "   ");
        form.blur(Field::Name);
        assert_eq!(form.field_state(Field::Name), FieldState::Invalid);
    }

    #[test]
    fn submit_rejects_and_marks_all_fields() {
        let mut form = ContactForm::new();
        type_str(&mut form, Field::Name, "Ada");
        assert!(!form.submit(0));
        assert!(!form.is_sent());
        // Submit touches every field, so the empty ones show invalid.
        assert_eq!(form.field_state(Field::Email), FieldState::Invalid);
        assert_eq!(form.field_state(Field::Message), FieldState::Invalid);
        assert_eq!(form.field_state(Field::Name), FieldState::Valid);
    }

    #[test]
    fn successful_submit_then_reset() {
        let mut form = ContactForm::new();
        type_str(&mut form, Field::Name, "Ada");
        type_str(&mut form, Field::Email, "ada@analytical.engine");
        type_str(&mut form, Field::Message, "Hello");
        assert!(form.submit(1_000));
        assert!(form.is_sent());

        // Input is ignored while the confirmation shows.
        form.push_char(Field::Name, 'x');
        assert_eq!(form.value(Field::Name), "Ada");
        assert!(!form.submit(1_500));

        form.advance(1_000 + SENT_RESET_MS - 1);
        assert!(form.is_sent());
        form.advance(1_000 + SENT_RESET_MS);
        assert!(!form.is_sent());
        assert_eq!(form.value(Field::Name), "");
        assert_eq!(form.field_state(Field::Email), FieldState::Neutral);
    }
}

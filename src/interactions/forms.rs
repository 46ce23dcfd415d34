use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Inputs a submission can be rejected for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Role,
    Consent,
    Subject,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::Name => "full name",
            Field::Email => "email",
            Field::Role => "role",
            Field::Consent => "confidentiality notice",
            Field::Subject => "subject",
            Field::Message => "message",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(Field),
    #[error("email address is not valid")]
    InvalidEmail,
    #[error("a role must be selected")]
    RoleRequired,
    #[error("the confidentiality notice must be acknowledged")]
    ConsentRequired,
    #[error("submission rejected: {0}")]
    Rejected(String),
}

impl FormError {
    /// The input to point the user at, if the error belongs to one.
    pub fn field(&self) -> Option<Field> {
        match self {
            FormError::MissingField(field) => Some(*field),
            FormError::InvalidEmail => Some(Field::Email),
            FormError::RoleRequired => Some(Field::Role),
            FormError::ConsentRequired => Some(Field::Consent),
            FormError::Rejected(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Official,
    Scheduler,
    Developer,
    Partner,
    Other,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Official,
        Role::Scheduler,
        Role::Developer,
        Role::Partner,
        Role::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Role::Official => "Referee or official",
            Role::Scheduler => "Scheduler or school",
            Role::Developer => "Developer",
            Role::Partner => "Partner or sponsor",
            Role::Other => "Other",
        }
    }

    /// Value used for the `<option>`; the placeholder option has `""`.
    pub fn value(self) -> &'static str {
        match self {
            Role::Official => "official",
            Role::Scheduler => "scheduler",
            Role::Developer => "developer",
            Role::Partner => "partner",
            Role::Other => "other",
        }
    }

    pub fn from_value(value: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|r| r.value() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JoinRequest {
    pub name: String,
    pub email: String,
    pub role: Option<Role>,
    pub organization: Option<String>,
    pub message: Option<String>,
    pub consent: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// The payload a form-submission backend would receive.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "form", rename_all = "snake_case")]
pub enum Submission {
    Join(JoinRequest),
    Contact(ContactRequest),
}

// Matches the browser's `required`: only an empty value is missing, a
// value of spaces is accepted as typed.
fn require(value: &str, field: Field) -> Result<(), FormError> {
    if value.is_empty() {
        Err(FormError::MissingField(field))
    } else {
        Ok(())
    }
}

/// Same shape check browsers apply to `type="email"`: one `@`, non-empty
/// local part, dotted-or-not domain without empty labels, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && domain.split('.').all(|label| !label.is_empty())
        }
        None => false,
    }
}

/// Turns an optional text input into `None` when blank.
pub fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl Submission {
    pub fn validate(&self) -> Result<(), FormError> {
        match self {
            Submission::Join(join) => {
                require(&join.name, Field::Name)?;
                require(&join.email, Field::Email)?;
                if !is_valid_email(&join.email) {
                    return Err(FormError::InvalidEmail);
                }
                if join.role.is_none() {
                    return Err(FormError::RoleRequired);
                }
                if !join.consent {
                    return Err(FormError::ConsentRequired);
                }
                Ok(())
            }
            Submission::Contact(contact) => {
                require(&contact.name, Field::Name)?;
                require(&contact.email, Field::Email)?;
                if !is_valid_email(&contact.email) {
                    return Err(FormError::InvalidEmail);
                }
                require(&contact.subject, Field::Subject)?;
                require(&contact.message, Field::Message)
            }
        }
    }
}

/// Where validated submissions go. A real backend client would implement
/// this; the form flow does not care which one it talks to.
pub trait SubmissionSink {
    fn submit(&self, submission: &Submission) -> Result<(), FormError>;
}

/// Accepts everything and sends nothing anywhere.
pub struct LocalAcknowledgement;

impl SubmissionSink for LocalAcknowledgement {
    fn submit(&self, _submission: &Submission) -> Result<(), FormError> {
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormFlow {
    #[default]
    Editing,
    Sent,
}

impl FormFlow {
    pub fn is_sent(self) -> bool {
        self == FormFlow::Sent
    }

    /// Validates and hands the payload to the sink. Returns the next state;
    /// once sent, further submissions are ignored and nothing is resent.
    pub fn submit(
        self,
        submission: &Submission,
        sink: &dyn SubmissionSink,
    ) -> Result<FormFlow, FormError> {
        if self.is_sent() {
            return Ok(self);
        }
        submission.validate()?;
        sink.submit(submission)?;
        Ok(FormFlow::Sent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct CountingSink {
        calls: Cell<usize>,
    }

    impl SubmissionSink for CountingSink {
        fn submit(&self, _submission: &Submission) -> Result<(), FormError> {
            self.calls.set(self.calls.get() + 1);
            Ok(())
        }
    }

    struct RefusingSink;

    impl SubmissionSink for RefusingSink {
        fn submit(&self, _submission: &Submission) -> Result<(), FormError> {
            Err(FormError::Rejected("service unavailable".to_string()))
        }
    }

    fn join(consent: bool) -> Submission {
        Submission::Join(JoinRequest {
            name: "Emery Frazier".to_string(),
            email: "emery@example.org".to_string(),
            role: Some(Role::Official),
            organization: None,
            message: optional("  ".to_string()),
            consent,
        })
    }

    fn contact() -> Submission {
        Submission::Contact(ContactRequest {
            name: "Sam Reviewer".to_string(),
            email: "sam@example.org".to_string(),
            subject: "Grant review".to_string(),
            message: "Could we get sandbox credentials?".to_string(),
        })
    }

    #[test]
    fn complete_join_form_is_sent_exactly_once() {
        let sink = CountingSink { calls: Cell::new(0) };
        let flow = FormFlow::default().submit(&join(true), &sink).unwrap();
        assert_eq!(flow, FormFlow::Sent);

        let again = flow.submit(&join(true), &sink).unwrap();
        assert_eq!(again, FormFlow::Sent);
        assert_eq!(sink.calls.get(), 1);
    }

    #[test]
    fn join_without_consent_stays_editable() {
        let sink = CountingSink { calls: Cell::new(0) };
        let result = FormFlow::default().submit(&join(false), &sink);
        assert_eq!(result, Err(FormError::ConsentRequired));
        assert_eq!(sink.calls.get(), 0);
    }

    #[test]
    fn join_requires_a_role() {
        let mut submission = join(true);
        if let Submission::Join(req) = &mut submission {
            req.role = Role::from_value("");
        }
        assert_eq!(submission.validate(), Err(FormError::RoleRequired));
    }

    #[test]
    fn empty_required_fields_are_reported_by_name() {
        let mut submission = contact();
        if let Submission::Contact(req) = &mut submission {
            req.subject = String::new();
        }
        assert_eq!(submission.validate(), Err(FormError::MissingField(Field::Subject)));
        assert_eq!(
            FormError::MissingField(Field::Subject).to_string(),
            "subject is required"
        );
    }

    #[test]
    fn whitespace_only_name_is_sent_like_the_browser_allows() {
        let sink = CountingSink { calls: Cell::new(0) };
        let mut submission = contact();
        if let Submission::Contact(req) = &mut submission {
            req.name = "   ".to_string();
        }
        let flow = FormFlow::default().submit(&submission, &sink).unwrap();
        assert!(flow.is_sent());
        assert_eq!(sink.calls.get(), 1);
    }

    #[test]
    fn errors_point_at_the_input_to_flag() {
        assert_eq!(FormError::MissingField(Field::Name).field(), Some(Field::Name));
        assert_eq!(FormError::InvalidEmail.field(), Some(Field::Email));
        assert_eq!(FormError::RoleRequired.field(), Some(Field::Role));
        assert_eq!(FormError::ConsentRequired.field(), Some(Field::Consent));
        assert_eq!(FormError::Rejected("down".to_string()).field(), None);
    }

    #[test]
    fn contact_form_flow_is_independent() {
        let join_flow = FormFlow::default();
        let contact_flow = join_flow.submit(&contact(), &LocalAcknowledgement).unwrap();
        assert!(contact_flow.is_sent());
        assert!(!join_flow.is_sent());
    }

    #[test]
    fn sink_refusal_keeps_the_form() {
        let result = FormFlow::default().submit(&contact(), &RefusingSink);
        assert!(matches!(result, Err(FormError::Rejected(_))));
    }

    #[test]
    fn email_shape() {
        assert!(is_valid_email("a@b"));
        assert!(is_valid_email("contact@networkof.one"));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("@networkof.one"));
        assert!(!is_valid_email("a@"));
        assert!(!is_valid_email("a@b..c"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@b@c"));
    }

    #[test]
    fn roles_round_trip_through_option_values() {
        for role in Role::ALL {
            assert_eq!(Role::from_value(role.value()), Some(role));
        }
        assert_eq!(Role::from_value(""), None);
    }

    #[test]
    fn payload_shape_for_a_backend() {
        let json = serde_json::to_value(join(true)).unwrap();
        assert_eq!(json["form"], "join");
        assert_eq!(json["role"], "official");
        assert_eq!(json["consent"], true);
        assert!(json["message"].is_null());

        let json = serde_json::to_value(contact()).unwrap();
        assert_eq!(json["form"], "contact");
        assert_eq!(json["subject"], "Grant review");
    }
}

use crate::signup::RejectionReason;

/// Bound value of an email input. No format checks happen here, the transport
/// decides what it accepts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmailField {
    value: String,
}

impl EmailField {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn on_change(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Takes the current value for submission and clears the field.
    pub fn take_for_submit(&mut self) -> String {
        std::mem::take(&mut self.value)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum SignupStatus {
    #[default]
    Idle,
    Sending,
    Joined,
    Rejected(RejectionReason),
}

impl SignupStatus {
    pub fn message(&self) -> Option<String> {
        match self {
            SignupStatus::Idle => None,
            SignupStatus::Sending => Some("Sending...".to_string()),
            SignupStatus::Joined => Some("You're on the list. Watch your inbox.".to_string()),
            SignupStatus::Rejected(reason) => Some(format!("Signup failed: {}", reason)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_then_submit_clears() {
        let mut field = EmailField::default();
        assert_eq!(field.value(), "");
        field.on_change("a@b.com");
        assert_eq!(field.value(), "a@b.com");
        assert_eq!(field.take_for_submit(), "a@b.com");
        assert_eq!(field.value(), "");
    }

    #[test]
    fn change_overwrites_without_validation() {
        let mut field = EmailField::default();
        field.on_change("not an email");
        field.on_change("");
        assert_eq!(field.value(), "");
    }

    #[test]
    fn status_messages() {
        assert_eq!(SignupStatus::Idle.message(), None);
        let rejected = SignupStatus::Rejected(RejectionReason::Refused { status: 409 });
        assert_eq!(
            rejected.message().as_deref(),
            Some("Signup failed: signup refused with status 409")
        );
    }
}

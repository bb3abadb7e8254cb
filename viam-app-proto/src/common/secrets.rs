use crate::proto::app::v1::{shared_secret, LocationAuth, RobotPart, SharedSecret};

impl SharedSecret {
    pub fn is_enabled(&self) -> bool {
        self.state() == shared_secret::State::Enabled
    }
}

/// Messages holding a rotating set of [SharedSecret]s next to a deprecated single secret.
pub trait SecretHolder {
    fn secrets(&self) -> &[SharedSecret];

    fn legacy_secret(&self) -> &str;

    /// Enabled secrets in the order they were rotated in.
    fn enabled_secrets(&self) -> Vec<&SharedSecret> {
        self.secrets().iter().filter(|s| s.is_enabled()).collect()
    }

    /// The most recently created enabled secret. A secret without a creation time sorts first,
    /// ties go to the one later in the list.
    fn latest_enabled(&self) -> Option<&SharedSecret> {
        self.secrets()
            .iter()
            .filter(|s| s.is_enabled())
            .max_by_key(|s| s.created_on.as_ref().map(|t| (t.seconds, t.nanos)))
    }

    fn find_secret(&self, id: &str) -> Option<&SharedSecret> {
        self.secrets().iter().find(|s| s.id == id)
    }

    /// Whether `payload` matches an enabled secret or the legacy secret.
    fn accepts(&self, payload: &str) -> bool {
        if payload.is_empty() {
            return false;
        }
        self.legacy_secret() == payload
            || self
                .secrets()
                .iter()
                .any(|s| s.is_enabled() && s.secret == payload)
    }
}

impl SecretHolder for RobotPart {
    fn secrets(&self) -> &[SharedSecret] {
        &self.secrets
    }

    fn legacy_secret(&self) -> &str {
        &self.secret
    }
}

impl SecretHolder for LocationAuth {
    fn secrets(&self) -> &[SharedSecret] {
        &self.secrets
    }

    fn legacy_secret(&self) -> &str {
        &self.secret
    }
}

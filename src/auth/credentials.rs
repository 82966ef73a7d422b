/// Who a verified token or login speaks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
    pub username: String,
}

/// Checks a username/password pair.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> Option<Identity>;
}

/// The single built-in account.
#[derive(Debug, Clone)]
pub struct FixedCredentials {
    id: String,
    username: String,
    password: String,
}

impl Default for FixedCredentials {
    fn default() -> Self {
        Self {
            id: "123".into(),
            username: "admin".into(),
            password: "rms-1907".into(),
        }
    }
}

impl CredentialVerifier for FixedCredentials {
    fn verify(&self, username: &str, password: &str) -> Option<Identity> {
        if username.as_bytes() == self.username.as_bytes()
            && password.as_bytes() == self.password.as_bytes()
        {
            Some(Identity {
                id: self.id.clone(),
                username: self.username.clone(),
            })
        } else {
            None
        }
    }
}

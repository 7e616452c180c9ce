//! Close-session gate: a shared secret compared for exact equality. Wrong
//! attempts are unlimited; the gate is a speed-bump against accidental
//! closes, not a security control.

pub struct Gate {
    secret: String,
}

impl Gate {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Exact string match, nothing else.
    pub fn authorize(&self, input: &str) -> bool {
        input == self.secret
    }
}

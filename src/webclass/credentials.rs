use std::env;
use std::fmt;

use crate::error::AppError;

#[derive(Clone)]
pub struct Credentials {
    pub userid: String,
    pub password: String,
}

impl Credentials {
    pub fn new_from_env() -> Result<Self, AppError> {
        let userid = required_var("WEBCLASS_USERID")?;
        let password = required_var("WEBCLASS_PASSWORD")?;
        Ok(Self { userid, password })
    }
}

fn required_var(key: &str) -> Result<String, AppError> {
    env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::Credential(format!("{} is not set", key)))
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("userid", &self.userid)
            .field("password", &"<redacted>")
            .finish()
    }
}

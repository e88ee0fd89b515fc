use stegowav::cipher::CredentialsSource;
use stegowav::errors::Result;

/// Prompts on the controlling terminal unless a fixed password was supplied
/// via `--test-password`/`STEGOWAV_PASSWORD`, in which case that value is
/// used for both encrypt and decrypt without prompting.
pub struct CliCredentials {
    fixed: Option<String>,
}

impl CliCredentials {
    pub fn new(fixed: Option<String>) -> Self {
        Self { fixed }
    }

    fn resolve(&self, prompt: &str) -> Result<Vec<u8>> {
        match &self.fixed {
            Some(p) => Ok(p.clone().into_bytes()),
            None => Ok(rpassword::prompt_password(prompt)?.into_bytes()),
        }
    }
}

impl CredentialsSource for CliCredentials {
    fn password_for_encrypt(&self) -> Result<Vec<u8>> {
        self.resolve("Password: ")
    }

    fn password_for_decrypt(&self) -> Result<Vec<u8>> {
        self.resolve("Password: ")
    }
}

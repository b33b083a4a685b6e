/// Contact form state. Submission is acknowledged client-side only; nothing
/// is sent anywhere.
#[derive(Debug, Default, Clone)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// All three fields must be non-blank. On success returns the
    /// acknowledgment to show; the form should then be reset.
    pub fn submit(&self) -> Result<String, &'static str> {
        if self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.message.trim().is_empty()
        {
            return Err("Please fill in all fields");
        }
        Ok(format!(
            "Thanks {}! Your message has been received, I'll get back to you soon.",
            self.name.trim()
        ))
    }
}

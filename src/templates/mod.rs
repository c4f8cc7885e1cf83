//! HTML rendering for contact-form emails.
//!
//! The template is registered under an `.html` name so Tera autoescapes
//! every interpolated field.

use crate::models::EmailRequest;
use tera::{Context, Tera};
use tracing::debug;

const CONTACT_FORM: &str = "contact_form.html";

/// Template registry for outgoing email bodies.
#[derive(Debug, Clone)]
pub struct EmailTemplates {
    tera: Tera,
}

impl EmailTemplates {
    /// Create a registry with the embedded contact-form template.
    pub fn new() -> tera::Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![".html"]);
        tera.add_raw_template(CONTACT_FORM, include_str!("contact_form.html"))?;

        Ok(Self { tera })
    }

    /// Render the contact-form body. Absent optional fields render as empty.
    pub fn render_contact_form(&self, input: &EmailRequest) -> tera::Result<String> {
        let mut context = Context::new();
        context.insert("first_name", input.first_name.as_deref().unwrap_or_default());
        context.insert("last_name", input.last_name.as_deref().unwrap_or_default());
        context.insert("email", input.email.trim());
        context.insert("message", input.message.as_deref().unwrap_or_default());

        debug!("Rendering {} template", CONTACT_FORM);
        self.tera.render(CONTACT_FORM, &context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> EmailRequest {
        EmailRequest {
            email: "ada@example.com".to_string(),
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
            message: Some("Hello there".to_string()),
        }
    }

    #[test]
    fn test_render_all_fields() {
        let templates = EmailTemplates::new().unwrap();
        let html = templates.render_contact_form(&request()).unwrap();

        assert!(html.contains("<strong>Name:</strong> Ada Lovelace<br>"));
        assert!(html.contains("<strong>Email:</strong> ada@example.com<br>"));
        assert!(html.contains("<strong>Message:</strong> Hello there"));
    }

    #[test]
    fn test_render_escapes_user_input() {
        let templates = EmailTemplates::new().unwrap();
        let input = EmailRequest {
            first_name: Some("<b>Eve</b>".to_string()),
            last_name: Some("O\"Neil & Co".to_string()),
            message: Some("<script>alert(1)</script>".to_string()),
            ..request()
        };
        let html = templates.render_contact_form(&input).unwrap();

        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>Eve</b>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&lt;b&gt;Eve"));
        assert!(html.contains("&amp; Co"));
        assert!(html.contains("&quot;"));
    }

    #[test]
    fn test_render_missing_optionals() {
        let templates = EmailTemplates::new().unwrap();
        let input = EmailRequest {
            email: "ada@example.com".to_string(),
            ..Default::default()
        };
        let html = templates.render_contact_form(&input).unwrap();

        assert!(html.contains("<strong>Name:</strong>  <br>"));
        assert!(html.contains("<strong>Message:</strong> "));
    }
}

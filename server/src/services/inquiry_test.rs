use super::*;

fn sample() -> InquiryRequest {
    InquiryRequest {
        from_name: "Aina".into(),
        from_email: "aina@example.test".into(),
        from_phone: "+60 12-345 6789".into(),
        property_type: "type-b1".into(),
        message: "Is the duplex still available?".into(),
        inquiry_date: "19/10/2026, 10:15:00 am".into(),
        email: "aina@example.test".into(),
    }
}

// =============================================================================
// validate
// =============================================================================

#[test]
fn validate_accepts_complete_request() {
    assert_eq!(validate(&sample()), Ok(()));
}

#[test]
fn validate_names_first_blank_field() {
    let mut req = sample();
    req.from_email = "   ".into();
    req.from_phone = String::new();
    assert_eq!(validate(&req), Err(InquiryError::MissingField("from_email")));
}

#[test]
fn validate_ignores_optional_fields() {
    let mut req = sample();
    req.property_type.clear();
    req.message.clear();
    req.inquiry_date.clear();
    req.email.clear();
    assert_eq!(validate(&req), Ok(()));
}

#[test]
fn request_deserializes_with_missing_fields() {
    let req: InquiryRequest = serde_json::from_str(r#"{"from_name":"Aina"}"#).unwrap();
    assert_eq!(req.from_name, "Aina");
    assert!(req.from_phone.is_empty());
    assert_eq!(validate(&req), Err(InquiryError::MissingField("from_email")));
}

// =============================================================================
// rendering
// =============================================================================

#[test]
fn escape_html_covers_markup_characters() {
    assert_eq!(escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#), "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;");
    assert_eq!(escape_html("plain"), "plain");
}

#[test]
fn template_substitutes_every_placeholder() {
    let html = render_inquiry_template(&sample());
    assert!(!html.contains("{{"), "unreplaced placeholder in {html}");
    assert!(html.contains("Aina"));
    assert!(html.contains("+60 12-345 6789"));
    assert!(html.contains("type-b1"));
    assert!(html.contains("Is the duplex still available?"));
}

#[test]
fn template_escapes_visitor_input() {
    let mut req = sample();
    req.from_name = "<script>alert(1)</script>".into();
    req.message = "Price < 1M & \"negotiable\"".into();
    let html = render_inquiry_template(&req);
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(html.contains("Price &lt; 1M &amp; &quot;negotiable&quot;"));
}

#[test]
fn template_fills_blank_optional_fields() {
    let mut req = sample();
    req.property_type = " ".into();
    req.message.clear();
    let html = render_inquiry_template(&req);
    assert_eq!(html.matches("Not specified").count(), 2);
}

#[test]
fn compose_email_prefers_reply_address_then_sender() {
    let email = compose_email(&sample(), "Subject");
    assert_eq!(email.subject, "Subject");
    assert_eq!(email.reply_to.as_deref(), Some("aina@example.test"));

    let mut req = sample();
    req.email.clear();
    req.from_email = " other@example.test ".into();
    assert_eq!(compose_email(&req, "Subject").reply_to.as_deref(), Some("other@example.test"));
}

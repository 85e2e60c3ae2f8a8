use std::collections::HashMap;

use super::*;

fn map_lookup(vars: &HashMap<String, String>) -> impl Fn(&str) -> Option<String> + '_ {
    move |key: &str| vars.get(key).cloned()
}

fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

fn full_mailer_vars() -> HashMap<String, String> {
    vars(&[
        ("RESEND_API_KEY", "re_test"),
        ("INQUIRY_FROM", "Aricia <inquiry@aricia.test>"),
        ("INQUIRY_TO", "sales@aricia.test, agent@aricia.test"),
    ])
}

// =============================================================================
// ServerConfig
// =============================================================================

#[test]
fn port_defaults_when_unset_or_blank() {
    let empty = vars(&[]);
    assert_eq!(ServerConfig::from_lookup(map_lookup(&empty)).unwrap().port, DEFAULT_PORT);

    let blank = vars(&[("PORT", "  ")]);
    assert_eq!(ServerConfig::from_lookup(map_lookup(&blank)).unwrap().port, DEFAULT_PORT);
}

#[test]
fn port_parses_override() {
    let env = vars(&[("PORT", "8080")]);
    assert_eq!(ServerConfig::from_lookup(map_lookup(&env)).unwrap().port, 8080);
}

#[test]
fn port_rejects_garbage() {
    let env = vars(&[("PORT", "eighty")]);
    let err = ServerConfig::from_lookup(map_lookup(&env)).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "PORT", .. }));
}

// =============================================================================
// MailerConfig
// =============================================================================

#[test]
fn mailer_reads_required_vars_and_default_subject() {
    let env = full_mailer_vars();
    let cfg = MailerConfig::from_lookup(map_lookup(&env)).unwrap();
    assert_eq!(cfg.api_key, "re_test");
    assert_eq!(cfg.from, "Aricia <inquiry@aricia.test>");
    assert_eq!(cfg.to, vec!["sales@aricia.test".to_owned(), "agent@aricia.test".to_owned()]);
    assert_eq!(cfg.subject, DEFAULT_INQUIRY_SUBJECT);
}

#[test]
fn mailer_subject_override() {
    let mut env = full_mailer_vars();
    env.insert("INQUIRY_SUBJECT".into(), "Website lead".into());
    let cfg = MailerConfig::from_lookup(map_lookup(&env)).unwrap();
    assert_eq!(cfg.subject, "Website lead");
}

#[test]
fn mailer_missing_key_names_the_variable() {
    let mut env = full_mailer_vars();
    env.remove("RESEND_API_KEY");
    assert_eq!(
        MailerConfig::from_lookup(map_lookup(&env)).unwrap_err(),
        ConfigError::Missing { var: "RESEND_API_KEY" }
    );
}

#[test]
fn mailer_blank_sender_counts_as_missing() {
    let mut env = full_mailer_vars();
    env.insert("INQUIRY_FROM".into(), "   ".into());
    assert_eq!(
        MailerConfig::from_lookup(map_lookup(&env)).unwrap_err(),
        ConfigError::Missing { var: "INQUIRY_FROM" }
    );
}

#[test]
fn mailer_rejects_recipient_list_of_commas() {
    let mut env = full_mailer_vars();
    env.insert("INQUIRY_TO".into(), " , ,".into());
    let err = MailerConfig::from_lookup(map_lookup(&env)).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "INQUIRY_TO", .. }));
}

#[test]
fn parse_recipients_trims_and_drops_blanks() {
    assert_eq!(parse_recipients("a@x.test,, b@x.test ,"), vec!["a@x.test".to_owned(), "b@x.test".to_owned()]);
    assert!(parse_recipients("").is_empty());
}

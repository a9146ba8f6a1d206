use sched_extract::*;

fn headers(from: &str, to: &str) -> Headers {
    Headers {
        from: Some(from.to_string()),
        to: Some(to.to_string()),
        subject: Some("Coverage".to_string()),
    }
}

#[test]
fn test_single_cue_with_foreign_address() {
    let text = "Could you take over the client review? \
                My colleague bob@partner.io will attend in any case.";
    let info = extract_delegate(text, &headers("alice@corp.example", "carol@corp.example"))
        .expect("delegate expected");

    assert_eq!(info.delegate_email.as_deref(), Some("bob@partner.io"));
    assert!(info.delegate_name.is_none());
    assert!((info.confidence - 0.25).abs() < f64::EPSILON);
}

#[test]
fn test_confidence_accumulates_and_caps() {
    let text = "Could you take this over? I'm looking for someone to handle \
                the review. Please handle the logistics as well. I'll \
                delegate to our PM. Dana can step in, reach dana@ops.example. \
                dana@ops.example will handle the rest.";
    let info = extract_delegate(text, &headers("lead@corp.example", "team@corp.example"))
        .expect("delegate expected");

    assert_eq!(info.delegate_email.as_deref(), Some("dana@ops.example"));
    assert!((info.confidence - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_no_cues_means_no_delegate() {
    let text = "Looping in bob@partner.io for visibility.";
    assert!(extract_delegate(text, &headers("a@x.com", "b@y.com")).is_none());
}

#[test]
fn test_own_addresses_excluded() {
    // The only addresses around are the sender's and recipient's own.
    let text = "From: alice@corp.example\n\
                To: carol@corp.example\n\
                Subject: handover\n\
                Could you take over the review, carol@corp.example?";
    let info = extract_delegate(text, &headers("alice@corp.example", "carol@corp.example"));
    assert!(info.is_none());
}

#[test]
fn test_exclusion_with_display_name_headers() {
    let text = "From: Alice Smith <alice@corp.example>\n\
                To: Carol Jones <carol@corp.example>\n\
                Subject: handover\n\
                Please handle the intake; dana@ops.example can step in.";
    let info = extract_delegate(
        text,
        &headers(
            "Alice Smith <alice@corp.example>",
            "Carol Jones <carol@corp.example>",
        ),
    )
    .expect("delegate expected");

    assert_eq!(info.delegate_email.as_deref(), Some("dana@ops.example"));
}

#[test]
fn test_associate_form_captures_name_and_email() {
    let text = "My associate Priya (priya@consult.example) can take it from here.";
    let info = extract_delegate(text, &headers("me@corp.example", "you@corp.example"))
        .expect("delegate expected");

    assert_eq!(info.delegate_name.as_deref(), Some("Priya"));
    assert_eq!(info.delegate_email.as_deref(), Some("priya@consult.example"));
}

#[test]
fn test_associate_form_without_parentheses() {
    let text = "The associate Marco, marco@firm.example, will join instead of me.";
    let info = extract_delegate(text, &headers("me@corp.example", "you@corp.example"))
        .expect("delegate expected");

    assert_eq!(info.delegate_name.as_deref(), Some("Marco"));
    assert_eq!(info.delegate_email.as_deref(), Some("marco@firm.example"));
}

#[test]
fn test_associate_form_takes_precedence_over_accumulator() {
    let text = "Could you take over? Ping desk@corp.example if needed. \
                My associate Priya (priya@consult.example) knows the account.";
    let info = extract_delegate(text, &headers("me@corp.example", "you@corp.example"))
        .expect("delegate expected");

    // The associate shape wins even though the accumulator would have
    // picked the first address in the text.
    assert_eq!(info.delegate_name.as_deref(), Some("Priya"));
    assert_eq!(info.delegate_email.as_deref(), Some("priya@consult.example"));
}

#[test]
fn test_delegate_never_sender_or_recipient() {
    let texts = [
        "Could you take over? Contact alice@corp.example or dana@ops.example.",
        "Please handle this; alice@corp.example is out.",
    ];
    for text in texts {
        if let Some(info) = extract_delegate(text, &headers("alice@corp.example", "bob@corp.example"))
            && let Some(email) = &info.delegate_email
        {
            assert_ne!(email, "alice@corp.example");
            assert_ne!(email, "bob@corp.example");
        }
    }
}

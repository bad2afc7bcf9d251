//! Tests for the message template builder

use pricing_simulator_core::message::CHOOSE_TEMPLATE_FALLBACK;
use pricing_simulator_core::{build_message, render, MessageContext, TemplateStyle};

fn ania() -> MessageContext {
    MessageContext {
        client_name: "Ania".to_string(),
        old_price: 150.0,
        new_price: 180.0,
        package_label: "pakiet 8 treningów".to_string(),
        effective_date_new_clients: "1 stycznia".to_string(),
        effective_date_existing_clients: "1 marca".to_string(),
    }
}

#[test]
fn test_official_template_resolves_all_fields() {
    let message = build_message("official", &ania());

    assert!(message.contains("Ania"));
    assert!(message.contains("180"));
    assert!(message.contains("150"));
    assert!(message.contains("pakiet 8 treningów"));
    assert!(message.contains("1 stycznia"));
    assert!(message.contains("1 marca"));

    // No unresolved interpolation tokens survive
    assert!(!message.contains('{'));
    assert!(!message.contains('}'));
}

#[test]
fn test_every_style_substitutes_the_same_context() {
    for style in [
        TemplateStyle::Sandwich,
        TemplateStyle::Official,
        TemplateStyle::Casual,
        TemplateStyle::Vip,
    ] {
        let message = render(style, &ania());
        assert!(message.contains("Ania"), "{style}: client name missing");
        assert!(message.contains("180 zł"), "{style}: new price missing");
        assert!(message.contains("1 marca"), "{style}: grace date missing");
        assert!(!message.contains('{'), "{style}: unresolved placeholder");
    }
}

#[test]
fn test_styles_produce_distinct_prose() {
    let official = render(TemplateStyle::Official, &ania());
    let casual = render(TemplateStyle::Casual, &ania());
    assert_ne!(official, casual);
    assert!(official.starts_with("Szanowny/a"));
    assert!(casual.starts_with("Hej"));
}

#[test]
fn test_unknown_style_key_returns_fallback() {
    assert_eq!(build_message("fancy", &ania()), CHOOSE_TEMPLATE_FALLBACK);
    assert_eq!(build_message("OFFICIAL", &ania()), CHOOSE_TEMPLATE_FALLBACK);
}

#[test]
fn test_prices_format_as_whole_or_two_decimal() {
    let mut ctx = ania();
    ctx.new_price = 172.5;
    let message = build_message("casual", &ctx);
    assert!(message.contains("172.50 zł"));
    assert!(message.contains("150 zł"));
}

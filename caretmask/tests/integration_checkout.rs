//! Checkout-flow scenarios: a host text field driving `MaskedField`.
//!
//! The `Host` harness mimics what a UI text field does on every keystroke:
//! mutate its own text at the caret, call `apply`, and atomically re-set both
//! text and caret from the outcome.

use caretmask::{MaskPolicy, Masked, MaskedField, MaskedRecord};

struct Host {
    field: MaskedField,
    text: String,
    cursor: usize,
}

impl Host {
    fn new(policy: MaskPolicy) -> Self {
        Self {
            field: MaskedField::new(policy),
            text: String::new(),
            cursor: 0,
        }
    }

    fn type_char(&mut self, ch: char) {
        self.text.insert(self.cursor, ch);
        self.cursor += 1;
        self.refresh();
    }

    fn type_str(&mut self, text: &str) {
        for ch in text.chars() {
            self.type_char(ch);
        }
    }

    fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.text.remove(self.cursor - 1);
        self.cursor -= 1;
        self.refresh();
    }

    fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor.min(self.text.len());
    }

    fn refresh(&mut self) {
        let outcome = self.field.apply(&self.text, self.cursor);
        self.text = outcome.display;
        self.cursor = outcome.cursor;
    }
}

#[test]
fn test_typing_a_full_card_number() {
    let mut host = Host::new(MaskPolicy::card_number());
    host.type_str("4111111111111111");
    assert_eq!(host.text, "4111 1111 1111 1111");
    assert_eq!(host.cursor, 19);
    assert_eq!(host.field.raw(), "4111111111111111");
}

#[test]
fn test_extra_digits_beyond_the_cap_change_nothing() {
    let mut host = Host::new(MaskPolicy::card_number());
    host.type_str("41111111111111112222");
    assert_eq!(host.text, "4111 1111 1111 1111");
    assert_eq!(host.field.raw(), "4111111111111111");
}

#[test]
fn test_backspacing_a_digit_drops_its_separator() {
    let mut host = Host::new(MaskPolicy::card_number());
    host.type_str("41111");
    assert_eq!(host.text, "4111 1");
    assert_eq!(host.cursor, 6);

    host.backspace();
    assert_eq!(host.text, "4111");
    assert_eq!(host.cursor, 4);
    assert_eq!(host.field.raw(), "4111");
}

#[test]
fn test_backspacing_over_a_separator_keeps_the_value() {
    let mut host = Host::new(MaskPolicy::card_number());
    host.type_str("41111");
    assert_eq!(host.text, "4111 1");

    // Caret right after the space; backspace deletes only the separator,
    // which the reformat restores.
    host.set_cursor(5);
    host.backspace();
    assert_eq!(host.text, "4111 1");
    assert_eq!(host.cursor, 5);
    assert_eq!(host.field.raw(), "41111");
}

#[test]
fn test_inserting_a_digit_mid_card() {
    let mut host = Host::new(MaskPolicy::card_number());
    host.type_str("41111111");
    assert_eq!(host.text, "4111 1111");

    host.set_cursor(3);
    host.type_char('9');
    assert_eq!(host.text, "4119 1111 1");
    // Caret stays anchored after the typed digit, past the regrouped space.
    assert_eq!(host.cursor, 5);
    assert_eq!(host.field.raw(), "411911111");
}

#[test]
fn test_typing_and_correcting_an_expiry() {
    let mut host = Host::new(MaskPolicy::expiry_date());
    host.type_str("1225");
    assert_eq!(host.text, "12/25");
    assert_eq!(host.cursor, 5);

    host.backspace();
    assert_eq!(host.text, "12/2");
    assert_eq!(host.cursor, 4);

    host.backspace();
    assert_eq!(host.text, "12");
    assert_eq!(host.cursor, 2);
    assert_eq!(host.field.raw(), "12");
}

#[test]
fn test_typing_an_identifier_with_hyphen() {
    let mut host = Host::new(MaskPolicy::identifier());
    host.type_str("12345678");
    assert_eq!(host.text, "12.345.678");
    assert_eq!(host.cursor, 10);

    host.type_char('-');
    assert_eq!(host.text, "12.345.678-");
    assert_eq!(host.cursor, 11);

    host.type_char('5');
    assert_eq!(host.text, "12.345.678-5");
    assert_eq!(host.cursor, 12);
    assert_eq!(host.field.raw(), "12345678-5");
}

#[test]
fn test_typing_an_identifier_with_lowercase_k() {
    let mut host = Host::new(MaskPolicy::identifier());
    host.type_str("9876k");
    assert_eq!(host.text, "9.876-K");
    assert_eq!(host.cursor, 7);
    assert_eq!(host.field.raw(), "9876K");
}

#[test]
fn test_identifier_regroups_as_digits_arrive() {
    let mut host = Host::new(MaskPolicy::identifier());
    let expected = [
        ('1', "1"),
        ('2', "12"),
        ('3', "123"),
        ('4', "1.234"),
        ('5', "12.345"),
        ('6', "123.456"),
        ('7', "1.234.567"),
    ];
    for (ch, display) in expected {
        host.type_char(ch);
        assert_eq!(host.text, display);
        assert_eq!(host.cursor, display.len());
    }
}

#[test]
fn test_deleting_the_check_character_keeps_the_typed_hyphen() {
    let mut host = Host::new(MaskPolicy::identifier());
    host.type_str("12345678-5");
    host.backspace();
    assert_eq!(host.text, "12.345.678-");
    assert_eq!(host.cursor, 11);
    // The hyphen keystroke is still a raw fact.
    assert_eq!(host.field.raw(), "12345678-");
}

#[test]
fn test_editing_a_saved_card() {
    let mut field = MaskedField::with_value(MaskPolicy::card_number(), "4111111111111111");
    assert_eq!(field.display(), "4111 1111 1111 1111");

    // The user deletes the last display character.
    let outcome = field.apply("4111 1111 1111 111", 18);
    assert_eq!(outcome.display, "4111 1111 1111 111");
    assert_eq!(outcome.cursor, 18);
    assert_eq!(field.raw(), "411111111111111");
}

#[derive(Masked)]
struct CheckoutForm {
    #[masked(card_number)]
    card: String,
    #[masked(expiry_date)]
    expiry: String,
    #[masked(identifier)]
    tax_id: Option<String>,
    email: String,
}

#[test]
fn test_checkout_form_renders_for_review() {
    let form = CheckoutForm {
        card: "4111111111111111".to_string(),
        expiry: "1225".to_string(),
        tax_id: Some("12345678-5".to_string()),
        email: "r.vargas@example.com".to_string(),
    };
    let rendered = form.rendered_fields();
    let summary: Vec<(&str, &str)> = rendered
        .iter()
        .map(|field| (field.name, field.display.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("card", "4111 1111 1111 1111"),
            ("expiry", "12/25"),
            ("tax_id", "12.345.678-5"),
        ]
    );
}

#[test]
fn test_checkout_form_with_missing_optional_field() {
    let form = CheckoutForm {
        card: "41111111".to_string(),
        expiry: String::new(),
        tax_id: None,
        email: String::new(),
    };
    let rendered = form.rendered_fields();
    assert_eq!(rendered[0].display, "4111 1111");
    assert_eq!(rendered[1].display, "");
    assert_eq!(rendered[2].display, "");
}

#[derive(Masked)]
struct Wrapped<T> {
    #[masked(card_number)]
    value: T,
}

#[test]
fn test_derive_supports_generic_field_types() {
    let wrapped = Wrapped {
        value: "41111111".to_string(),
    };
    assert_eq!(wrapped.rendered_fields()[0].display, "4111 1111");
}

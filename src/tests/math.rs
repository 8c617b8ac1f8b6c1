use super::MaskedMath;

#[test]
fn test_mask_then_restore_is_identity() {
    let text = "a $x_i$ b $$\\sum_k k$$ c \\[y\\] d \\(z\\)";
    let masked = MaskedMath::mask(text);

    assert_eq!(masked.len(), 4);
    assert!(!masked.text().contains('$'));
    assert!(!masked.text().contains('\\'));
    assert_eq!(masked.restore(masked.text()), text);
}

#[test]
fn test_restore_after_transformation() {
    let masked = MaskedMath::mask("*$a*b$*");
    let inner = masked.text().trim_matches('*');
    let transformed = format!("<em>{inner}</em>");

    assert_eq!(masked.restore(&transformed), "<em>$a*b$</em>");
}

#[test]
fn test_display_math_spans_blank_lines() {
    let text = "$$\na\n\nb\n$$";
    let masked = MaskedMath::mask(text);

    assert_eq!(masked.len(), 1);
    assert!(!masked.text().contains('\n'));
    assert_eq!(masked.restore(masked.text()), text);
}

#[test]
fn test_escaped_dollars_are_held_back() {
    let text = "\\$5 and \\$6";
    let masked = MaskedMath::mask(text);

    assert_eq!(masked.len(), 2);
    assert!(!masked.text().contains("5 and $"));
    assert_eq!(masked.restore(masked.text()), text);
}

#[test]
fn test_no_math() {
    let masked = MaskedMath::mask("plain *text* with a lone $ sign");

    assert!(masked.is_empty());
    assert_eq!(masked.text(), "plain *text* with a lone $ sign");
}

#[test]
fn test_inline_math_does_not_cross_lines() {
    let masked = MaskedMath::mask("$x\ny$");
    assert!(masked.is_empty());
}

#[test]
fn test_private_use_text_is_left_alone() {
    let text = "odd \u{E000}0\u{E001} $x$";
    let masked = MaskedMath::mask(text);

    assert!(masked.is_empty());
    assert_eq!(masked.text(), text);
    assert_eq!(masked.restore(text), text);
}

#[test]
fn test_code_span_is_not_masked() {
    let masked = MaskedMath::mask("`a $b` $c$");

    assert_eq!(masked.len(), 1);
    assert!(masked.text().starts_with("`a $b` "));
    assert_eq!(masked.restore(masked.text()), "`a $b` $c$");
}

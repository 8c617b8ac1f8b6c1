use super::Config;

#[test]
fn test_defaults() {
    let cfg = Config::default();

    assert_eq!(cfg.default_title, "Lecture Notes");
    assert_eq!(cfg.stylesheet, "style.css");
    assert_eq!(cfg.eval_button_text, "Run");
    assert_eq!(cfg.back_link_href, "lecture-notes.html");
    assert_eq!(cfg.back_link_text, "← Back to Lecture Notes");
    assert!(cfg.preserve_math);
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let cfg = Config::parse("default_title = \"Algebra\"\npreserve_math = false\n").unwrap();

    assert_eq!(cfg.default_title, "Algebra");
    assert!(!cfg.preserve_math);
    assert_eq!(cfg.stylesheet, "style.css");
}

#[test]
fn test_broken_file_is_rejected() {
    assert!(Config::parse("default_title = [unterminated").is_none());
}

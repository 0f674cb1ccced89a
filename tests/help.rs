//! Automatic help handling: listing content, the post-help callback, and
//! the continue-after-help behavior.

use std::cell::Cell;
use std::rc::Rc;

use argreg::{ArgParser, ErrorKind};

#[test]
fn help_invokes_post_help_callback_and_parse_still_succeeds() {
    let called = Rc::new(Cell::new(false));
    let sink = Rc::clone(&called);

    let mut parser = ArgParser::with_post_help(move || sink.set(true));
    parser
        .register_flag(&["-b", "--bool"], "A bool", false, false)
        .unwrap();

    parser.parse(["prog", "--help"]).expect("parse failed");
    assert!(called.get());
}

#[test]
fn help_does_not_stop_the_scan() {
    let mut parser = ArgParser::with_post_help(|| {});
    parser
        .register_flag(&["-b", "--bool"], "A bool", false, false)
        .unwrap();

    parser
        .parse(["prog", "-h", "--bool", "trailing"])
        .expect("parse failed");

    assert_eq!(parser.get::<bool>("--bool"), Some(true));
    assert_eq!(parser.unmatched(), &["trailing".to_string()]);
}

#[test]
fn required_check_still_fires_after_help() {
    let called = Rc::new(Cell::new(false));
    let sink = Rc::clone(&called);

    let mut parser = ArgParser::with_post_help(move || sink.set(true));
    parser
        .register_option(&["-b", "--bool"], "A bool", false, true)
        .unwrap();

    let err = parser.parse(["prog", "--help"]).unwrap_err();
    assert!(called.get());
    assert_eq!(err.kind, ErrorKind::MissingRequiredArgument);
    assert_eq!(err.context, "-b --bool");
}

#[test]
fn disabled_auto_help_leaves_help_tokens_to_the_caller() {
    let called = Rc::new(Cell::new(false));
    let sink = Rc::clone(&called);

    let mut parser = ArgParser::with_post_help(move || sink.set(true));
    parser.set_auto_help(false);

    parser.parse(["prog", "--help"]).expect("parse failed");
    assert!(!called.get());
    assert_eq!(parser.unmatched(), &["--help".to_string()]);
}

#[test]
fn rendered_listing_covers_every_definition() {
    let mut parser = ArgParser::new();
    parser
        .register_flag(&["-v", "--verbose"], "Verbose output", false, false)
        .unwrap();
    parser
        .register_option(&["-o", "--output"], "Output file", "out.txt", true)
        .unwrap();

    let text = parser.render_help();
    assert!(text.contains("-v --verbose"));
    assert!(text.contains("Verbose output"));
    assert!(text.contains("[default: false]"));
    assert!(text.contains("<optional>"));
    assert!(text.contains("-o --output"));
    assert!(text.contains("[default: out.txt]"));
    assert!(text.contains("<required>"));
}

//! Error handling as seen from the binary crate.

use pokereport::Error;

#[test]
fn test_remote_errors_are_classified() {
    let errors = vec![
        (
            Error::CreatureNotFound {
                name: "missingno".to_string(),
            },
            true,
        ),
        (
            Error::Api {
                service: "pokeapi",
                status: 500,
                message: "boom".to_string(),
            },
            true,
        ),
        (Error::EmptyTranslation, true),
        (Error::render("exit status 1"), false),
        (Error::config("bad"), false),
        (Error::validation("bad"), false),
        (Error::Io(std::io::Error::other("disk")), false),
    ];

    for (err, expected_remote) in errors {
        assert_eq!(
            err.is_remote(),
            expected_remote,
            "Error {:?} remote classification mismatch",
            err
        );
    }
}

#[test]
fn test_errors_convert_into_anyhow_with_chain() {
    let io = std::io::Error::other("spawn failed");
    let err = Error::render_with_source("could not run wkhtmltopdf", io);
    let any: anyhow::Error = err.into();

    let chain: Vec<String> = any.chain().map(|e| e.to_string()).collect();
    assert_eq!(chain.len(), 2);
    assert!(chain[0].contains("could not run wkhtmltopdf"));
    assert_eq!(chain[1], "spawn failed");
}

#[test]
fn test_empty_translation_display() {
    assert_eq!(
        Error::EmptyTranslation.to_string(),
        "Translation response contained no translations"
    );
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();
    assert!(err.to_string().contains("file not found"));
    assert!(!err.is_remote());
}

#[test]
fn test_validation_error_debug_formatting() {
    let err = Error::validation_field("report.creature", "must not be empty");
    let debug_str = format!("{:?}", err);
    assert!(debug_str.contains("Validation"));
    assert!(debug_str.contains("report.creature"));
}

// crates/shared-kernel/tests/error_context.rs
use shell_wc_shared_kernel::{DomainError, ErrorContext, ShellWcError};

fn invalid_option() -> Result<(), DomainError> {
    Err(DomainError::InvalidOption { option: "z".into() })
}

#[test]
fn context_wraps_and_keeps_the_source() {
    let err = invalid_option().context("parsing argv").unwrap_err();
    assert!(err.to_string().starts_with("parsing argv: "));
    assert!(matches!(err, ShellWcError::Context { .. }));
}

#[test]
fn with_context_builds_the_message_lazily() {
    let ok: Result<u8, DomainError> = Ok(1);
    let value = ok.with_context(|| unreachable!("closure must not run on Ok")).unwrap();
    assert_eq!(value, 1);
}

#[test]
fn with_context_formats_on_error() {
    let err = invalid_option().with_context(|| format!("run {}", 9)).unwrap_err();
    assert!(err.to_string().starts_with("run 9: "));
}

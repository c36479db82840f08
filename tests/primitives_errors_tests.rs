//! Tests for the crate error type.

use bagfit_rs::prelude::*;

#[test]
fn test_fit_error_display() {
    let err = FitError::SingularSystem { size: 3 };
    assert_eq!(
        format!("{}", err),
        "Singular system: 3x3 normal equations have no unique solution"
    );

    let err = FitError::DuplicateParameter { parameter: "seed" };
    assert_eq!(
        format!("{}", err),
        "Parameter 'seed' was set multiple times. Each parameter can only be configured once."
    );
}

#[test]
fn test_fit_error_properties() {
    let err1 = FitError::SingularSystem { size: 2 };
    let err2 = err1.clone();
    assert_eq!(err1, err2);
    assert_ne!(err1, FitError::DuplicateParameter { parameter: "mode" });
}

#[cfg(feature = "std")]
#[test]
fn test_fit_error_is_std_error() {
    fn assert_error<T: std::error::Error>() {}
    assert_error::<FitError>();
}

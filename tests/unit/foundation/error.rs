use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        IconforgeError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        IconforgeError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        IconforgeError::encode("x")
            .to_string()
            .contains("encode error:")
    );
    assert!(
        IconforgeError::invariant("x")
            .to_string()
            .contains("container invariant violation:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = IconforgeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

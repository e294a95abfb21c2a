use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SchemeError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        SchemeError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    let io = SchemeError::from(std::io::Error::other("disk"));
    assert!(io.to_string().starts_with("io error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SchemeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        MaskVisError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(MaskVisError::mask("x").to_string().contains("mask error:"));
    assert!(
        MaskVisError::encode("x")
            .to_string()
            .contains("encode error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = MaskVisError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

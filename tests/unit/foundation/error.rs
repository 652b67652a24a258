use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CardError::surface("x")
            .to_string()
            .contains("surface unavailable:")
    );
    assert!(
        CardError::compositing("x")
            .to_string()
            .contains("compositing error:")
    );
    assert!(CardError::layout("x").to_string().contains("layout error:"));
    assert!(CardError::frame("x").to_string().contains("frame error:"));
    assert!(CardError::encode("x").to_string().contains("encode error:"));
    assert!(
        CardError::validation("x")
            .to_string()
            .contains("validation error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CardError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

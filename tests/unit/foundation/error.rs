use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SigpasteError::decode("x")
            .to_string()
            .contains("decode error:")
    );
    assert!(
        SigpasteError::encode("x")
            .to_string()
            .contains("encode error:")
    );
    assert!(
        SigpasteError::invalid_input("x")
            .to_string()
            .contains("invalid input:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SigpasteError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn anyhow_converts_into_other() {
    fn fails() -> SigpasteResult<()> {
        Err(anyhow::anyhow!("disk on fire"))?;
        Ok(())
    }
    let err = fails().unwrap_err();
    assert!(matches!(err, SigpasteError::Other(_)));
    assert_eq!(err.to_string(), "disk on fire");
}

//! Screening and decoding of external-image filename requests.

use percent_encoding::percent_decode_str;

use crate::error::ServeError;

/// Validate and decode a raw (still percent-encoded) image filename segment.
///
/// The literal screen runs before decoding, then the same rules are applied
/// again to the decoded form so encoded traversal sequences (`%2e%2e%2f`)
/// cannot slip through.
pub fn decode_image_name(raw: &str) -> Result<String, ServeError> {
    screen(raw)?;
    let decoded = percent_decode_str(raw)
        .decode_utf8()
        .map_err(|_| ServeError::InvalidFilename)?
        .into_owned();
    screen(&decoded)?;
    Ok(decoded)
}

fn screen(name: &str) -> Result<(), ServeError> {
    if name.is_empty()
        || name.contains("..")
        || name.starts_with('/')
        || name.starts_with('\\')
    {
        return Err(ServeError::InvalidFilename);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_filenames_decode_unchanged() {
        assert_eq!(decode_image_name("dragon.png").expect("decode"), "dragon.png");
    }

    #[test]
    fn percent_encoded_spaces_are_decoded() {
        assert_eq!(
            decode_image_name("fire%20drake.png").expect("decode"),
            "fire drake.png"
        );
    }

    #[test]
    fn literal_traversal_is_rejected_before_decoding() {
        for raw in ["../secret", "..%2F..%2Fsecret", "/etc/passwd", "\\share"] {
            assert!(matches!(
                decode_image_name(raw),
                Err(ServeError::InvalidFilename)
            ));
        }
    }

    #[test]
    fn encoded_traversal_is_rejected_after_decoding() {
        // No literal `..` in the raw form; only the decoded screen catches it.
        for raw in ["%2e%2e%2fsecret", "%2e%2e/secret", "%2fetc%2fpasswd"] {
            assert!(matches!(
                decode_image_name(raw),
                Err(ServeError::InvalidFilename)
            ));
        }
    }

    #[test]
    fn empty_names_are_rejected() {
        assert!(matches!(
            decode_image_name(""),
            Err(ServeError::InvalidFilename)
        ));
    }
}

// src/utils/html.rs

use url::Url;

/// Clean HTML content using the ammonia library.
///
/// Whitelist-based: safe tags (like <b>, <p>) are kept, <script>/<iframe> and
/// event-handler attributes are stripped. Applied to free-text descriptions
/// before they are stored.
pub fn clean_html(input: &str) -> String {
    ammonia::clean(input)
}

/// Validates a picture reference: an absolute URL, including `data:` URLs.
pub fn validate_picture(picture: &str) -> Result<(), validator::ValidationError> {
    if picture.len() > 2_000_000 {
        return Err(validator::ValidationError::new("picture_too_large"));
    }
    if Url::parse(picture).is_err() {
        return Err(validator::ValidationError::new("invalid_url"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_script_tags() {
        let cleaned = clean_html("Intro to Rust<script>alert(1)</script>");
        assert_eq!(cleaned, "Intro to Rust");
    }

    #[test]
    fn plain_text_is_untouched() {
        assert_eq!(clean_html("Basics of ownership"), "Basics of ownership");
    }

    #[test]
    fn picture_must_be_a_url() {
        assert!(validate_picture("https://cdn.example.com/q.png").is_ok());
        assert!(validate_picture("data:image/png;base64,iVBORw0KGgo=").is_ok());
        assert!(validate_picture("not a url").is_err());
    }
}

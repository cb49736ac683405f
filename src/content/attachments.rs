//! Inline-attachment parser
//!
//! Free-text content fields carry embedded attachments as a markdown subset:
//! `![alt](url)` image tokens, `[파일](url)` file tokens, and bare image URLs.
//! Parsing extracts the URLs and yields the cleaned display text; composing
//! reinserts image tokens ahead of the text for saving.

use std::sync::LazyLock;

use regex::Regex;

use crate::utils::errors::{LabdeskError, Result};

static IMAGE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[[^\]]*\]\((.*?)\)").expect("image token pattern"));

static FILE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[파일\]\(([^)]+)\)").expect("file token pattern"));

static BARE_IMAGE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)https?://[^\s)]+\.(?:png|jpg|jpeg|gif|webp)").expect("bare image url pattern")
});

static BLANK_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").expect("blank run pattern"));

/// Result of parsing a content blob
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedContent {
    /// Image URLs in order of appearance
    pub images: Vec<String>,
    /// File URLs in order of appearance
    pub files: Vec<String>,
    /// The blob with all recognized tokens removed, trimmed
    pub text: String,
}

/// Extract inline attachments from a content blob.
///
/// Three substitution passes run in order: image tokens, file tokens, bare
/// image URLs. Each pass removes what it captured, so a URL consumed by the
/// image-token pass can never be re-captured by the bare-URL pass.
pub fn parse(content: &str) -> ParsedContent {
    let mut images = Vec::new();
    let mut files = Vec::new();

    let text = IMAGE_TOKEN.replace_all(content, |caps: &regex::Captures<'_>| {
        images.push(caps[1].to_string());
        ""
    });
    let text = FILE_TOKEN.replace_all(&text, |caps: &regex::Captures<'_>| {
        files.push(caps[1].to_string());
        ""
    });
    let text = BARE_IMAGE_URL.replace_all(&text, |caps: &regex::Captures<'_>| {
        images.push(caps[0].to_string());
        ""
    });

    ParsedContent {
        images,
        files,
        text: text.trim().to_string(),
    }
}

/// Reinsert images as markdown tokens ahead of the free text.
pub fn compose(images: &[String], text: &str) -> String {
    let image_block = images
        .iter()
        .map(|url| format!("![image]({})", url))
        .collect::<Vec<_>>()
        .join("\n");

    if image_block.is_empty() {
        text.to_string()
    } else if text.is_empty() {
        image_block
    } else {
        format!("{}\n{}", image_block, text)
    }
}

/// Append a freshly uploaded image token to a content blob.
pub fn append_image(content: &str, url: &str) -> String {
    if content.is_empty() {
        format!("![image]({})", url)
    } else {
        format!("{}\n![image]({})", content, url)
    }
}

/// Append a freshly uploaded file token to a content blob.
pub fn append_file(content: &str, url: &str) -> String {
    if content.is_empty() {
        format!("[파일]({})", url)
    } else {
        format!("{}\n[파일]({})", content, url)
    }
}

/// Remove every image token referencing `url` from the blob.
///
/// The URL is escaped before being embedded in the removal pattern; URLs
/// routinely contain `(`, `.` or `+`, and an unescaped one would corrupt
/// unrelated tokens.
pub fn remove_image(content: &str, url: &str) -> Result<String> {
    let pattern = format!(r"!\[[^\]]*\]\({}\)", regex::escape(url));
    let re = Regex::new(&pattern)
        .map_err(|e| LabdeskError::InvalidInput(format!("Bad removal pattern: {}", e)))?;
    Ok(collapse(&re.replace_all(content, "")))
}

/// Remove every file token referencing `url` from the blob.
///
/// Plain substring removal; the token is matched literally so the URL needs
/// no escaping at all.
pub fn remove_file(content: &str, url: &str) -> String {
    let token = format!("[파일]({})", url);
    if content.contains(&token) {
        collapse(&content.split(&token).collect::<Vec<_>>().join(""))
    } else {
        content.to_string()
    }
}

/// Squeeze blank-line runs left behind by token removal and trim.
pub fn collapse(content: &str) -> String {
    BLANK_RUN.replace_all(content, "\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_image_token() {
        let parsed = parse("before ![x](http://a/b.png) after");
        assert_eq!(parsed.images, vec!["http://a/b.png"]);
        assert!(parsed.files.is_empty());
        assert_eq!(parsed.text, "before  after");
    }

    #[test]
    fn test_parse_file_token() {
        let parsed = parse("자료 [파일](http://a/1700-notes.pdf) 첨부");
        assert_eq!(parsed.files, vec!["http://a/1700-notes.pdf"]);
        assert_eq!(parsed.text, "자료  첨부");
    }

    #[test]
    fn test_parse_bare_image_url() {
        let parsed = parse("see http://a/photo.JPEG here");
        assert_eq!(parsed.images, vec!["http://a/photo.JPEG"]);
        assert_eq!(parsed.text, "see  here");
    }

    #[test]
    fn test_parse_preserves_order() {
        let parsed = parse("![a](http://h/1.png)\n[파일](http://h/f.zip)\n![b](http://h/2.png)\nbody");
        assert_eq!(parsed.images, vec!["http://h/1.png", "http://h/2.png"]);
        assert_eq!(parsed.files, vec!["http://h/f.zip"]);
        assert_eq!(parsed.text, "body");
    }

    #[test]
    fn test_markdown_captured_url_is_not_double_counted() {
        // The image-token pass removes the whole token, so the bare-URL pass
        // never sees the same URL again.
        let parsed = parse("![x](http://a/b.png)");
        assert_eq!(parsed.images.len(), 1);
    }

    #[test]
    fn test_compose_round_trip() {
        let original = "![a](http://h/1.png)\nintro text\n![b](http://h/2.png)";
        let parsed = parse(original);
        let reconstructed = compose(&parsed.images, &parsed.text);
        let reparsed = parse(&reconstructed);
        assert_eq!(reparsed.images, parsed.images);
        assert_eq!(reparsed.text, parsed.text);
    }

    #[test]
    fn test_remove_image_escapes_metacharacters() {
        // URL with parens and dots must only remove its own token
        let url = "http://h/img(1).png";
        let content = format!("![a]({})\n![b](http://h/other.png)\nbody", url);
        let result = remove_image(&content, url).unwrap();
        assert!(!result.contains("img(1).png"));
        assert!(result.contains("![b](http://h/other.png)"));
        assert!(result.contains("body"));
    }

    #[test]
    fn test_remove_image_with_plus_and_dollar() {
        let url = "http://h/a+b$c.png";
        let content = format!("keep ![x]({}) this", url);
        let result = remove_image(&content, url).unwrap();
        assert_eq!(result, "keep  this");
    }

    #[test]
    fn test_remove_file_is_literal() {
        let url = "http://h/report(final).pdf";
        let content = format!("[파일]({})\n[파일](http://h/other.pdf)\ntext", url);
        let result = remove_file(&content, url);
        assert!(!result.contains("final"));
        assert!(result.contains("http://h/other.pdf"));
    }

    #[test]
    fn test_remove_file_absent_url_is_noop() {
        let content = "[파일](http://h/a.pdf)";
        assert_eq!(remove_file(content, "http://h/missing.pdf"), content);
    }

    #[test]
    fn test_collapse_squeezes_blank_runs() {
        assert_eq!(collapse("a\n\n\nb\n"), "a\nb");
    }

    #[test]
    fn test_append_helpers() {
        assert_eq!(append_image("", "http://h/p.png"), "![image](http://h/p.png)");
        assert_eq!(append_file("body", "http://h/f.pdf"), "body\n[파일](http://h/f.pdf)");
    }
}

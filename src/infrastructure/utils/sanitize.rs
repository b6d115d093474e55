use ammonia::{Builder, UrlRelative};

/// Strips scripts, event handlers and unsafe URLs from editor-produced HTML.
pub fn sanitize_rich_text(content: &str) -> String {
    Builder::default()
        .link_rel(Some("nofollow noopener noreferrer"))
        .url_relative(UrlRelative::PassThrough)
        .clean(content)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_script_tags() {
        let cleaned = sanitize_rich_text("<p>Policy</p><script>alert('x')</script>");
        assert_eq!(cleaned, "<p>Policy</p>");
    }

    #[test]
    fn removes_inline_handlers_and_javascript_links() {
        let cleaned = sanitize_rich_text(
            r#"<a href="javascript:alert(1)" onclick="steal()">click</a><img src="x.png" onerror="boom()">"#,
        );
        assert!(!cleaned.contains("javascript:"));
        assert!(!cleaned.contains("onclick"));
        assert!(!cleaned.contains("onerror"));
    }

    #[test]
    fn keeps_ordinary_formatting() {
        let html = "<h2>Data</h2><ul><li><strong>We</strong> keep <em>little</em></li></ul>";
        assert_eq!(sanitize_rich_text(html), html);
    }
}

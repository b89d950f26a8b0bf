// This file is part of the product Star History.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use super::catalog::BlogFrontmatter;

pub const SITE_TITLE: &str = "GitHub Star History";
const SITE_DESCRIPTION: &str =
    "View and compare GitHub star history graph of open source projects.";
const SITE_IMAGE_URL: &str = "https://www.star-history.com/star-history.webp";
const TWITTER_SITE: &str = "star-history.com";
const TWITTER_CREATOR: &str = "bytebase";

/// Head metadata for one rendered page. Every field is always populated:
/// either the site default or an entry override. Entry-derived values are
/// HTML-escaped at resolve time, so the stored strings are markup-ready.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub image_url: String,
}

impl Default for PageMetadata {
    fn default() -> Self {
        Self {
            title: SITE_TITLE.to_string(),
            description: SITE_DESCRIPTION.to_string(),
            image_url: SITE_IMAGE_URL.to_string(),
        }
    }
}

impl PageMetadata {
    /// Site defaults overridden by whichever entry fields are non-empty.
    /// Pure: the same entry always resolves to the same metadata.
    pub fn resolve(instance_url: &str, entry: Option<&BlogFrontmatter>) -> Self {
        let mut metadata = Self::default();

        let Some(entry) = entry else {
            return metadata;
        };

        if !entry.title.is_empty() {
            metadata.title = escape_html(&format!("{} - {}", entry.title, SITE_TITLE));
        }
        if !entry.excerpt.is_empty() {
            metadata.description = escape_html(&entry.excerpt);
        }
        if !entry.feature_image.is_empty() {
            metadata.image_url = escape_html(&format!("{}{}", instance_url, entry.feature_image));
        }

        metadata
    }

    /// The head tag block substituted for the template's head marker. Tag
    /// order is fixed so rendered documents stay byte-stable across releases.
    pub fn render_head(&self) -> String {
        [
            format!("<title>{}</title>", self.title),
            format!(r#"<meta name="description" content="{}" />"#, self.description),
            format!(r#"<meta property="og:title" content="{}" />"#, self.title),
            format!(
                r#"<meta property="og:description" content="{}" />"#,
                self.description
            ),
            format!(r#"<meta property="og:image" content="{}" />"#, self.image_url),
            r#"<meta property="og:type" content="website" />"#.to_string(),
            format!(r#"<meta property="twitter:title" content="{}" />"#, self.title),
            format!(
                r#"<meta property="twitter:description" content="{}" />"#,
                self.description
            ),
            format!(
                r#"<meta property="twitter:image" content="{}" />"#,
                self.image_url
            ),
            r#"<meta name="twitter:card" content="summary_large_image" />"#.to_string(),
            format!(r#"<meta name="twitter:site" content="{}" />"#, TWITTER_SITE),
            format!(
                r#"<meta name="twitter:creator" content="{}" />"#,
                TWITTER_CREATOR
            ),
        ]
        .join("\n")
    }
}

/// Escapes text for use inside HTML tag bodies and double-quoted attributes.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    const INSTANCE_URL: &str = "https://starhistory.test";

    fn entry(slug: &str, title: &str, excerpt: &str, feature_image: &str) -> BlogFrontmatter {
        BlogFrontmatter {
            slug: slug.to_string(),
            title: title.to_string(),
            excerpt: excerpt.to_string(),
            feature_image: feature_image.to_string(),
        }
    }

    #[test]
    fn no_entry_resolves_to_the_site_default() {
        let metadata = PageMetadata::resolve(INSTANCE_URL, None);
        assert_eq!(metadata, PageMetadata::default());
    }

    #[test]
    fn entry_with_empty_fields_resolves_to_the_site_default() {
        let bare = entry("bare", "", "", "");
        let metadata = PageMetadata::resolve(INSTANCE_URL, Some(&bare));
        assert_eq!(metadata, PageMetadata::default());
    }

    #[test]
    fn non_empty_fields_override_the_default() {
        let post = entry(
            "post",
            "My Post",
            "A post about stars.",
            "/assets/blog/post.webp",
        );
        let metadata = PageMetadata::resolve(INSTANCE_URL, Some(&post));

        assert_eq!(metadata.title, "My Post - GitHub Star History");
        assert_eq!(metadata.description, "A post about stars.");
        assert_eq!(
            metadata.image_url,
            "https://starhistory.test/assets/blog/post.webp"
        );
    }

    #[test]
    fn partial_overrides_keep_the_remaining_defaults() {
        let post = entry("post", "Only Title", "", "");
        let metadata = PageMetadata::resolve(INSTANCE_URL, Some(&post));

        assert_eq!(metadata.title, "Only Title - GitHub Star History");
        assert_eq!(metadata.description, PageMetadata::default().description);
        assert_eq!(metadata.image_url, PageMetadata::default().image_url);
    }

    #[test]
    fn untrusted_entry_content_is_escaped() {
        let post = entry(
            "post",
            "<script>alert(1)</script>",
            r#"quote " and 'tick' & amp"#,
            "/a?b=1&c=2",
        );
        let metadata = PageMetadata::resolve(INSTANCE_URL, Some(&post));

        assert_eq!(
            metadata.title,
            "&lt;script&gt;alert(1)&lt;/script&gt; - GitHub Star History"
        );
        assert!(!metadata.title.contains('<'));
        assert_eq!(
            metadata.description,
            "quote &#34; and &#39;tick&#39; &amp; amp"
        );
        assert_eq!(metadata.image_url, "https://starhistory.test/a?b=1&amp;c=2");
    }

    #[test]
    fn resolve_is_deterministic() {
        let post = entry("post", "Stable", "Same output", "/img.webp");
        let first = PageMetadata::resolve(INSTANCE_URL, Some(&post));
        let second = PageMetadata::resolve(INSTANCE_URL, Some(&post));
        assert_eq!(first, second);
    }

    #[test]
    fn rendered_head_contains_exactly_one_title_tag() {
        let head = PageMetadata::default().render_head();
        assert_eq!(head.matches("<title>").count(), 1);
        assert!(head.starts_with("<title>GitHub Star History</title>"));
    }

    #[test]
    fn rendered_head_order_is_stable() {
        let head = PageMetadata::default().render_head();
        let lines: Vec<&str> = head.lines().collect();

        assert_eq!(lines.len(), 12);
        assert!(lines[1].starts_with(r#"<meta name="description""#));
        assert!(lines[2].starts_with(r#"<meta property="og:title""#));
        assert_eq!(lines[5], r#"<meta property="og:type" content="website" />"#);
        assert_eq!(
            lines[9],
            r#"<meta name="twitter:card" content="summary_large_image" />"#
        );
        assert_eq!(
            lines[10],
            r#"<meta name="twitter:site" content="star-history.com" />"#
        );
        assert_eq!(
            lines[11],
            r#"<meta name="twitter:creator" content="bytebase" />"#
        );
    }
}

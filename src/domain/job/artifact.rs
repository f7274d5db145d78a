//! Result artifact labeling and ordering
//!
//! A completed job reports its outputs as a map from artifact key to downloadable
//! filename. The key's trailing segment (after the last `_`) names the artifact
//! kind; leading segments are an opaque job-scoped prefix.

use std::collections::HashMap;

/// Known artifact kinds produced by a completed job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Blog,
    Transcript,
    Seo,
    Faq,
    Social,
    Newsletter,
    Quotes,
}

/// Presentation order for known kinds
const CANONICAL_ORDER: [ArtifactKind; 7] = [
    ArtifactKind::Blog,
    ArtifactKind::Transcript,
    ArtifactKind::Seo,
    ArtifactKind::Faq,
    ArtifactKind::Social,
    ArtifactKind::Newsletter,
    ArtifactKind::Quotes,
];

impl ArtifactKind {
    /// Parse a kind from an artifact key's trailing segment
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "blog" => Some(Self::Blog),
            "transcript" => Some(Self::Transcript),
            "seo" => Some(Self::Seo),
            "faq" => Some(Self::Faq),
            "social" => Some(Self::Social),
            "newsletter" => Some(Self::Newsletter),
            "quotes" => Some(Self::Quotes),
            _ => None,
        }
    }

    /// Get the human-readable display label
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Blog => "Blog Post",
            Self::Transcript => "Transcript",
            Self::Seo => "SEO Elements",
            Self::Faq => "FAQ Section",
            Self::Social => "Social Media Posts",
            Self::Newsletter => "Newsletter",
            Self::Quotes => "Quotes",
        }
    }

    /// Position in the presentation order
    fn rank(&self) -> usize {
        CANONICAL_ORDER
            .iter()
            .position(|kind| kind == self)
            .unwrap_or(CANONICAL_ORDER.len())
    }
}

/// One labeled, downloadable result entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub label: String,
    pub filename: String,
}

/// Extract the kind-naming segment from an artifact key.
/// A key without `_` is its own suffix.
fn kind_suffix(key: &str) -> &str {
    key.rsplit('_').next().unwrap_or(key)
}

/// Turn a completed job's artifact map into an ordered, labeled listing.
///
/// Known kinds use their display label and canonical order; unknown kinds fall
/// back to the raw suffix as the label and sort after all known kinds, ordered by
/// suffix then filename so the output is deterministic.
pub fn render(files: &HashMap<String, String>) -> Vec<DisplayItem> {
    let mut entries: Vec<(usize, &str, DisplayItem)> = files
        .iter()
        .map(|(key, filename)| {
            let suffix = kind_suffix(key);
            let (rank, label) = match ArtifactKind::from_suffix(suffix) {
                Some(kind) => (kind.rank(), kind.label().to_string()),
                None => (CANONICAL_ORDER.len(), suffix.to_string()),
            };
            (
                rank,
                suffix,
                DisplayItem {
                    label,
                    filename: filename.clone(),
                },
            )
        })
        .collect();

    entries.sort_by(|(rank_a, suffix_a, item_a), (rank_b, suffix_b, item_b)| {
        rank_a
            .cmp(rank_b)
            .then_with(|| suffix_a.cmp(suffix_b))
            .then_with(|| item_a.filename.cmp(&item_b.filename))
    });

    entries.into_iter().map(|(_, _, item)| item).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact_map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn labels_for_known_kinds() {
        assert_eq!(ArtifactKind::Transcript.label(), "Transcript");
        assert_eq!(ArtifactKind::Blog.label(), "Blog Post");
        assert_eq!(ArtifactKind::Seo.label(), "SEO Elements");
        assert_eq!(ArtifactKind::Faq.label(), "FAQ Section");
        assert_eq!(ArtifactKind::Social.label(), "Social Media Posts");
        assert_eq!(ArtifactKind::Newsletter.label(), "Newsletter");
        assert_eq!(ArtifactKind::Quotes.label(), "Quotes");
    }

    #[test]
    fn suffix_is_text_after_last_underscore() {
        assert_eq!(kind_suffix("abc_def_blog"), "blog");
        assert_eq!(kind_suffix("abc_transcript"), "transcript");
        assert_eq!(kind_suffix("transcript"), "transcript");
    }

    #[test]
    fn blog_orders_before_transcript() {
        let files = artifact_map(&[
            ("abc_transcript", "abc_transcript.txt"),
            ("abc_blog", "abc_blog.md"),
        ]);

        let items = render(&files);
        assert_eq!(
            items,
            vec![
                DisplayItem {
                    label: "Blog Post".to_string(),
                    filename: "abc_blog.md".to_string(),
                },
                DisplayItem {
                    label: "Transcript".to_string(),
                    filename: "abc_transcript.txt".to_string(),
                },
            ]
        );
    }

    #[test]
    fn full_canonical_order() {
        let files = artifact_map(&[
            ("j_quotes", "j_quotes.md"),
            ("j_newsletter", "j_newsletter.md"),
            ("j_social", "j_social.md"),
            ("j_faq", "j_faq.md"),
            ("j_seo", "j_seo.json"),
            ("j_transcript", "j_transcript.md"),
            ("j_blog", "j_blog.md"),
        ]);

        let rendered = render(&files);
        let labels: Vec<&str> = rendered.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Blog Post",
                "Transcript",
                "SEO Elements",
                "FAQ Section",
                "Social Media Posts",
                "Newsletter",
                "Quotes",
            ]
        );
    }

    #[test]
    fn unknown_kind_renders_with_raw_suffix() {
        let files = artifact_map(&[("abc_summary", "abc_summary.md")]);

        let items = render(&files);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].label, "summary");
        assert_eq!(items[0].filename, "abc_summary.md");
    }

    #[test]
    fn unknown_kinds_sort_after_known_kinds() {
        let files = artifact_map(&[
            ("abc_summary", "abc_summary.md"),
            ("abc_quotes", "abc_quotes.md"),
            ("abc_blog", "abc_blog.md"),
            ("abc_chapters", "abc_chapters.md"),
        ]);

        let rendered = render(&files);
        let labels: Vec<&str> = rendered.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["Blog Post", "Quotes", "chapters", "summary"]);
    }

    #[test]
    fn render_is_idempotent() {
        let files = artifact_map(&[
            ("abc_blog", "abc_blog.md"),
            ("abc_extra", "abc_extra.bin"),
            ("abc_faq", "abc_faq.md"),
        ]);

        assert_eq!(render(&files), render(&files));
    }

    #[test]
    fn empty_map_renders_empty() {
        assert!(render(&HashMap::new()).is_empty());
    }
}

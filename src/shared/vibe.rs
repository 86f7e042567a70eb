//! Comment-vibe heuristic
//!
//! A stateless fallback classifier for the overall "vibe" of a post's
//! comment thread, used when the backend did not attach its own labels.
//! Counts keyword hits per bucket and picks the dominant one; the word
//! lists and tie-breaking mirror what the backend reports.

use crate::shared::post::Comment;

/// A vibe label plus its display emoji
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vibe {
    pub label: String,
    pub emoji: String,
}

impl Vibe {
    pub fn new(label: impl Into<String>, emoji: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            emoji: emoji.into(),
        }
    }

    pub fn neutral() -> Self {
        Self::new("Neutral", "😐")
    }
}

const TOXIC_WORDS: &[&str] = &[
    "hate", "stupid", "idiot", "dumb", "trash", "garbage", "liar", "scam",
];
const CONSTRUCTIVE_WORDS: &[&str] = &[
    "agree", "consider", "suggest", "recommend", "improve", "feedback", "thanks",
];
const HUMOROUS_WORDS: &[&str] = &["lol", "lmao", "haha", "funny", "joke", "meme"];
const INFORMATIVE_WORDS: &[&str] = &[
    "source", "evidence", "data", "study", "report", "facts", "link",
];

fn bucket_hits(text: &str, words: &[&str]) -> usize {
    words.iter().filter(|w| text.contains(*w)).count()
}

/// Classify a comment thread. No comments is Neutral; a thread with no
/// keyword hits is Informative when any comment contains a digit, else
/// Constructive.
pub fn vibe_for_comments(comments: &[Comment]) -> Vibe {
    if comments.is_empty() {
        return Vibe::neutral();
    }

    let mut toxic = 0;
    let mut constructive = 0;
    let mut humorous = 0;
    let mut informative = 0;
    let mut has_number = false;

    for comment in comments {
        let text = comment.content.to_lowercase();
        if text.chars().any(|c| c.is_ascii_digit()) {
            has_number = true;
        }
        toxic += bucket_hits(&text, TOXIC_WORDS);
        constructive += bucket_hits(&text, CONSTRUCTIVE_WORDS);
        humorous += bucket_hits(&text, HUMOROUS_WORDS);
        informative += bucket_hits(&text, INFORMATIVE_WORDS);
    }

    // Bucket order doubles as the tie-break order.
    let buckets = [
        (toxic, ("Toxic", "⚠️")),
        (constructive, ("Constructive", "✅")),
        (humorous, ("Humorous", "😄")),
        (informative, ("Informative", "📚")),
    ];
    let mut top_count = 0;
    let mut top = ("", "");
    for (count, pair) in buckets {
        // strictly greater, so ties keep the earlier bucket
        if count > top_count {
            top_count = count;
            top = pair;
        }
    }

    if top_count == 0 {
        if has_number {
            return Vibe::new("Informative", "📚");
        }
        return Vibe::new("Constructive", "✅");
    }
    Vibe::new(top.0, top.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(content: &str) -> Comment {
        Comment {
            id: 1,
            content: content.to_string(),
            post_id: 1,
            author_id: 1,
            created_at: "2026-01-15T10:30:00+00:00".to_string(),
        }
    }

    #[test]
    fn test_no_comments_is_neutral() {
        assert_eq!(vibe_for_comments(&[]), Vibe::neutral());
    }

    #[test]
    fn test_toxic_thread() {
        let comments = vec![
            comment("this is stupid and dumb"),
            comment("what a scam, total garbage"),
        ];
        assert_eq!(vibe_for_comments(&comments).label, "Toxic");
    }

    #[test]
    fn test_humorous_thread() {
        let comments = vec![comment("lol that's funny"), comment("haha good meme")];
        assert_eq!(vibe_for_comments(&comments).label, "Humorous");
    }

    #[test]
    fn test_informative_thread() {
        let comments = vec![comment("here is the source and the data"), comment("a study")];
        assert_eq!(vibe_for_comments(&comments).label, "Informative");
    }

    #[test]
    fn test_tie_keeps_earlier_bucket() {
        // one toxic hit, one humorous hit: toxic is declared first
        let comments = vec![comment("hate this joke")];
        assert_eq!(vibe_for_comments(&comments).label, "Toxic");
    }

    #[test]
    fn test_no_hits_with_digits_is_informative() {
        let comments = vec![comment("see section 42")];
        assert_eq!(vibe_for_comments(&comments).label, "Informative");
    }

    #[test]
    fn test_no_hits_without_digits_is_constructive() {
        let comments = vec![comment("interesting read")];
        assert_eq!(vibe_for_comments(&comments).label, "Constructive");
    }

    #[test]
    fn test_keywords_are_case_insensitive() {
        let comments = vec![comment("I HATE this, the author is a LIAR")];
        assert_eq!(vibe_for_comments(&comments).label, "Toxic");
    }
}

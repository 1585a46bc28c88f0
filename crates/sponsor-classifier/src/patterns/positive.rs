/// Literal phrases that mean the employer offers sponsorship, in scan order.
pub static POSITIVE_KEYWORDS: &[&str] = &[
    "will sponsor",
    "can sponsor",
    "sponsors visa",
    "sponsors h1b",
    "sponsors h-1b",
    "h1b sponsorship available",
    "h-1b sponsorship available",
    "visa sponsorship available",
    "provides sponsorship",
    "offers sponsorship",
    "sponsorship provided",
    "able to sponsor",
    "willing to sponsor",
    "open to sponsoring",
    "supports visa sponsorship",
];

/// First keyword, in table order, contained in `text`.
pub fn first_keyword(text: &str) -> Option<&'static str> {
    POSITIVE_KEYWORDS.iter().copied().find(|kw| text.contains(kw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_are_lowercase() {
        for kw in POSITIVE_KEYWORDS {
            assert_eq!(*kw, kw.to_lowercase());
        }
    }

    #[test]
    fn table_order_decides_between_keywords() {
        // "able to sponsor" appears first in the text but later in the table.
        let text = "we are able to sponsor and will sponsor";
        assert_eq!(first_keyword(text), Some("will sponsor"));
    }

    #[test]
    fn no_keyword_in_plain_text() {
        assert_eq!(first_keyword("great benefits and a friendly team"), None);
    }
}

//! Evidence snippets: short, human-presentable quotations of matched text.
//!
//! Long matches (greedy `.*` patterns can span most of a description) are
//! replaced by a fixed label for their kind of restriction, or truncated.
//! The label rules are an ordered table evaluated top to bottom; the last
//! rule always applies.

use sponsor_core::constants::{
    ELLIPSIS, EVIDENCE_TRUNCATE_CHARS, EVIDENCE_VERBATIM_MAX_CHARS,
    STUDENT_EVIDENCE_MAX_CHARS, STUDENT_EVIDENCE_TRUNCATE_CHARS,
};

/// One shortening rule: if `applies`, `render` produces the snippet.
pub struct EvidenceRule {
    pub name: &'static str,
    pub applies: fn(&str) -> bool,
    pub render: fn(&str) -> String,
}

/// Shortening rules for matches longer than the verbatim limit, in priority
/// order.
pub static EVIDENCE_RULES: &[EvidenceRule] = &[
    EvidenceRule {
        name: "itar",
        applies: |s| s.contains("itar"),
        render: |_| "ITAR requirement".to_string(),
    },
    EvidenceRule {
        name: "citizens_only",
        applies: |s| s.contains("citizen") && s.contains("only"),
        render: |_| "US citizens only".to_string(),
    },
    EvidenceRule {
        name: "citizenship",
        applies: |s| s.contains("citizen"),
        render: |_| "US citizenship required".to_string(),
    },
    EvidenceRule {
        name: "negated_sponsorship",
        applies: |s| s.contains("sponsor") && (s.contains("not") || s.contains("no")),
        render: |_| "No visa sponsorship".to_string(),
    },
    EvidenceRule {
        name: "sponsorship",
        applies: |s| s.contains("sponsor"),
        render: |s| truncate_chars(s, EVIDENCE_TRUNCATE_CHARS),
    },
    EvidenceRule {
        name: "clearance",
        applies: |s| s.contains("clearance"),
        render: |_| "Security clearance required".to_string(),
    },
    EvidenceRule {
        name: "permanent_residency",
        applies: |s| s.contains("permanent"),
        render: |_| "Permanent resident required".to_string(),
    },
    EvidenceRule {
        name: "student_visa",
        applies: |s| s.contains("cpt") || s.contains("opt"),
        render: |s| {
            if s.chars().count() > STUDENT_EVIDENCE_MAX_CHARS {
                truncate_chars(s, STUDENT_EVIDENCE_TRUNCATE_CHARS)
            } else {
                s.to_string()
            }
        },
    },
    EvidenceRule {
        name: "generic",
        applies: |_| true,
        render: |s| truncate_chars(s, EVIDENCE_TRUNCATE_CHARS),
    },
];

/// Turn a matched substring into an evidence snippet.
///
/// Matches up to the verbatim limit come back unchanged (trimmed);
/// longer ones go through [`EVIDENCE_RULES`].
pub fn clean_evidence(matched: &str) -> String {
    let phrase = matched.trim();
    if phrase.chars().count() <= EVIDENCE_VERBATIM_MAX_CHARS {
        return phrase.to_string();
    }
    EVIDENCE_RULES
        .iter()
        .find(|rule| (rule.applies)(phrase))
        .map(|rule| (rule.render)(phrase))
        .unwrap_or_else(|| truncate_chars(phrase, EVIDENCE_TRUNCATE_CHARS))
}

/// First `keep` characters of `text` followed by `...`.
pub fn truncate_chars(text: &str, keep: usize) -> String {
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Cap a reason for display: longer than `limit` characters becomes the
/// first `limit - 3` characters plus `...`.
pub fn cap_reason(reason: &str, limit: usize) -> String {
    if reason.chars().count() > limit {
        truncate_chars(reason, limit.saturating_sub(ELLIPSIS.len()))
    } else {
        reason.to_string()
    }
}

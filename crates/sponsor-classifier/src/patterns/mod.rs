pub mod positive;
pub mod restrictive;
pub mod work_auth;

use regex::Regex;

/// A named regex rule in one of the static tables.
pub trait Rule: Sync + 'static {
    fn name(&self) -> &'static str;
    fn pattern(&self) -> &'static str;
}

/// A hit from [`RuleTable::first_match`].
#[derive(Debug, Clone, Copy)]
pub struct RuleMatch<'t, R: 'static> {
    pub rule: &'static R,
    /// The matched substring of the scanned text.
    pub matched: &'t str,
    /// Byte offsets of `matched` within the scanned text.
    pub start: usize,
    pub end: usize,
}

/// An ordered rule table with its regexes compiled once.
///
/// Table order is evaluation order. A rule whose regex fails to compile is
/// kept as `None` and simply never matches.
pub struct RuleTable<R: Rule> {
    label: &'static str,
    rules: &'static [R],
    compiled: Vec<Option<Regex>>,
}

impl<R: Rule> RuleTable<R> {
    pub fn compile(label: &'static str, rules: &'static [R]) -> Self {
        let compiled = rules.iter().map(|r| Regex::new(r.pattern()).ok()).collect();
        Self {
            label,
            rules,
            compiled,
        }
    }

    /// Table name used in logs and degradation records.
    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn rules(&self) -> &'static [R] {
        self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// First rule, in table order, that matches anywhere in `text`.
    pub fn first_match<'t>(&self, text: &'t str) -> Option<RuleMatch<'t, R>> {
        self.rules
            .iter()
            .zip(&self.compiled)
            .find_map(|(rule, regex)| {
                let m = regex.as_ref()?.find(text)?;
                Some(RuleMatch {
                    rule,
                    matched: m.as_str(),
                    start: m.start(),
                    end: m.end(),
                })
            })
    }

    /// Rules whose regex failed to compile.
    pub fn failed_rules(&self) -> impl Iterator<Item = &'static R> + '_ {
        self.rules
            .iter()
            .zip(&self.compiled)
            .filter(|(_, regex)| regex.is_none())
            .map(|(rule, _)| rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestRule(&'static str, &'static str);

    impl Rule for TestRule {
        fn name(&self) -> &'static str {
            self.0
        }
        fn pattern(&self) -> &'static str {
            self.1
        }
    }

    static RULES: &[TestRule] = &[
        TestRule("broken", r"(unclosed"),
        TestRule("late", r"sponsor"),
        TestRule("early", r"visa"),
    ];

    #[test]
    fn table_order_wins_over_text_position() {
        let table = RuleTable::compile("test", RULES);
        let hit = table.first_match("visa sponsor").unwrap();
        assert_eq!(hit.rule.name(), "late");
        assert_eq!(hit.matched, "sponsor");
        assert_eq!((hit.start, hit.end), (5, 12));
    }

    #[test]
    fn table_exposes_rules_in_order() {
        let table = RuleTable::compile("test", RULES);
        assert_eq!(table.label(), "test");
        assert_eq!(table.len(), 3);
        assert!(!table.is_empty());
        let names: Vec<_> = table.rules().iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["broken", "late", "early"]);

        let empty: RuleTable<TestRule> = RuleTable::compile("empty", &[]);
        assert!(empty.is_empty());
        assert!(empty.first_match("visa").is_none());
    }

    #[test]
    fn broken_rule_is_skipped_and_reported() {
        let table = RuleTable::compile("test", RULES);
        let failed: Vec<_> = table.failed_rules().map(|r| r.name()).collect();
        assert_eq!(failed, vec!["broken"]);
        assert!(table.first_match("(unclosed").is_none());
    }
}

//! Work-authorization phrases and the exclusions looked for around them.
//!
//! A bare "authorized to work" requirement is not restrictive on its own;
//! it only becomes one when an exclusion sits inside the context window.

use std::sync::LazyLock;

use super::{Rule, RuleTable};

/// An untagged named pattern.
#[derive(Debug)]
pub struct NamedPattern {
    pub name: &'static str,
    pub pattern: &'static str,
}

impl Rule for NamedPattern {
    fn name(&self) -> &'static str {
        self.name
    }

    fn pattern(&self) -> &'static str {
        self.pattern
    }
}

pub static AUTHORIZATION_PATTERNS: &[NamedPattern] = &[
    NamedPattern {
        name: "legally_authorized_to_work",
        pattern: r"legally authorized to work",
    },
    NamedPattern {
        name: "authorized_to_work_in_us",
        pattern: r"authorized to work.*us",
    },
    NamedPattern {
        name: "work_authorization_required",
        pattern: r"work authorization.*required",
    },
    NamedPattern {
        name: "must_be_authorized_to_work",
        pattern: r"must be authorized to work",
    },
    NamedPattern {
        name: "employment_authorization_required",
        pattern: r"employment authorization.*required",
    },
];

/// Checked only inside the window around an authorization match.
pub static EXCLUSION_PATTERNS: &[NamedPattern] = &[
    NamedPattern {
        name: "no_sponsorship",
        pattern: r"no.*sponsorship",
    },
    NamedPattern {
        name: "cannot_sponsor",
        pattern: r"cannot sponsor",
    },
    NamedPattern {
        name: "will_not_sponsor",
        pattern: r"will not sponsor",
    },
    NamedPattern {
        name: "cpt_not_eligible",
        pattern: r"cpt.*not.*eligible",
    },
    NamedPattern {
        name: "opt_not_eligible",
        pattern: r"opt.*not.*eligible",
    },
    NamedPattern {
        name: "f1_not_eligible",
        pattern: r"f-?1.*not.*eligible",
    },
    NamedPattern {
        name: "citizens_only",
        pattern: r"citizens?.*only",
    },
];

pub static AUTHORIZATION: LazyLock<RuleTable<NamedPattern>> =
    LazyLock::new(|| RuleTable::compile("work_authorization", AUTHORIZATION_PATTERNS));

pub static EXCLUSIONS: LazyLock<RuleTable<NamedPattern>> =
    LazyLock::new(|| RuleTable::compile("work_authorization_exclusion", EXCLUSION_PATTERNS));

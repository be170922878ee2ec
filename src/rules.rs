use anyhow::{Context, Result};
use regex::Regex;
use std::borrow::Cow;

/// A single textual substitution applied over the full file content.
///
/// Matching is purely textual: a pattern will also match inside comments or
/// string literals that happen to contain the same text. This mirrors the
/// historical extraction scripts and is a stated constraint of the tool.
#[derive(Debug, Clone)]
pub struct RewriteRule {
    pattern: Regex,
    replacement: String,
}

impl RewriteRule {
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        let pattern = Regex::new(pattern)
            .with_context(|| format!("invalid rewrite pattern: {}", pattern))?;
        Ok(Self {
            pattern,
            replacement: replacement.to_string(),
        })
    }

    pub fn apply<'a>(&self, content: &'a str) -> Cow<'a, str> {
        self.pattern.replace_all(content, self.replacement.as_str())
    }
}

/// Ordered list of rewrite rules.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<RewriteRule>,
}

impl RuleSet {
    pub fn new(rules: Vec<RewriteRule>) -> Self {
        Self { rules }
    }

    /// The two historical substitutions used during UI component extraction:
    /// - `@/lib/utils` -> `../../utils`
    /// - `@/components/ui/` -> `./` (prefix match, closing quote kept as-is)
    ///
    /// `@/hooks/` aliases are intentionally left alone; no rule touches them.
    pub fn default_rules() -> Self {
        let rules = vec![
            RewriteRule::new(r#"from "@/lib/utils""#, r#"from "../../utils""#)
                .expect("builtin pattern must compile"),
            RewriteRule::new(r#"from "@/components/ui/"#, r#"from "./"#)
                .expect("builtin pattern must compile"),
        ];
        Self { rules }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Apply all rules in order. Returns borrowed content when nothing matched.
    pub fn apply<'a>(&self, content: &'a str) -> Cow<'a, str> {
        let mut out = Cow::Borrowed(content);
        for rule in &self.rules {
            out = match out {
                Cow::Borrowed(s) => rule.apply(s),
                Cow::Owned(s) => Cow::Owned(rule.apply(&s).into_owned()),
            };
        }
        out
    }
}

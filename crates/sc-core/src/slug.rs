//! Comment identifier derivation
//!
//! A comment's slug is derived from its full file name (extension included),
//! so `hello.md` and `hello.txt` in the same thread stay distinct. Three slug
//! function shapes have existed over time; the one in use is resolved once
//! from [`SlugConfig`] and then applied to every comment.

use crate::config::{LegacySubstitution, SlugApi, SlugConfig};
use crate::error::{Result, StaticCommentsError};
use regex::{Regex, RegexBuilder};
use std::sync::OnceLock;
use tracing::debug;

/// Turns a raw file name into a comment identifier
pub trait Slugify {
    /// Compute the slug for a file name
    fn slugify(&self, name: &str) -> String;
}

impl<F> Slugify for F
where
    F: Fn(&str) -> String,
{
    fn slugify(&self, name: &str) -> String {
        self(name)
    }
}

/// A compiled `(pattern, replacement)` pair
///
/// Replacements use `$1` / `${name}` group references.
#[derive(Debug, Clone)]
pub struct Substitution {
    pattern: Regex,
    replacement: String,
}

impl Substitution {
    /// Compile a case-insensitive substitution
    pub fn new(pattern: &str, replacement: impl Into<String>) -> Result<Self> {
        let pattern = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| {
                StaticCommentsError::Config(format!("Invalid slug pattern '{}': {}", pattern, e))
            })?;

        Ok(Self {
            pattern,
            replacement: replacement.into(),
        })
    }

    fn apply(&self, value: &str) -> String {
        self.pattern
            .replace_all(value, self.replacement.as_str())
            .into_owned()
    }
}

/// Slug function selected at startup
#[derive(Debug, Clone)]
pub enum SlugStrategy {
    /// Regex substitutions, optional case and unicode preservation
    Modern {
        substitutions: Vec<Substitution>,
        preserve_case: bool,
        use_unicode: bool,
    },
    /// Regex substitutions, always lower-cased ASCII
    RegexOnly { substitutions: Vec<Substitution> },
    /// Literal replacements followed by the fixed cleanup
    Legacy { replacements: Vec<LegacySubstitution> },
}

impl SlugStrategy {
    /// Resolve the strategy described by the configuration
    pub fn from_config(config: &SlugConfig) -> Result<Self> {
        let api = match config.api {
            SlugApi::Auto => {
                if config.regex_substitutions.is_none() && !config.legacy_substitutions.is_empty()
                {
                    SlugApi::Legacy
                } else {
                    SlugApi::Modern
                }
            }
            api => api,
        };
        debug!("Using {:?} slug strategy", api);

        let strategy = match api {
            SlugApi::Legacy => SlugStrategy::Legacy {
                replacements: config.legacy_substitutions.clone(),
            },
            SlugApi::RegexOnly => SlugStrategy::RegexOnly {
                substitutions: compile(&config.effective_regex_substitutions())?,
            },
            SlugApi::Modern | SlugApi::Auto => SlugStrategy::Modern {
                substitutions: compile(&config.effective_regex_substitutions())?,
                preserve_case: config.preserve_case,
                use_unicode: config.use_unicode,
            },
        };

        Ok(strategy)
    }

    fn apply_regex(
        name: &str,
        substitutions: &[Substitution],
        preserve_case: bool,
        use_unicode: bool,
    ) -> String {
        let mut value = if use_unicode {
            name.to_string()
        } else {
            to_ascii(name)
        };

        for sub in substitutions {
            value = sub.apply(&value);
        }

        if !preserve_case {
            value = value.to_lowercase();
        }

        value.trim().to_string()
    }

    fn apply_legacy(name: &str, replacements: &[LegacySubstitution]) -> String {
        let mut value = to_ascii(name).to_lowercase();
        let mut cleanup = true;

        for sub in replacements {
            if sub.from.is_empty() {
                continue;
            }
            let replaced = value.replace(&sub.from.to_lowercase(), &sub.to.to_lowercase());
            if sub.skip && replaced != value {
                cleanup = false;
            }
            value = replaced;
        }

        if !cleanup {
            return value.trim().to_string();
        }

        let value = legacy_strip_pattern().replace_all(&value, "");
        let value = legacy_dash_pattern().replace_all(value.trim(), "-");

        value.chars().filter(char::is_ascii).collect()
    }
}

impl Slugify for SlugStrategy {
    fn slugify(&self, name: &str) -> String {
        match self {
            SlugStrategy::Modern {
                substitutions,
                preserve_case,
                use_unicode,
            } => Self::apply_regex(name, substitutions, *preserve_case, *use_unicode),
            SlugStrategy::RegexOnly { substitutions } => {
                Self::apply_regex(name, substitutions, false, false)
            }
            SlugStrategy::Legacy { replacements } => Self::apply_legacy(name, replacements),
        }
    }
}

impl Default for SlugStrategy {
    fn default() -> Self {
        SlugStrategy::Modern {
            substitutions: compile_defaults(),
            preserve_case: false,
            use_unicode: false,
        }
    }
}

fn compile(pairs: &[(String, String)]) -> Result<Vec<Substitution>> {
    pairs
        .iter()
        .map(|(pattern, replacement)| Substitution::new(pattern, replacement.as_str()))
        .collect()
}

fn compile_defaults() -> Vec<Substitution> {
    crate::config::default_regex_substitutions()
        .iter()
        .filter_map(|(p, r)| Substitution::new(p, r.as_str()).ok())
        .collect()
}

fn legacy_strip_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[^\w\s-]").expect("static pattern"))
}

fn legacy_dash_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[-\s]+").expect("static pattern"))
}

/// Transliterate to ASCII (`Ωmega` becomes `Omega`, `привет` becomes `privet`)
fn to_ascii(value: &str) -> String {
    deunicode::deunicode(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modern(preserve_case: bool, use_unicode: bool) -> SlugStrategy {
        SlugStrategy::from_config(&SlugConfig {
            api: SlugApi::Modern,
            preserve_case,
            use_unicode,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_default_keeps_extension() {
        let slug = SlugStrategy::default();
        assert_eq!(slug.slugify("comment-1.md"), "comment-1md");
        assert_eq!(slug.slugify("My Reply.md"), "my-replymd");
    }

    #[test]
    fn test_default_matches_modern_config() {
        let from_config = SlugStrategy::from_config(&SlugConfig::default()).unwrap();
        assert_eq!(
            from_config.slugify("  Hello -- World.md "),
            SlugStrategy::default().slugify("  Hello -- World.md ")
        );
        assert_eq!(from_config.slugify("  Hello -- World.md "), "hello-worldmd");
    }

    #[test]
    fn test_preserve_case() {
        assert_eq!(modern(true, false).slugify("Hello World.md"), "Hello-Worldmd");
        assert_eq!(modern(false, false).slugify("Hello World.md"), "hello-worldmd");
    }

    #[test]
    fn test_unicode_handling() {
        assert_eq!(modern(false, false).slugify("café.md"), "cafemd");
        assert_eq!(modern(false, true).slugify("café.md"), "cafémd");
        assert!(modern(false, false).slugify("日本.md").starts_with("ri-ben"));
    }

    #[test]
    fn test_non_latin_names_stay_distinct() {
        let slug = SlugStrategy::default();
        assert_eq!(slug.slugify("Ωmega.md"), "omegamd");
        assert_eq!(slug.slugify("привет.md"), "privetmd");
        assert_ne!(slug.slugify("привет.md"), slug.slugify("日本.md"));
    }

    #[test]
    fn test_custom_regex_substitutions() {
        let strategy = SlugStrategy::from_config(&SlugConfig {
            api: SlugApi::RegexOnly,
            regex_substitutions: Some(vec![
                (r"\.".to_string(), "-".to_string()),
                (r"[^\w-]".to_string(), String::new()),
            ]),
            preserve_case: true,
            ..Default::default()
        })
        .unwrap();

        // regex-only always lower-cases
        assert_eq!(strategy.slugify("Reply.One.md"), "reply-one-md");
    }

    #[test]
    fn test_legacy_strategy() {
        let strategy = SlugStrategy::from_config(&SlugConfig {
            legacy_substitutions: vec![LegacySubstitution::new("C++", "cpp")],
            ..Default::default()
        })
        .unwrap();

        assert!(matches!(strategy, SlugStrategy::Legacy { .. }));
        assert_eq!(strategy.slugify("About C++ tips.md"), "about-cpp-tipsmd");
    }

    #[test]
    fn test_legacy_skip_suppresses_cleanup() {
        let strategy = SlugStrategy::from_config(&SlugConfig {
            legacy_substitutions: vec![
                LegacySubstitution::new("+", "plus"),
                LegacySubstitution::skipping_cleanup("/", "-"),
            ],
            ..Default::default()
        })
        .unwrap();

        // skip only applies when its replacement matched
        assert_eq!(strategy.slugify("a+b c.md"), "aplusb-cmd");
        assert_eq!(strategy.slugify(" A/b c.md "), "a-b c.md");
    }

    #[test]
    fn test_auto_prefers_modern_when_regex_configured() {
        let strategy = SlugStrategy::from_config(&SlugConfig {
            regex_substitutions: Some(vec![]),
            legacy_substitutions: vec![LegacySubstitution::new("a", "b")],
            ..Default::default()
        })
        .unwrap();
        assert!(matches!(strategy, SlugStrategy::Modern { .. }));
    }

    #[test]
    fn test_invalid_pattern() {
        let result = SlugStrategy::from_config(&SlugConfig {
            regex_substitutions: Some(vec![("(".to_string(), String::new())]),
            ..Default::default()
        });
        assert!(matches!(result, Err(StaticCommentsError::Config(_))));
    }

    #[test]
    fn test_deterministic() {
        let strategy = SlugStrategy::default();
        assert_eq!(strategy.slugify("x y.md"), strategy.slugify("x y.md"));
    }

    #[test]
    fn test_closure_as_slugifier() {
        let upper = |name: &str| name.to_uppercase();
        assert_eq!(upper.slugify("abc"), "ABC");
    }
}

//! Naming convention utilities for code generation.
//!
//! Derives wire-level message names and correlation keys from schema type names.
//!
//! # Supported Conversions
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `SetBreakpointsRequest` | [`wire_name`] (request) | `setBreakpoints` |
//! | `StoppedEvent` | [`to_snake_case`] | `stopped_event` |
//! | `LaunchArguments` | [`strip_suffix`] (`Arguments`) | `Launch` |
//! | `DAPRequest` | [`split_words`] | `DAP`, `Request` |

use wirebind_core::{CompositeType, MessageCategory};

/// Split an identifier into words.
///
/// Word boundaries are non-alphanumeric characters, lower-to-upper transitions,
/// the end of an uppercase run followed by a lowercase letter, and letter/digit
/// transitions.
///
/// # Examples
///
/// ```
/// use wirebind_codegen::naming::split_words;
///
/// assert_eq!(split_words("ConfigurationDone"), vec!["Configuration", "Done"]);
/// assert_eq!(split_words("DAPRequest"), vec!["DAP", "Request"]);
/// assert_eq!(split_words("step2back"), vec!["step", "2", "back"]);
/// ```
pub fn split_words(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if let Some(prev) = current.chars().last() {
            let next = chars.get(i + 1).copied();
            let boundary = (prev.is_lowercase() && c.is_uppercase())
                || (prev.is_ascii_digit() != c.is_ascii_digit())
                || (prev.is_uppercase()
                    && c.is_uppercase()
                    && next.is_some_and(|n| n.is_lowercase()));
            if boundary {
                words.push(std::mem::take(&mut current));
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

/// Convert an identifier to lowerCamelCase.
///
/// # Examples
///
/// ```
/// use wirebind_codegen::naming::to_lower_camel_case;
///
/// assert_eq!(to_lower_camel_case("SetExceptionBreakpoints"), "setExceptionBreakpoints");
/// assert_eq!(to_lower_camel_case("DAPRequest"), "dapRequest");
/// ```
pub fn to_lower_camel_case(s: &str) -> String {
    let mut result = String::new();

    for (i, word) in split_words(s).iter().enumerate() {
        if i == 0 {
            result.push_str(&word.to_lowercase());
        } else {
            result.push_str(&capitalize(&word.to_lowercase()));
        }
    }

    result
}

/// Convert an identifier to snake_case.
///
/// # Examples
///
/// ```
/// use wirebind_codegen::naming::to_snake_case;
///
/// assert_eq!(to_snake_case("StoppedEvent"), "stopped_event");
/// assert_eq!(to_snake_case("SetBreakpointsResponse"), "set_breakpoints_response");
/// ```
pub fn to_snake_case(s: &str) -> String {
    split_words(s)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// Capitalize the first letter of a string.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Remove a trailing suffix token; names without it are returned unchanged.
pub fn strip_suffix<'a>(name: &'a str, suffix: &str) -> &'a str {
    name.strip_suffix(suffix).unwrap_or(name)
}

/// Wire-level command/event name of a message type.
///
/// # Examples
///
/// ```
/// use wirebind_codegen::naming::wire_name;
/// use wirebind_core::MessageCategory;
///
/// assert_eq!(wire_name("LaunchRequest", MessageCategory::Request), "launch");
/// assert_eq!(wire_name("ConfigurationDoneResponse", MessageCategory::Response), "configurationDone");
/// ```
pub fn wire_name(type_name: &str, category: MessageCategory) -> String {
    to_lower_camel_case(strip_suffix(type_name, category.suffix()))
}

/// Outcome of correlating a message type with its Arguments/Body type.
#[derive(Debug, Clone, PartialEq)]
pub struct Correlation<'a> {
    /// First matching candidate in iteration order.
    pub chosen: &'a CompositeType,

    /// Names of the other candidates that also matched.
    pub others: Vec<&'a str>,
}

impl Correlation<'_> {
    pub fn is_ambiguous(&self) -> bool {
        !self.others.is_empty()
    }
}

/// Find the payload type of a message by name containment.
///
/// A candidate matches when its name with `suffix` stripped is a non-empty
/// substring of `message`. Candidates are scanned in order and the first match
/// wins.
pub fn correlate<'a>(
    message: &str,
    candidates: &[&'a CompositeType],
    suffix: &str,
) -> Option<Correlation<'a>> {
    let mut matches = candidates.iter().copied().filter(|candidate| {
        let base = strip_suffix(&candidate.name, suffix);
        !base.is_empty() && message.contains(base)
    });

    let chosen = matches.next()?;
    let others = matches.map(|c| c.name.as_str()).collect();

    Some(Correlation { chosen, others })
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use test_case::test_case;

    #[test_case("LaunchRequest", &["Launch", "Request"])]
    #[test_case("DAPRequest", &["DAP", "Request"])]
    #[test_case("setBreakpoints", &["set", "Breakpoints"])]
    #[test_case("step_in-targets", &["step", "in", "targets"])]
    #[test_case("Utf8Decoder", &["Utf", "8", "Decoder"])]
    #[test_case("", &[])]
    fn split_words___splits_on_boundaries(input: &str, expected: &[&str]) {
        assert_eq!(split_words(input), expected);
    }

    #[test_case("Launch", "launch")]
    #[test_case("ConfigurationDone", "configurationDone")]
    #[test_case("SetExceptionBreakpoints", "setExceptionBreakpoints")]
    #[test_case("DAPRequest", "dapRequest")]
    #[test_case("already", "already")]
    fn to_lower_camel_case___converts(input: &str, expected: &str) {
        assert_eq!(to_lower_camel_case(input), expected);
    }

    #[test]
    fn to_snake_case___converts_pascal_case() {
        assert_eq!(to_snake_case("StoppedEvent"), "stopped_event");
        assert_eq!(to_snake_case("Launch"), "launch");
        assert_eq!(to_snake_case(""), "");
    }

    #[test]
    fn strip_suffix___removes_trailing_token_only() {
        assert_eq!(strip_suffix("LaunchArguments", "Arguments"), "Launch");
        assert_eq!(strip_suffix("ArgumentsHolder", "Arguments"), "ArgumentsHolder");
        assert_eq!(strip_suffix("Body", "Body"), "");
    }

    #[test]
    fn wire_name___strips_category_suffix() {
        assert_eq!(wire_name("LaunchRequest", MessageCategory::Request), "launch");
        assert_eq!(wire_name("StoppedEvent", MessageCategory::Event), "stopped");
        assert_eq!(
            wire_name("SetBreakpointsResponse", MessageCategory::Response),
            "setBreakpoints"
        );
    }

    #[test]
    fn correlate___matches_by_base_name_containment() {
        let launch = CompositeType::new("LaunchArguments");
        let attach = CompositeType::new("AttachArguments");
        let candidates = vec![&attach, &launch];

        let correlation = correlate("LaunchRequest", &candidates, "Arguments").unwrap();

        assert_eq!(correlation.chosen.name, "LaunchArguments");
        assert!(!correlation.is_ambiguous());
    }

    #[test]
    fn correlate___first_match_wins_and_reports_others() {
        let step_in = CompositeType::new("StepInArguments");
        let targets = CompositeType::new("StepInTargetsArguments");
        let candidates = vec![&step_in, &targets];

        let correlation = correlate("StepInTargetsRequest", &candidates, "Arguments").unwrap();

        assert_eq!(correlation.chosen.name, "StepInArguments");
        assert_eq!(correlation.others, vec!["StepInTargetsArguments"]);
    }

    #[test]
    fn correlate___skips_empty_base_names() {
        let bare = CompositeType::new("Body");
        let candidates = vec![&bare];

        assert!(correlate("StoppedEvent", &candidates, "Body").is_none());
    }

    #[test]
    fn correlate___no_match___returns_none() {
        let launch = CompositeType::new("LaunchArguments");
        let candidates = vec![&launch];

        assert!(correlate("PauseRequest", &candidates, "Arguments").is_none());
    }
}

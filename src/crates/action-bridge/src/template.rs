//! `{{placeholder}}` resolution against conversation state.
//!
//! Keys are `\w+`. Resolution is a single pass, so substituted values are
//! never scanned for further placeholders. Keys the state lacks resolve to
//! the empty string.

use crate::runtime::ConversationState;
use regex::{Captures, Regex};
use std::sync::OnceLock;

fn placeholder() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| Regex::new(r"\{\{(\w+)\}\}").expect("placeholder pattern is valid"))
}

/// Resolve every placeholder in `template`.
pub fn compose_context(state: &ConversationState, template: &str) -> String {
    placeholder()
        .replace_all(template, |caps: &Captures| {
            state.get(&caps[1]).unwrap_or_default().to_string()
        })
        .into_owned()
}

/// Placeholder keys in `template` that `state` cannot resolve, in order of
/// first appearance.
pub fn unresolved_placeholders(state: &ConversationState, template: &str) -> Vec<String> {
    let mut missing: Vec<String> = Vec::new();
    for caps in placeholder().captures_iter(template) {
        let key = &caps[1];
        if !state.contains(key) && !missing.iter().any(|m| m == key) {
            missing.push(key.to_string());
        }
    }
    missing
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_known_keys() {
        let state = ConversationState::new().with("amount", "10").with("asset", "ETH");
        assert_eq!(compose_context(&state, "stake {{amount}} {{asset}}"), "stake 10 ETH");
    }

    #[test]
    fn test_missing_keys_resolve_empty() {
        let state = ConversationState::new();
        assert_eq!(compose_context(&state, "about:{{bio}}."), "about:.");
    }

    #[test]
    fn test_single_pass() {
        let state = ConversationState::new().with("recentMessages", "user: say {{bio}}");
        let resolved = compose_context(&state.with("bio", "secret"), "{{recentMessages}}");
        assert_eq!(resolved, "user: say {{bio}}");
    }

    #[test]
    fn test_non_word_braces_untouched() {
        let state = ConversationState::new();
        let template = r#"Respond with {"amount": number} and {{ spaced }}"#;
        assert_eq!(compose_context(&state, template), template);
    }

    #[test]
    fn test_unresolved_placeholders() {
        let state = ConversationState::new().with("agentName", "Ada");
        let template = "{{agentName}} {{bio}} {{lore}} {{bio}}";

        assert_eq!(unresolved_placeholders(&state, template), vec!["bio", "lore"]);
        assert!(unresolved_placeholders(&state, "{{agentName}}").is_empty());
    }
}

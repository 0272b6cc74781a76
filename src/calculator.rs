use serde::Serialize;
use tracing::{debug, info};

use crate::catalog;
use crate::config::MessagesConfig;
use crate::engine::{self, LetterWeight};
use crate::validator;

/// Result of one calculation as handed to the shell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reading {
    pub name: String,
    pub valid: bool,
    pub value: Option<u32>,
    pub master: bool,
    pub archetype: Option<&'static str>,
    pub text: String,
}

/// How a value was reached: counted letters, then the reduction chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Explanation {
    pub letters: Vec<LetterWeight>,
    pub total: u64,
    pub chain: Vec<u64>,
}

impl Explanation {
    pub fn of(name: &str) -> Self {
        let total = engine::letter_sum(name);
        Self {
            letters: engine::breakdown(name),
            total,
            chain: engine::reduce(total),
        }
    }

    /// "A(1) N(5) A(1) = 24 -> 6"
    pub fn render(&self) -> String {
        let letters = self
            .letters
            .iter()
            .map(|lw| format!("{}({})", lw.letter, lw.weight))
            .collect::<Vec<_>>()
            .join(" ");
        let chain = self
            .chain
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" -> ");
        if letters.is_empty() {
            format!("(no letters) = {}", chain)
        } else {
            format!("{} = {}", letters, chain)
        }
    }
}

/// Validate, compute and describe a name, the way the form's button does.
/// Holds only the configured messages; nothing carries over between calls.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    messages: MessagesConfig,
}

impl Calculator {
    pub fn new(messages: MessagesConfig) -> Self {
        Self { messages }
    }

    pub fn calculate(&self, name: &str) -> Reading {
        if !validator::is_valid(name) {
            info!("Rejected invalid name");
            return Reading {
                name: name.to_string(),
                valid: false,
                value: None,
                master: false,
                archetype: None,
                text: self.messages.invalid_name.clone(),
            };
        }

        let value = engine::compute_value(name);
        debug!(value, "computed numerology value");

        Reading {
            name: name.to_string(),
            valid: true,
            value: Some(value),
            master: engine::is_master(value),
            archetype: catalog::archetype(value),
            text: catalog::describe(value).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{INVALID_NAME_MESSAGE, UNRECOGNIZED_NUMBER_MESSAGE};

    #[test]
    fn test_invalid_name_gets_fixed_message() {
        let reading = Calculator::default().calculate("AB");
        assert!(!reading.valid);
        assert_eq!(reading.value, None);
        assert_eq!(reading.text, INVALID_NAME_MESSAGE);
    }

    #[test]
    fn test_custom_invalid_message() {
        let calculator = Calculator::new(MessagesConfig {
            invalid_name: "Invalid name!".to_string(),
        });
        assert_eq!(calculator.calculate("Ana").text, "Invalid name!");
    }

    #[test]
    fn test_valid_name_reading() {
        let reading = Calculator::default().calculate("Ana Lima");
        assert!(reading.valid);
        assert_eq!(reading.value, Some(6));
        assert!(!reading.master);
        assert_eq!(reading.archetype, Some("A Família"));
        assert_eq!(reading.text, catalog::describe(6));
    }

    #[test]
    fn test_master_reading() {
        let reading = Calculator::default().calculate("Ab Ag");
        assert_eq!(reading.value, Some(11));
        assert!(reading.master);
    }

    #[test]
    fn test_valid_name_without_letters_is_unrecognized() {
        let reading = Calculator::default().calculate("123 456");
        assert!(reading.valid);
        assert_eq!(reading.value, Some(0));
        assert_eq!(reading.archetype, None);
        assert_eq!(reading.text, UNRECOGNIZED_NUMBER_MESSAGE);
    }

    #[test]
    fn test_explanation_render() {
        let explanation = Explanation::of("Ana Lima");
        assert_eq!(explanation.total, 24);
        assert_eq!(explanation.chain, vec![24, 6]);
        assert_eq!(
            explanation.render(),
            "A(1) N(5) A(1) L(3) I(9) M(4) A(1) = 24 -> 6"
        );
    }

    #[test]
    fn test_explanation_without_letters() {
        assert_eq!(Explanation::of("12 34").render(), "(no letters) = 0");
    }
}

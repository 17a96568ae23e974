//! Word tokens inside an annotation line.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Attribute whose `:` separators are shown as `/` in attribute listings.
const POS_ATTRIBUTE: &str = "pos";

/// One word of an annotation line.
///
/// A token is a bag of corpus attributes (word form, lemma, part of speech,
/// ...) plus a flag marking it as a search hit.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WordToken {
    /// Marks a search hit, rendered with emphasis
    #[serde(default, rename = "match", skip_serializing_if = "std::ops::Not::not")]
    pub is_match: bool,
    /// Attribute name -> value
    #[serde(flatten)]
    pub attributes: BTreeMap<String, String>,
}

impl WordToken {
    /// Create a token from attribute pairs.
    pub fn new<I, K, V>(attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            is_match: false,
            attributes: attributes
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Mark this token as a search hit.
    pub fn matched(mut self) -> Self {
        self.is_match = true;
        self
    }

    /// Value of a single attribute.
    pub fn get(&self, attribute: &str) -> Option<&str> {
        self.attributes.get(attribute).map(String::as_str)
    }

    /// Text shown in the transcript for this token.
    ///
    /// Returns an empty string when the token lacks the display attribute.
    pub fn display(&self, attribute: &str) -> &str {
        self.get(attribute).unwrap_or("")
    }

    /// List every attribute as `"<name> : <value>"`, in name order.
    pub fn describe(&self) -> Vec<String> {
        self.attributes
            .iter()
            .map(|(name, value)| {
                if name == POS_ATTRIBUTE {
                    format!("{} : {}", name, value.replace(':', "/"))
                } else {
                    format!("{} : {}", name, value)
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_attributes_and_match_flag() {
        let token: WordToken =
            serde_json::from_str(r#"{"word": "hei", "lemma": "hei", "match": true}"#).unwrap();

        assert!(token.is_match);
        assert_eq!(token.get("word"), Some("hei"));
        assert_eq!(token.get("lemma"), Some("hei"));
        assert_eq!(token.get("match"), None);
    }

    #[test]
    fn match_defaults_to_false() {
        let token: WordToken = serde_json::from_str(r#"{"word": "og"}"#).unwrap();
        assert!(!token.is_match);
    }

    #[test]
    fn display_falls_back_to_empty() {
        let token = WordToken::new([("word", "ja")]);
        assert_eq!(token.display("word"), "ja");
        assert_eq!(token.display("phon"), "");
    }

    #[test]
    fn describe_rewrites_pos_separators() {
        let token = WordToken::new([("word", "kom"), ("pos", "verb:past:x")]);
        assert_eq!(
            token.describe(),
            vec!["pos : verb/past/x".to_string(), "word : kom".to_string()]
        );
    }

    #[test]
    fn describe_leaves_other_colons_alone() {
        let token = WordToken::new([("lemma", "a:b")]);
        assert_eq!(token.describe(), vec!["lemma : a:b".to_string()]);
    }
}

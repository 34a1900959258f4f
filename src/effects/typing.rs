//! Typewriter that types, holds, deletes and rotates through phrases

use crate::settings::EffectSettings;

/// Text to show and how long to wait before the next step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeStep {
    pub text: String,
    pub delay_ms: u32,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<Vec<char>>,
    phrase: usize,
    chars: usize,
    deleting: bool,
    type_ms: u32,
    delete_ms: u32,
    hold_ms: u32,
    next_phrase_ms: u32,
}

impl Typewriter {
    /// `None` when there is nothing to type
    pub fn new(settings: &EffectSettings) -> Option<Self> {
        let phrases: Vec<Vec<char>> = settings
            .phrases
            .iter()
            .filter(|p| !p.is_empty())
            .map(|p| p.chars().collect())
            .collect();
        if phrases.is_empty() {
            return None;
        }
        Some(Self {
            phrases,
            phrase: 0,
            chars: 0,
            deleting: false,
            type_ms: settings.type_ms,
            delete_ms: settings.delete_ms,
            hold_ms: settings.hold_ms,
            next_phrase_ms: settings.next_phrase_ms,
        })
    }

    /// Add or remove one character
    pub fn step(&mut self) -> TypeStep {
        let current = &self.phrases[self.phrase];
        if self.deleting {
            self.chars = self.chars.saturating_sub(1);
        } else {
            self.chars = (self.chars + 1).min(current.len());
        }
        let text: String = current[..self.chars].iter().collect();

        let delay_ms = if !self.deleting && self.chars == current.len() {
            self.deleting = true;
            self.hold_ms
        } else if self.deleting && self.chars == 0 {
            self.deleting = false;
            self.phrase = (self.phrase + 1) % self.phrases.len();
            self.next_phrase_ms
        } else if self.deleting {
            self.delete_ms
        } else {
            self.type_ms
        };

        TypeStep { text, delay_ms }
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn writer(phrases: &[&str]) -> Typewriter {
        let settings = EffectSettings {
            phrases: phrases.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        };
        Typewriter::new(&settings).unwrap()
    }

    #[test]
    fn types_holds_deletes_and_rotates() {
        let mut tw = writer(&["Hi", "Yo"]);
        let steps: Vec<TypeStep> = (0..5).map(|_| tw.step()).collect();
        let seen: Vec<(&str, u32)> = steps.iter().map(|s| (s.text.as_str(), s.delay_ms)).collect();
        assert_eq!(
            seen,
            vec![("H", 100), ("Hi", 2000), ("H", 50), ("", 500), ("Y", 100)]
        );
        assert_eq!(tw.phrase_index(), 1);
    }

    #[test]
    fn wraps_back_to_first_phrase() {
        let mut tw = writer(&["a", "b"]);
        for _ in 0..4 {
            tw.step();
        }
        assert_eq!(tw.phrase_index(), 0);
        assert_eq!(tw.step().text, "a");
    }

    #[test]
    fn multibyte_text_is_split_by_char() {
        let mut tw = writer(&["héllo"]);
        assert_eq!(tw.step().text, "h");
        assert_eq!(tw.step().text, "hé");
    }

    #[test]
    fn empty_phrases_disable_typing() {
        let settings = EffectSettings {
            phrases: vec![String::new()],
            ..Default::default()
        };
        assert!(Typewriter::new(&settings).is_none());
    }
}

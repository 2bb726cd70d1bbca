//! The hidden word of a hangman round and its per-letter reveal state.

use std::fmt;

/// One position of the secret word. `revealed` only ever goes from false to true.
#[derive(Clone, Debug, PartialEq, Eq)]
struct SecretLetter {
    letter: char,
    revealed: bool,
}

impl SecretLetter {
    fn guess(&mut self, letter: char) -> bool {
        if letter == self.letter {
            self.revealed = true;
            return true;
        }
        false
    }
}

/// A word that is revealed letter by letter, or all at once by guessing it whole.
///
/// The word is lowercased at construction and never changes afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SecretWord {
    word: String,
    slots: Vec<SecretLetter>,
    hidden: bool,
}

impl SecretWord {
    pub fn new(word: &str) -> Self {
        let word = word.to_lowercase();
        let slots = word.chars().map(|letter| SecretLetter { letter, revealed: false }).collect();
        Self { word, slots, hidden: true }
    }

    /// Reveals every position matching `letter` and returns how many matched.
    ///
    /// The count comes from a fresh scan, so guessing a letter twice reports the
    /// same count both times. Anything other than a single character matches nothing.
    pub fn guess_letter(&mut self, letter: &str) -> usize {
        let letter = letter.to_lowercase();
        let mut chars = letter.chars();
        let (Some(letter), None) = (chars.next(), chars.next()) else {
            return 0;
        };

        let mut count = 0;
        for slot in &mut self.slots {
            if slot.guess(letter) {
                count += 1;
            }
        }

        if self.slots.iter().all(|slot| slot.revealed) {
            self.hidden = false;
        }

        count
    }

    pub fn guess_word(&mut self, word: &str) -> bool {
        if word.to_lowercase() == self.word {
            self.hidden = false;
            return true;
        }
        false
    }

    pub fn force_reveal(&mut self) {
        self.hidden = false;
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    /// The word as the player sees it: `_` for every position not yet revealed.
    pub fn render(&self) -> String {
        if !self.hidden {
            return self.word.clone();
        }
        self.slots.iter().map(|slot| if slot.revealed { slot.letter } else { '_' }).collect()
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_letter_reveals_only_on_match() {
        for (letter, wrong_guesses) in [('a', "bcx5&"), ('x', "yza8@"), ('g', "hir3%")] {
            let mut slot = SecretLetter { letter, revealed: false };
            for guess in wrong_guesses.chars() {
                assert!(!slot.guess(guess));
                assert!(!slot.revealed);
            }
            assert!(slot.guess(letter));
            assert!(slot.revealed);
        }
    }

    #[test]
    fn new_word_is_fully_hidden() {
        let word = SecretWord::new("statement");
        assert!(word.is_hidden());
        assert_eq!(word.render(), "_________");
    }

    #[test]
    fn construction_lowercases_the_word() {
        let word = SecretWord::new("StateMENT");
        assert_eq!(word.word(), "statement");
    }

    #[test]
    fn guess_letter_counts_occurrences() {
        let cases = [
            ("statement", 'a', 'e', 'x'),
            ("psychology", 'p', 'y', 'z'),
            ("hibernation", 'h', 'i', 'q'),
        ];
        for (word, once, twice, none) in cases {
            let mut secret = SecretWord::new(word);
            assert_eq!(secret.guess_letter(&once.to_string()), 1, "{word}/{once}");
            assert_eq!(secret.guess_letter(&twice.to_string()), 2, "{word}/{twice}");
            assert_eq!(secret.guess_letter(&none.to_string()), 0, "{word}/{none}");
        }
    }

    #[test]
    fn guess_letter_is_case_insensitive() {
        let mut secret = SecretWord::new("statement");
        assert_eq!(secret.guess_letter("T"), 3);
        assert_eq!(secret.render(), "_t_t____t");
    }

    #[test]
    fn repeated_letter_guess_reports_current_matches() {
        let mut secret = SecretWord::new("statement");
        assert_eq!(secret.guess_letter("e"), 2);
        assert_eq!(secret.guess_letter("e"), 2);
        assert_eq!(secret.render(), "____e_e__");
    }

    #[test]
    fn multi_character_and_empty_letters_never_match() {
        let mut secret = SecretWord::new("statement");
        assert_eq!(secret.guess_letter(""), 0);
        assert_eq!(secret.guess_letter("st"), 0);
        assert_eq!(secret.render(), "_________");
    }

    #[test]
    fn guess_letter_progressively_renders() {
        let cases = [
            ("statement", "aestx", "state_e_t"),
            ("psychology", "syhoz", "_sy_ho_o_y"),
            ("hibernation", "hibnq", "hib__n__i_n"),
        ];
        for (word, guesses, expected) in cases {
            let mut secret = SecretWord::new(word);
            for guess in guesses.chars() {
                secret.guess_letter(&guess.to_string());
            }
            assert_eq!(secret.render(), expected);
            assert!(secret.is_hidden());
        }
    }

    #[test]
    fn revealing_every_position_unhides_the_word() {
        let mut secret = SecretWord::new("level");
        secret.guess_letter("l");
        secret.guess_letter("e");
        assert!(secret.is_hidden());
        secret.guess_letter("v");
        assert!(!secret.is_hidden());
        assert_eq!(secret.to_string(), "level");
    }

    #[test]
    fn guess_word_only_accepts_exact_word() {
        let cases = [
            ("statement", ["foobar", "councilor", "agreement"]),
            ("psychology", ["foobar", "government", "physiology"]),
            ("hibernation", ["foobar", "achievement", "alternation"]),
        ];
        for (word, wrong_guesses) in cases {
            let mut secret = SecretWord::new(word);
            let blank = "_".repeat(word.len());
            for guess in wrong_guesses {
                assert!(!secret.guess_word(guess));
                assert!(secret.is_hidden());
                assert_eq!(secret.render(), blank);
            }
            assert!(secret.guess_word(word));
            assert!(!secret.is_hidden());
            assert_eq!(secret.render(), word);
        }
    }

    #[test]
    fn guess_word_ignores_case() {
        let mut secret = SecretWord::new("statement");
        assert!(secret.guess_word("STATEment"));
        assert_eq!(secret.render(), "statement");
    }

    #[test]
    fn force_reveal_shows_whole_word() {
        let mut secret = SecretWord::new("statement");
        secret.guess_letter("a");
        secret.force_reveal();
        assert!(!secret.is_hidden());
        assert_eq!(secret.render(), "statement");
    }
}

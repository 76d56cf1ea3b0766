use tracing::trace;

use crate::error::InvalidTransition;

const MAX_PREFIX_LETTERS: u8 = 4;
const NUMBER_DIGITS: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Letter,
    Digit,
    Other,
}

impl From<char> for CharClass {
    fn from(value: char) -> Self {
        if value.is_ascii_alphabetic() {
            Self::Letter
        } else if value.is_ascii_digit() {
            Self::Digit
        } else {
            Self::Other
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Initial,
    Letter { letters: u8 },
    Number { digits: u8 },
    Suffix,
}

impl State {
    const fn on(self, class: CharClass) -> Result<Self, InvalidTransition> {
        match (self, class) {
            (_, CharClass::Other) => Err(InvalidTransition::NotAlphanumeric),
            (Self::Initial, CharClass::Letter) => Ok(Self::Letter { letters: 1 }),
            (Self::Initial, CharClass::Digit) => Err(InvalidTransition::MustStartWithLetter),
            (Self::Letter { letters }, CharClass::Letter) => {
                if letters >= MAX_PREFIX_LETTERS {
                    Err(InvalidTransition::TooManyLetters)
                } else {
                    Ok(Self::Letter {
                        letters: letters + 1,
                    })
                }
            }
            (Self::Letter { .. }, CharClass::Digit) => Ok(Self::Number { digits: 1 }),
            (Self::Number { digits }, CharClass::Digit) => {
                if digits >= NUMBER_DIGITS {
                    Err(InvalidTransition::TooManyDigits)
                } else {
                    Ok(Self::Number { digits: digits + 1 })
                }
            }
            (Self::Number { digits }, CharClass::Letter) => {
                if digits == NUMBER_DIGITS {
                    Ok(Self::Suffix)
                } else {
                    Err(InvalidTransition::MustHaveThreeDigits)
                }
            }
            (Self::Suffix, CharClass::Letter) => Err(InvalidTransition::SuffixTooLong),
            (Self::Suffix, CharClass::Digit) => Err(InvalidTransition::DigitAfterSuffix),
        }
    }

    const fn is_accepting(self) -> bool {
        matches!(self, Self::Number { digits: NUMBER_DIGITS } | Self::Suffix)
    }

    /// The transition taken when the input runs out.
    const fn finish(self) -> Result<(), InvalidTransition> {
        match self {
            Self::Initial => Err(InvalidTransition::MustStartWithLetter),
            Self::Letter { .. } | Self::Number { .. } if !self.is_accepting() => {
                Err(InvalidTransition::MustHaveThreeDigits)
            }
            _ => Ok(()),
        }
    }
}

/// Finite state machine accepting course names of the shape
/// `(1-4 letters)(3 digits)(optional 1 letter suffix)`, e.g. `CSC216` or
/// `CSCI216A`.
///
/// Each machine scans one name. [`NameValidator::validate`] and
/// [`NameValidator::is_valid`] create a fresh machine per call.
#[derive(Debug, Clone)]
pub struct NameValidator {
    state: State,
}

impl Default for NameValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl NameValidator {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: State::Initial,
        }
    }

    /// Consumes one character. On error the machine stays in the state it was
    /// in before.
    pub fn feed(&mut self, character: char) -> Result<(), InvalidTransition> {
        self.state = self.state.on(CharClass::from(character))?;
        Ok(())
    }

    /// Whether the characters fed so far form a complete name.
    #[must_use]
    pub const fn is_accepting(&self) -> bool {
        self.state.is_accepting()
    }

    pub const fn finish(self) -> Result<(), InvalidTransition> {
        self.state.finish()
    }

    /// Scans `name` and fails on the first disallowed transition.
    pub fn validate(name: &str) -> Result<(), InvalidTransition> {
        let mut machine = Self::new();
        name.chars()
            .try_for_each(|character| machine.feed(character))
            .and_then(|()| machine.finish())
            .inspect_err(|reason| trace!(name, %reason, "rejected course name"))
    }

    #[must_use]
    pub fn is_valid(name: &str) -> bool {
        Self::validate(name).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use regex::Regex;

    use super::NameValidator;
    use crate::error::InvalidTransition;

    #[test]
    fn accepts_documented_examples() {
        for name in ["CSC216", "CSC216A", "CSCI216", "E115", "MA141", "csc116b"] {
            assert_eq!(NameValidator::validate(name), Ok(()), "{name}");
        }
    }

    #[test]
    fn reports_first_violated_rule() {
        let cases = [
            ("1ABC", InvalidTransition::MustStartWithLetter),
            ("CSCII216", InvalidTransition::TooManyLetters),
            ("CSC21", InvalidTransition::MustHaveThreeDigits),
            ("CSC21A", InvalidTransition::MustHaveThreeDigits),
            ("C1A", InvalidTransition::MustHaveThreeDigits),
            ("CSC2161", InvalidTransition::TooManyDigits),
            ("CSC216AB", InvalidTransition::SuffixTooLong),
            ("CSC216A1", InvalidTransition::DigitAfterSuffix),
            ("CSC 216", InvalidTransition::NotAlphanumeric),
            ("CSC-216", InvalidTransition::NotAlphanumeric),
            ("", InvalidTransition::MustStartWithLetter),
            ("CSC", InvalidTransition::MustHaveThreeDigits),
        ];
        for (name, reason) in cases {
            assert_eq!(NameValidator::validate(name), Err(reason), "{name}");
            assert!(!NameValidator::is_valid(name));
        }
    }

    #[test]
    fn messages_match_contract() {
        assert_eq!(
            InvalidTransition::MustStartWithLetter.to_string(),
            "Course name must start with a letter."
        );
        assert_eq!(
            InvalidTransition::TooManyLetters.to_string(),
            "Course name cannot start with more than 4 letters."
        );
        assert_eq!(
            InvalidTransition::MustHaveThreeDigits.to_string(),
            "Course name must have 3 digits."
        );
        assert_eq!(
            InvalidTransition::SuffixTooLong.to_string(),
            "Course name can only have a 1 letter suffix."
        );
    }

    #[test]
    fn incremental_feeding() {
        let mut machine = NameValidator::new();
        for character in "CSC21".chars() {
            machine.feed(character).unwrap();
            assert!(!machine.is_accepting());
        }
        machine.feed('6').unwrap();
        assert!(machine.is_accepting());
        assert_eq!(machine.feed('7'), Err(InvalidTransition::TooManyDigits));
        // still accepting after the rejected character
        assert!(machine.is_accepting());
        machine.feed('A').unwrap();
        assert_eq!(machine.finish(), Ok(()));
    }

    proptest! {
        #[test]
        fn agrees_with_reference_pattern(
            name in prop_oneof![
                "[A-Za-z]{1,4}[0-9]{3}[A-Za-z]?",
                "[A-Za-z0-9]{0,10}",
                "[A-Za-z0-9 _\\-é]{0,10}",
            ]
        ) {
            let reference = Regex::new(r"^[A-Za-z]{1,4}[0-9]{3}[A-Za-z]?$").unwrap();
            prop_assert_eq!(NameValidator::is_valid(&name), reference.is_match(&name));
        }
    }
}

//! Field and parse-code extractors.

use crate::expr::Extractor;
use crate::morph::strip_accents;
use crate::tuple::Tuple;

// Parse-code character positions.
const PERSON: usize = 0;
const TENSE: usize = 1;
const VOICE: usize = 2;
const MOOD: usize = 3;
const CASE: usize = 4;
const NUMBER: usize = 5;
const GENDER: usize = 6;
const DEGREE: usize = 7;

/// Slice `len` characters of the parse code starting at `start`. A short or
/// absent code yields absent.
fn parse_slice(label: &'static str, start: usize, len: usize) -> Extractor {
    Extractor::new(label, move |t: &Tuple| {
        let code: Vec<char> = t.get("parse")?.chars().collect();
        if code.len() < start + len {
            return None;
        }
        Some(code[start..start + len].iter().collect())
    })
}

pub fn form() -> Extractor {
    Extractor::field("form")
}

pub fn pos() -> Extractor {
    Extractor::field("pos")
}

pub fn parse_code() -> Extractor {
    Extractor::field("parse")
}

pub fn lemma() -> Extractor {
    Extractor::field("lemma")
}

pub fn person() -> Extractor {
    parse_slice("person", PERSON, 1)
}

pub fn tense() -> Extractor {
    parse_slice("tense", TENSE, 1)
}

pub fn voice() -> Extractor {
    parse_slice("voice", VOICE, 1)
}

pub fn mood() -> Extractor {
    parse_slice("mood", MOOD, 1)
}

pub fn case() -> Extractor {
    parse_slice("case", CASE, 1)
}

pub fn number() -> Extractor {
    parse_slice("number", NUMBER, 1)
}

pub fn gender() -> Extractor {
    parse_slice("gender", GENDER, 1)
}

pub fn degree() -> Extractor {
    parse_slice("degree", DEGREE, 1)
}

/// Tense, voice, and mood as one three-character code.
pub fn tvm() -> Extractor {
    parse_slice("tense/voice/mood", TENSE, 3)
}

/// Case, number, and gender as one three-character code.
pub fn cng() -> Extractor {
    parse_slice("case/number/gender", CASE, 3)
}

pub fn case_number() -> Extractor {
    parse_slice("case/number", CASE, 2)
}

fn last_n(n: usize) -> Extractor {
    Extractor::new("ending", move |t: &Tuple| {
        let stripped = strip_accents(t.get("form")?);
        let chars: Vec<char> = stripped.chars().collect();
        let start = chars.len().saturating_sub(n);
        Some(chars[start..].iter().collect())
    })
}

/// The accent-stripped final two characters of the form.
pub fn last2() -> Extractor {
    last_n(2)
}

/// The accent-stripped final three characters of the form.
pub fn last3() -> Extractor {
    last_n(3)
}

/// The tuple's tags, space-joined in sorted order.
pub fn tags() -> Extractor {
    Extractor::new("tags", |t: &Tuple| {
        Some(t.tags().collect::<Vec<_>>().join(" "))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verb() -> Tuple {
        // imperfect active indicative, 3rd singular
        Tuple::from_pairs([
            ("form", "ἔλεγεν"),
            ("pos", "V-"),
            ("parse", "3IAI-S--"),
            ("lemma", "λέγω"),
        ])
    }

    fn noun() -> Tuple {
        Tuple::from_pairs([("form", "λόγος"), ("pos", "N-"), ("parse", "----NSM-")])
    }

    #[test]
    fn test_parse_slices() {
        let t = verb();
        assert_eq!(person().extract(&t), Some("3".to_string()));
        assert_eq!(tense().extract(&t), Some("I".to_string()));
        assert_eq!(voice().extract(&t), Some("A".to_string()));
        assert_eq!(mood().extract(&t), Some("I".to_string()));
        assert_eq!(number().extract(&t), Some("S".to_string()));
        assert_eq!(tvm().extract(&t), Some("IAI".to_string()));
    }

    #[test]
    fn test_parse_slice_labels() {
        assert_eq!(tvm().label(), "tense/voice/mood");
        assert_eq!(cng().label(), "case/number/gender");
        assert_eq!(case_number().label(), "case/number");
        assert_eq!(tense().label(), "tense");
    }

    #[test]
    fn test_short_or_absent_parse_code() {
        let short = Tuple::from_pairs([("parse", "3IA")]);
        assert_eq!(tense().extract(&short), Some("I".to_string()));
        assert_eq!(case().extract(&short), None);
        assert_eq!(degree().extract(&short), None);
        assert_eq!(tvm().extract(&Tuple::new()), None);
    }

    #[test]
    fn test_endings_are_accent_stripped() {
        let t = noun();
        assert_eq!(last2().extract(&t), Some("ος".to_string()));
        assert_eq!(last3().extract(&t), Some("γος".to_string()));
        assert_eq!(last2().label(), "ending");
    }

    #[test]
    fn test_last_n_on_short_form() {
        let t = Tuple::from_pairs([("form", "ὁ")]);
        assert_eq!(last3().extract(&t), Some("ο".to_string()));
    }

    #[test]
    fn test_tags_joined() {
        let mut t = noun();
        assert_eq!(tags().extract(&t), Some(String::new()));
        t.add_tag("proper");
        t.add_tag("crasis");
        assert_eq!(tags().extract(&t), Some("crasis proper".to_string()));
    }
}

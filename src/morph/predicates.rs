//! Characteristic predicates and parameterized predicate families.

use crate::expr::Predicate;
use crate::morph::{fields, strip_accents};
use crate::tuple::Tuple;

/// Nouns, adjectives, articles, and verbal participles.
pub fn nominal() -> Predicate {
    Predicate::new("nominal", |t: &Tuple| {
        let pos = t.get("pos").unwrap_or("");
        if matches!(pos.chars().next(), Some('N' | 'A' | 'R')) {
            return true;
        }
        pos == "V-" && fields::mood().extract(t).as_deref() == Some("P")
    })
}

pub fn infinitive() -> Predicate {
    let mood = fields::mood();
    Predicate::new("infinitive", move |t| {
        mood.extract(t).as_deref() == Some("N")
    })
}

/// The accent-stripped form ends in `suffix`. Label `"-{suffix}"`.
pub fn ends_in(suffix: impl Into<String>) -> Predicate {
    let suffix = suffix.into();
    let label = format!("-{}", suffix);
    Predicate::new(label, move |t: &Tuple| {
        t.get("form")
            .is_some_and(|form| strip_accents(form).ends_with(&suffix))
    })
}

/// The tuple carries `tag`.
pub fn tagged(tag: impl Into<String>) -> Predicate {
    let tag = tag.into();
    let label = format!("tagged {}", tag);
    Predicate::new(label, move |t: &Tuple| t.has_tag(&tag))
}

/// An extractor's output equals `expected`. Absent never matches.
fn extractor_is(extractor: crate::expr::Extractor, label: String, expected: String) -> Predicate {
    Predicate::new(label, move |t| {
        extractor.extract(t).as_deref() == Some(expected.as_str())
    })
}

pub fn cng_is(cng: impl Into<String>) -> Predicate {
    let cng = cng.into();
    extractor_is(fields::cng(), cng.clone(), cng)
}

pub fn tvm_is(tvm: impl Into<String>) -> Predicate {
    let tvm = tvm.into();
    extractor_is(fields::tvm(), tvm.clone(), tvm)
}

pub fn case_is(case: impl Into<String>) -> Predicate {
    let case = case.into();
    extractor_is(fields::case(), format!("case {}", case), case)
}

pub fn case_number_is(case_number: impl Into<String>) -> Predicate {
    let case_number = case_number.into();
    extractor_is(fields::case_number(), case_number.clone(), case_number)
}

pub fn pos_is(pos: impl Into<String>) -> Predicate {
    let pos = pos.into();
    extractor_is(fields::pos(), pos.clone(), pos)
}

pub fn person_is(person: impl Into<String>) -> Predicate {
    let person = person.into();
    extractor_is(fields::person(), format!("person {}", person), person)
}

pub fn mood_is(mood: impl Into<String>) -> Predicate {
    let mood = mood.into();
    extractor_is(fields::mood(), format!("mood {}", mood), mood)
}

pub fn voice_is(voice: impl Into<String>) -> Predicate {
    let voice = voice.into();
    extractor_is(fields::voice(), format!("voice {}", voice), voice)
}

pub fn degree_is(degree: impl Into<String>) -> Predicate {
    let degree = degree.into();
    extractor_is(fields::degree(), format!("degree {}", degree), degree)
}

/// Person and number concatenated equal `person_number` (e.g. `"3S"`).
pub fn person_number_is(person_number: impl Into<String>) -> Predicate {
    let person_number = person_number.into();
    let label = format!("person/number {}", person_number);
    let person = fields::person();
    let number = fields::number();
    Predicate::new(label, move |t| {
        match (person.extract(t), number.extract(t)) {
            (Some(p), Some(n)) => format!("{}{}", p, n) == person_number,
            _ => false,
        }
    })
}

/// The accent-stripped form equals the value of `stem_field` (typically
/// join-enriched from a lexeme relation) concatenated with `ending`. False
/// when the stem field is absent. Label `"{stem_field}+{ending}"`.
pub fn stem_suffix(stem_field: impl Into<String>, ending: impl Into<String>) -> Predicate {
    let stem_field = stem_field.into();
    let ending = ending.into();
    let label = format!("{}+{}", stem_field, ending);
    Predicate::new(label, move |t: &Tuple| {
        match (t.get("form"), t.get(&stem_field)) {
            (Some(form), Some(stem)) => {
                strip_accents(form) == strip_accents(&format!("{}{}", stem, ending))
            }
            _ => false,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noun() -> Tuple {
        Tuple::from_pairs([("form", "λόγος"), ("pos", "N-"), ("parse", "----NSM-")])
    }

    fn participle() -> Tuple {
        Tuple::from_pairs([("form", "λέγων"), ("pos", "V-"), ("parse", "-PAPNSM-")])
    }

    fn infinitive_form() -> Tuple {
        Tuple::from_pairs([("form", "λέγειν"), ("pos", "V-"), ("parse", "-PAN----")])
    }

    #[test]
    fn test_nominal() {
        assert!(nominal().test(&noun()));
        assert!(nominal().test(&participle()));
        assert!(!nominal().test(&infinitive_form()));
        assert!(!nominal().test(&Tuple::new()));
    }

    #[test]
    fn test_infinitive() {
        assert!(infinitive().test(&infinitive_form()));
        assert!(!infinitive().test(&noun()));
    }

    #[test]
    fn test_ends_in_ignores_accents() {
        let p = ends_in("ος");
        assert_eq!(p.label(), "-ος");
        assert!(p.test(&noun()));
        assert!(!p.test(&participle()));
        assert!(!p.test(&Tuple::new()));
    }

    #[test]
    fn test_is_family_labels() {
        assert_eq!(case_is("N").label(), "case N");
        assert_eq!(cng_is("NSM").label(), "NSM");
        assert_eq!(tvm_is("PAN").label(), "PAN");
        assert_eq!(voice_is("A").label(), "voice A");
        assert_eq!(person_number_is("3S").label(), "person/number 3S");
        assert_eq!(pos_is("N-").label(), "N-");
    }

    #[test]
    fn test_is_family_matching() {
        assert!(case_is("N").test(&noun()));
        assert!(!case_is("A").test(&noun()));
        assert!(cng_is("NSM").test(&noun()));
        assert!(tvm_is("PAN").test(&infinitive_form()));
        assert!(!tvm_is("PAN").test(&noun()));
        // An unfilled slot never matches a concrete value.
        assert!(!case_is("N").test(&infinitive_form()));
        // Nor does a missing parse code.
        assert!(!case_is("N").test(&Tuple::new()));
    }

    #[test]
    fn test_tagged() {
        let mut t = noun();
        assert!(!tagged("proper").test(&t));
        t.add_tag("proper");
        assert!(tagged("proper").test(&t));
        assert_eq!(tagged("proper").label(), "tagged proper");
    }

    #[test]
    fn test_stem_suffix() {
        let t = Tuple::from_pairs([("form", "λέγειν"), ("pstem", "λεγ")]);
        let p = stem_suffix("pstem", "ειν");
        assert_eq!(p.label(), "pstem+ειν");
        assert!(p.test(&t));
        // Missing stem field is false, not an error.
        assert!(!p.test(&infinitive_form()));
        // Wrong ending.
        assert!(!stem_suffix("pstem", "εις").test(&t));
    }
}

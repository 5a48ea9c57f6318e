//! Greek morphology domain layer.
//!
//! Extractors and predicates over MorphGNT-style records (`form`, `pos`,
//! `parse`, `lemma`), built entirely on the public combinator API. The parse
//! code packs one morphological slot per character position: person, tense,
//! voice, mood, case, number, gender, degree.
//!
//! Nothing here is part of the engine; this is ordinary user code the
//! binary and tests happen to share.

pub mod accents;
pub mod ending_tree;
pub mod fields;
pub mod predicates;

pub use accents::strip_accents;
pub use ending_tree::EndingTree;
pub use fields::{
    case, case_number, cng, degree, form, gender, last2, last3, lemma, mood, number, parse_code,
    person, pos, tags, tense, tvm, voice,
};
pub use predicates::{
    case_is, case_number_is, cng_is, degree_is, ends_in, infinitive, mood_is, nominal,
    person_is, person_number_is, pos_is, stem_suffix, tagged, tvm_is, voice_is,
};

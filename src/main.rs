//! relq - single-pass relational queries over flat delimited text.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use relq::expr::{Extractor, Predicate};
use relq::loader;
use relq::morph::{self, EndingTree};
use relq::query::{run, Assert, CrossTab, PartitionCount, Query};
use relq::relation::{JoinSpec, Relation};
use std::io;
use std::path::PathBuf;

/// Run the standard verb-morphology query battery over a forms file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Whitespace-delimited forms file (form pos parse lemma)
    forms: PathBuf,

    /// Optional key:value lexeme file, joined on lemma to enrich each form
    /// with its present stem
    #[arg(short, long)]
    lexemes: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let field_names = ["form", "pos", "parse", "lemma"];
    let mut forms = Relation::new();

    if let Some(lexeme_path) = &args.lexemes {
        let mut lexemes = Relation::new();
        let lexeme_count =
            loader::load_key_value_path(&mut lexemes, lexeme_path, &["lemma"], &[])?;
        info!(
            "loaded {} lexemes from {}",
            lexeme_count,
            lexeme_path.display()
        );

        let join = JoinSpec::new(&lexemes, "lemma", "lemma", [("pstem", "pstem")]);
        loader::load_columns_path(&mut forms, &args.forms, &field_names, &[], &[join])?;
    } else {
        loader::load_columns_path(&mut forms, &args.forms, &field_names, &[], &[])?;
    }
    info!("loaded {} forms from {}", forms.len(), args.forms.display());

    let infinitive = morph::infinitive();
    let mut queries: Vec<Box<dyn Query>> = vec![
        Box::new(PartitionCount::new(morph::tense())),
        Box::new(PartitionCount::new(morph::tense()).given(infinitive.clone())),
        Box::new(
            PartitionCount::new(Extractor::list([morph::tense(), morph::voice()]))
                .given(infinitive.clone()),
        ),
        Box::new(EndingTree::new().given(infinitive.clone())),
        Box::new(
            EndingTree::new()
                .given(Predicate::all([infinitive.clone(), morph::voice_is("A")])),
        ),
        Box::new(
            PartitionCount::new(Extractor::list([morph::tense(), morph::voice()]))
                .given(infinitive.and(&morph::ends_in("ειν"))),
        ),
        Box::new(
            CrossTab::new(morph::case_is("N"), morph::ends_in("ος")).given(morph::nominal()),
        ),
        Box::new(Assert::new(morph::ends_in("ν"), morph::lemma()).given(morph::tvm_is("PAN"))),
        Box::new(
            Assert::new(morph::ends_in("ν"), morph::last3())
                .given(morph::tvm_is("PAN"))
                .unique(),
        ),
    ];

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&forms, &mut queries, &mut out).context("failed to write reports")?;

    Ok(())
}

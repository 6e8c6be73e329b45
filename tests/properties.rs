//! Property tests over generated documents.

use freqsum::nlp::{StopwordFilter, UnicodeTokenizer};
use freqsum::pipeline::TokenizedDocument;
use freqsum::summarizer::word_count;
use freqsum::{
    FrequencyTable, LanguageModel, Pipeline, SentenceScorer, TokenFilter, MAX_SENTENCE_WORDS,
    SUMMARY_SENTENCES,
};
use proptest::prelude::*;

const VOCAB: &[&str] = &[
    "rust", "memory", "safety", "compiler", "borrow", "checker", "cargo", "crate", "trait",
    "lifetime", "the", "of", "and",
];

fn model() -> LanguageModel {
    LanguageModel::with_parts(
        UnicodeTokenizer,
        StopwordFilter::from_list(&["the", "of", "and"]),
        "test",
    )
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn sentence() -> impl Strategy<Value = String> {
    (prop::collection::vec(prop::sample::select(VOCAB), 1..40), any::<bool>()).prop_map(
        |(words, capitalized)| {
            let body = words.join(" ");
            if capitalized {
                format!("{}.", capitalize(&body))
            } else {
                format!("{body}.")
            }
        },
    )
}

fn document() -> impl Strategy<Value = String> {
    prop::collection::vec(sentence(), 0..16).prop_map(|sentences| sentences.join(" "))
}

proptest! {
    #[test]
    fn prop_every_sentence_is_segmented(sentences in prop::collection::vec(sentence(), 0..16)) {
        let model = model();
        let text = sentences.join(" ");
        let doc = TokenizedDocument::new(&text, &model);

        prop_assert_eq!(doc.sentences().len(), sentences.len());
    }

    #[test]
    fn prop_max_weight_is_one(text in document()) {
        let model = model();
        let doc = TokenizedDocument::new(&text, &model);
        for filter in [TokenFilter::Alphabetic, TokenFilter::StopwordsOnly] {
            let table = FrequencyTable::build(doc.words(), &model, filter);
            if !table.is_empty() {
                prop_assert!((table.max_weight() - 1.0).abs() < 1e-12);
            }
            prop_assert!(table.iter().all(|(_, w)| (0.0..=1.0).contains(&w)));
        }
    }

    #[test]
    fn prop_pipeline_is_idempotent(text in document()) {
        let model = model();
        let pipeline = Pipeline::new();
        prop_assert_eq!(pipeline.summarize(&text, &model), pipeline.summarize(&text, &model));
    }

    #[test]
    fn prop_selection_is_top_k(text in document()) {
        let model = model();
        let doc = TokenizedDocument::new(&text, &model);
        let table = FrequencyTable::build(doc.words(), &model, TokenFilter::Alphabetic);
        let scores = SentenceScorer::new().score(doc.sentences(), &table, &model);
        let summary = Pipeline::new().summarize(&text, &model);

        prop_assert_eq!(summary.len(), scores.len().min(SUMMARY_SENTENCES));

        let selected = summary.texts();
        let min_selected = summary
            .sentences()
            .iter()
            .map(|s| s.score)
            .fold(f64::INFINITY, f64::min);
        for entry in scores.entries() {
            if !selected.contains(&entry.text.as_str()) {
                prop_assert!(entry.score <= min_selected);
            }
        }

        for pair in summary.sentences().windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn prop_long_sentences_never_selected(text in document()) {
        let summary = Pipeline::new().summarize(&text, &model());
        for sentence in summary.texts() {
            prop_assert!(word_count(sentence) < MAX_SENTENCE_WORDS);
        }
    }
}

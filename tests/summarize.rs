// End-to-end tests for the public summarization API.
//
// Covers summary length policy, degenerate documents, determinism and the
// ranking invariants across the whole pipeline.

use rustc_hash::FxHashSet;
use sentence_rank::{
    summarize, NoStopwords, OutputOrder, Sentence, SimilarityMatrixBuilder, StopwordFilter,
    SummaryConfig, TextRankSummarizer,
};

fn tokenized(texts: &[&str]) -> Vec<Sentence> {
    texts
        .iter()
        .enumerate()
        .map(|(i, t)| {
            let words: Vec<String> = t
                .split(|c: char| !c.is_alphanumeric())
                .filter(|w| !w.is_empty())
                .map(str::to_string)
                .collect();
            Sentence::new(i, *t, words)
        })
        .collect()
}

fn numbered_document(count: usize) -> String {
    (0..count)
        .map(|i| format!("Topic number {} covers subject {} in detail.", i % 4, i % 3))
        .collect::<Vec<_>>()
        .join(" ")
}

// ============================================================
// Selection count policy
// ============================================================

#[test]
fn short_document_selects_two() {
    let summary = TextRankSummarizer::new().summarize(&numbered_document(10));
    assert_eq!(summary.len(), 2);
}

#[test]
fn long_document_selects_a_fifth() {
    let summary = TextRankSummarizer::new().summarize(&numbered_document(25));
    assert_eq!(summary.len(), 5);
}

#[test]
fn never_selects_more_than_available() {
    for count in 0..30 {
        let summary = TextRankSummarizer::new().summarize(&numbered_document(count));
        assert!(summary.len() <= count);
    }
}

// ============================================================
// Degenerate documents
// ============================================================

#[test]
fn empty_document_gives_empty_summary() {
    assert_eq!(summarize(""), "");
}

#[test]
fn single_sentence_is_returned_unchanged() {
    assert_eq!(
        summarize("The only sentence in the file."),
        "The only sentence in the file."
    );
}

#[test]
fn all_stopword_document_uses_uniform_ranking() {
    let sentences = tokenized(&["The a an.", "A the.", "An a the."]);
    let summarizer =
        TextRankSummarizer::new().with_stopwords(StopwordFilter::from_list(&["the", "a", "an"]));

    let ranking = summarizer.rank_sentences(&sentences);
    assert!(ranking.scores.iter().all(|&s| (s - 1.0 / 3.0).abs() < 1e-12));

    let summary = summarizer.summarize_sentences(&sentences);
    assert_eq!(summary.as_str(), "The a an.. A the.");
}

// ============================================================
// Ranking invariants
// ============================================================

#[test]
fn cat_example_excludes_unrelated_sentence() {
    let stopwords: FxHashSet<String> = ["the".to_string()].into_iter().collect();
    let sentences = tokenized(&["The cat sat.", "The cat slept.", "Dogs bark loudly."]);
    let summarizer = TextRankSummarizer::new().with_stopwords(stopwords);

    let summary = summarizer.summarize_sentences(&sentences);
    let mut indices: Vec<usize> = summary.sentences.iter().map(|s| s.index).collect();
    indices.sort_unstable();

    assert_eq!(indices, vec![0, 1]);
}

#[test]
fn diagonal_is_always_zero() {
    let sentences = tokenized(&["same words here", "same words here", "other stuff"]);
    let matrix = SimilarityMatrixBuilder::new().build(&sentences, &NoStopwords);

    for i in 0..matrix.len() {
        assert_eq!(matrix.get(i, i), 0.0);
    }
}

#[test]
fn scores_form_a_distribution() {
    let summarizer = TextRankSummarizer::new();
    let sentences = summarizer.split(&numbered_document(15));
    let ranking = summarizer.rank_sentences(&sentences);

    assert!(ranking.converged);
    assert!(ranking.scores.iter().all(|&s| s >= 0.0));
    let sum: f64 = ranking.scores.iter().sum();
    assert!((sum - 1.0).abs() < 1e-6);
}

#[test]
fn summarization_is_deterministic() {
    let text = numbered_document(40);
    let summarizer = TextRankSummarizer::new();

    assert_eq!(
        summarizer.summarize(&text).into_string(),
        summarizer.summarize(&text).into_string()
    );
}

#[test]
fn parallel_threshold_does_not_change_output() {
    let text = numbered_document(30);
    let sequential =
        TextRankSummarizer::with_config(SummaryConfig::default().with_parallel_threshold(1000));
    let parallel =
        TextRankSummarizer::with_config(SummaryConfig::default().with_parallel_threshold(2));

    assert_eq!(sequential.summarize(&text), parallel.summarize(&text));
}

#[test]
fn document_order_sorts_selection_by_position() {
    let config = SummaryConfig::default().with_order(OutputOrder::Document);
    let summary = TextRankSummarizer::with_config(config).summarize(&numbered_document(25));

    let indices: Vec<usize> = summary.sentences.iter().map(|s| s.index).collect();
    let mut sorted = indices.clone();
    sorted.sort_unstable();
    assert_eq!(indices, sorted);
}

#[test]
fn abbreviations_stay_inside_their_sentence() {
    let summary = summarize(
        "Mr. Smith went to Washington. He met the president. The president liked Mr. Smith.",
    );

    assert!(summary.contains("Mr. Smith"));
    assert!(!summary.starts_with("Smith"));
}

use docsim_core::{build_corpus, Bag, Corpus, SimilarityMeasure, SimilarityResult};
use std::sync::Arc;
use std::thread;
use tracing_subscriber::EnvFilter;

const MEASURES: [SimilarityMeasure; 2] = [
    SimilarityMeasure::Jaccard,
    SimilarityMeasure::FrequencyDot,
];

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn reference_corpus() -> Corpus {
    init_tracing();
    build_corpus([
        "the cow jumped over the fence",
        "the rabbit ate a carrot",
        "the fox jumped over the moon",
    ])
    .expect("Failed to build corpus")
}

fn indices(results: &[SimilarityResult]) -> Vec<usize> {
    results.iter().map(|r| r.index).collect()
}

#[test]
fn test_reference_ranking_jaccard() {
    let corpus = reference_corpus();
    let results = corpus.jaccard_similarity("the rabbit jumped over the moon");
    // "the fox jumped over the moon" shares the, jumped, over, moon
    assert_eq!(results[0].index, 2);
    // "the cow jumped over the fence" shares the, jumped, over
    assert_eq!(results[1].index, 0);
    assert_eq!(results[2].index, 1);
}

#[test]
fn test_reference_ranking_frequency_dot() {
    let corpus = reference_corpus();
    let results = corpus.frequency_dot_similarity("the rabbit jumped over the moon");
    assert_eq!(indices(&results), [2, 0, 1]);
}

#[test]
fn test_single_empty_document_empty_query() {
    init_tracing();
    let corpus = build_corpus([""]).unwrap();
    for measure in MEASURES {
        let results = corpus.similarity("", measure);
        assert_eq!(results, [SimilarityResult::new(0, 0.0)], "{measure}");
        assert!(!results[0].similarity.is_nan());
    }
}

#[test]
fn test_large_documents_accepted() {
    init_tracing();
    let large = "word ".repeat(200_001);
    let corpus = build_corpus([large.as_str(), "word"]).unwrap();
    assert_eq!(corpus.len(), 2);
    assert_eq!(corpus.bag(0).unwrap().count("word"), 200_001);

    let results = corpus.jaccard_similarity("word");
    assert_eq!(indices(&results), [0, 1]);
    assert!(results.iter().all(|r| r.similarity == 1.0));
}

#[test]
fn test_results_cover_every_index_once() {
    init_tracing();
    let docs: Vec<String> = (0..40)
        .map(|i| format!("doc {} shares words like w{} and w{}", i, i % 7, i % 3))
        .collect();
    let corpus = build_corpus(docs).unwrap();
    for measure in MEASURES {
        let results = corpus.similarity("w1 and w2 words", measure);
        assert_eq!(results.len(), corpus.len());
        let mut seen = indices(&results);
        seen.sort_unstable();
        assert_eq!(seen, (0..corpus.len()).collect::<Vec<_>>());
    }
}

#[test]
fn test_ranking_is_sorted_with_index_tie_break() {
    init_tracing();
    let docs = ["apple", "banana", "apple", "cherry", "apple banana"];
    let corpus = build_corpus(docs).unwrap();
    for measure in MEASURES {
        let results = corpus.similarity("apple", measure);
        for pair in results.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!(
                a.similarity > b.similarity || (a.similarity == b.similarity && a.index < b.index),
                "{measure}: {a:?} before {b:?}"
            );
        }
        assert_eq!(indices(&results)[..2], [0, 2]);
    }
}

#[test]
fn test_repeated_queries_identical() {
    let corpus = reference_corpus();
    let q = "The Rabbit jumped over the moon!";
    for measure in MEASURES {
        let first = corpus.similarity(q, measure);
        for _ in 0..5 {
            assert_eq!(corpus.similarity(q, measure), first, "{measure}");
        }
    }
}

#[test]
fn test_case_and_punctuation_insensitive_queries() {
    let corpus = reference_corpus();
    for measure in MEASURES {
        assert_eq!(
            corpus.similarity("The Cow!", measure),
            corpus.similarity("the cow", measure)
        );
    }
    assert_eq!(Bag::from_text("The Cow!"), Bag::from_text("the cow"));
}

#[test]
fn test_self_query_scores_one_jaccard() {
    let corpus = reference_corpus();
    for (i, doc) in corpus.documents().enumerate() {
        let results = corpus.jaccard_similarity(doc);
        assert_eq!(results[0].index, i);
        assert_eq!(results[0].similarity, 1.0);
    }
}

#[test]
fn test_score_ranges() {
    let corpus = reference_corpus();
    for q in ["", "the", "moon moon moon", "zebra", "the rabbit ate a carrot"] {
        for r in corpus.jaccard_similarity(q) {
            assert!((0.0..=1.0).contains(&r.similarity), "{q:?}: {r:?}");
        }
        for r in corpus.frequency_dot_similarity(q) {
            assert!(r.similarity >= 0.0, "{q:?}: {r:?}");
        }
    }
}

#[test]
fn test_frequency_dot_empty_query_is_zero() {
    let corpus = reference_corpus();
    for q in ["", "   ", "!!! ???"] {
        assert!(corpus
            .frequency_dot_similarity(q)
            .iter()
            .all(|r| r.similarity == 0.0));
    }
}

#[test]
fn test_concurrent_queries_share_corpus() {
    let corpus = Arc::new(reference_corpus());
    let q = "the rabbit jumped over the moon";
    let expected_jaccard = corpus.jaccard_similarity(q);
    let expected_dot = corpus.frequency_dot_similarity(q);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let corpus = Arc::clone(&corpus);
            thread::spawn(move || {
                (0..50)
                    .map(|_| {
                        (
                            corpus.jaccard_similarity(q),
                            corpus.frequency_dot_similarity(q),
                        )
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        for (jaccard, dot) in handle.join().expect("query thread panicked") {
            assert_eq!(jaccard, expected_jaccard);
            assert_eq!(dot, expected_dot);
        }
    }
}

#[test]
fn test_corpus_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Corpus>();
}

#[test]
fn test_results_serialize_to_json() {
    let corpus = reference_corpus();
    let q = "the rabbit jumped over the moon";
    let results = corpus.top_k(q, SimilarityMeasure::Jaccard, 1);
    let json = serde_json::to_string(&results).unwrap();
    assert_eq!(json, r#"[{"index":2,"similarity":0.6667}]"#);
}

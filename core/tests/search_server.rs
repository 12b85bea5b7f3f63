use search_core::{ExclusionPolicy, IndexBuilder, SearchConfig, SearchError, SearchServer};

const STOP_WORDS: &str = "и в на";
const DOCS: [&str; 3] = [
    "пушистый кот пушистый хвост",
    "пушистый пёс выразительные глаза",
    "ухоженный пёс выразительные уши",
];

fn server(config: SearchConfig) -> SearchServer {
    SearchServer::from_documents(STOP_WORDS, DOCS, config).unwrap()
}

#[test]
fn ranks_fluffy_groomed_cat() {
    let results = server(SearchConfig::default()).find_top_documents("пушистый ухоженный кот");
    let ids: Vec<u32> = results.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![0, 2, 1]);

    let fluffy = 1.5f64.ln();
    let rare = 3f64.ln();
    assert!((results[0].relevance - (0.5 * fluffy + 0.25 * rare)).abs() < 1e-9);
    assert!((results[1].relevance - 0.25 * rare).abs() < 1e-9);
    assert!((results[2].relevance - 0.25 * fluffy).abs() < 1e-9);
}

#[test]
fn single_document_scores_zero_but_is_returned() {
    let s = SearchServer::from_documents("", ["кот"], SearchConfig::default()).unwrap();
    let results = s.find_top_documents("кот");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, 0);
    assert_eq!(results[0].relevance, 0.0);
}

#[test]
fn document_emptied_by_stop_words_never_ranks() {
    let s = SearchServer::from_documents("и в на", ["и в на", "кот"], SearchConfig::default()).unwrap();
    assert_eq!(s.document_count(), 2);
    for q in ["и", "кот", "и кот", "на в"] {
        assert!(s.find_top_documents(q).iter().all(|d| d.id != 0), "query {q}");
    }
}

#[test]
fn minus_words_are_ignored_by_default() {
    let results = server(SearchConfig::default()).find_top_documents("пушистый -кот");
    let ids: Vec<u32> = results.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![0, 1]);
}

#[test]
fn minus_words_filter_when_enforced() {
    let cfg = SearchConfig { exclusion: ExclusionPolicy::Enforce, ..SearchConfig::default() };
    let results = server(cfg).find_top_documents("пушистый -кот");
    let ids: Vec<u32> = results.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![1]);
}

#[test]
fn repeated_queries_are_identical() {
    let s = server(SearchConfig::default());
    assert_eq!(s.find_top_documents("пёс уши"), s.find_top_documents("пёс уши"));
}

#[test]
fn only_minus_words_match_nothing() {
    let s = server(SearchConfig::default());
    assert!(s.find_top_documents("-пёс -кот").is_empty());
    assert!(s.find_top_documents("").is_empty());
}

#[test]
fn unknown_terms_are_skipped() {
    let results = server(SearchConfig::default()).find_top_documents("жираф уши");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, 2);
}

#[test]
fn max_results_caps_output() {
    let docs: Vec<String> = (0..10).map(|i| format!("кот номер{i}")).chain(["пёс".to_string()]).collect();
    let cfg = SearchConfig { max_results: 3, ..SearchConfig::default() };
    let s = SearchServer::from_documents("", &docs, cfg).unwrap();
    let results = s.find_top_documents("кот");
    assert_eq!(results.len(), 3);
    assert_eq!(results.iter().map(|d| d.id).collect::<Vec<_>>(), vec![0, 1, 2]);
}

#[test]
fn invalid_config_is_rejected() {
    let cfg = SearchConfig { max_results: 0, ..SearchConfig::default() };
    let index = IndexBuilder::new().build().unwrap();
    assert!(matches!(SearchServer::new(index, cfg), Err(SearchError::InvalidConfig(_))));
}

#[test]
fn empty_corpus_answers_with_nothing() {
    let s = SearchServer::from_documents("", Vec::<String>::new(), SearchConfig::default()).unwrap();
    assert_eq!(s.document_count(), 0);
    assert!(s.find_top_documents("кот").is_empty());
}

#[test]
fn tab_separated_words_are_indexed() {
    let s = SearchServer::from_documents("", ["пушистый\tкот", "пёс"], SearchConfig::default()).unwrap();
    let results = s.find_top_documents("кот");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, 0);
}

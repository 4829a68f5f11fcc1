use qa_core::{load_files, AnswerConfig, IdfWeighting, LoaderConfig, QuestionAnswerer, Tokenizer};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_corpus(dir: &Path) {
    fs::write(
        dir.join("ml.txt"),
        "Machine learning is a field of study in artificial intelligence.\n\
         Neural networks are a family of machine learning models. They learn from data.\n\
         Supervised learning uses labelled examples.",
    )
    .unwrap();
    fs::write(
        dir.join("python.txt"),
        "Python is a programming language. It was created by Guido van Rossum.\n\
         Python supports multiple programming paradigms.",
    )
    .unwrap();
    fs::write(
        dir.join("probability.txt"),
        "Probability theory studies random events. Bayes' rule updates beliefs given evidence.",
    )
    .unwrap();
    fs::write(dir.join("notes.md"), "Python neural networks python python.").unwrap();
}

fn answerer(dir: &Path, config: AnswerConfig) -> QuestionAnswerer {
    let texts = load_files(dir, &LoaderConfig { extension: Some("txt".into()) }).unwrap();
    QuestionAnswerer::new(texts, Tokenizer::default(), config).unwrap()
}

#[test]
fn answers_from_the_best_file() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path());
    let qa = answerer(dir.path(), AnswerConfig::default());
    assert_eq!(qa.files().len(), 3);

    let answer = qa.answer("Who created Python?").unwrap();
    assert_eq!(answer.files.len(), 1);
    assert_eq!(answer.files[0].name, "python.txt");
    assert_eq!(answer.sentences.len(), 1);
    assert_eq!(answer.sentences[0].text, "It was created by Guido van Rossum.");
}

#[test]
fn returns_configured_number_of_sentences() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path());
    let config = AnswerConfig { file_matches: 2, sentence_matches: 3, idf_weighting: IdfWeighting::Standard };
    let qa = answerer(dir.path(), config);

    let answer = qa.answer("What are neural networks in machine learning?").unwrap();
    assert_eq!(answer.files[0].name, "ml.txt");
    assert_eq!(answer.files.len(), 2);
    assert_eq!(answer.sentences.len(), 3);
    assert_eq!(answer.sentences[0].text, "Neural networks are a family of machine learning models.");
    for pair in answer.sentences.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn empty_query_is_answered_deterministically() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path());
    let qa = answerer(dir.path(), AnswerConfig::default());

    let first = qa.answer("the of and").unwrap();
    assert!(first.query.is_empty());
    assert!(first.files.iter().all(|f| f.score == 0.0));
    assert_eq!(first.files[0].name, "ml.txt");
    assert_eq!(qa.answer("").unwrap(), first);
}

#[test]
fn answer_serializes_to_json() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path());
    let qa = answerer(dir.path(), AnswerConfig::default());

    let answer = qa.answer("Bayes rule").unwrap();
    let json: serde_json::Value = serde_json::to_value(&answer).unwrap();
    assert_eq!(json["files"][0]["name"], "probability.txt");
    assert_eq!(json["query"], serde_json::json!(["bayes", "rule"]));
    assert!(json["sentences"][0]["text"].as_str().unwrap().starts_with("Bayes' rule"));
}

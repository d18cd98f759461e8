use tempfile::tempdir;
use titlecheck_core::{write_labeled_titles, Label, LabeledTitle, TitleRecord};
use titlecheck_corpus::FakeTitleGenerator;
use titlecheck_trainer::{run_training, Pipeline, Stage, TrainConfig};

const REAL_TITLES: &[&str] = &[
    "Pride and Prejudice",
    "The Great Gatsby",
    "Moby Dick",
    "War and Peace",
    "Jane Eyre",
    "Wuthering Heights",
    "The Old Man and the Sea",
    "Brave New World",
    "Crime and Punishment",
    "The Count of Monte Cristo",
    "Little Women",
    "Great Expectations",
    "Anna Karenina",
    "Les Miserables",
    "Don Quixote",
    "Dracula",
    "Frankenstein",
    "Middlemarch",
    "Rebecca",
    "The Secret Garden",
];

fn corpus() -> Vec<LabeledTitle> {
    let mut rows: Vec<LabeledTitle> = REAL_TITLES
        .iter()
        .map(|t| LabeledTitle::new(*t, Label::Real))
        .collect();
    rows.extend(FakeTitleGenerator::with_seed(7).generate_labeled(REAL_TITLES.len()));
    rows
}

fn tiny_config() -> TrainConfig {
    TrainConfig::new()
        .with_dims(16, 8)
        .with_epochs(3)
        .with_batch_size(8)
}

#[test]
fn test_run_training_from_csv() {
    let dir = tempdir().unwrap();
    let dataset = dir.path().join("dataset.csv");
    let report = dir.path().join("reports").join("loss.json");
    write_labeled_titles(&dataset, &corpus()).unwrap();

    let config = tiny_config()
        .with_dataset(&dataset)
        .with_loss_report(&report);
    let summary = run_training(config).unwrap();

    assert_eq!(summary.epochs.len(), 3);
    assert!(summary.epochs.iter().all(|e| e.mean_loss.is_finite()));
    // 40 rows at 0.2 gives 8 test rows
    assert_eq!(summary.evaluation.total(), 8);
    assert!((0.0..=1.0).contains(&summary.evaluation.accuracy));

    let titles: Vec<&str> = summary.predictions.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["The Lord of the Rings", "Secret Alien Love Chronicles"]);

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(json["loss"].as_array().unwrap().len(), 3);
    assert_eq!(json["predictions"].as_array().unwrap().len(), 2);
}

#[test]
fn test_pipeline_loss_decreases_on_separable_data() {
    let records: Vec<TitleRecord> = corpus()
        .into_iter()
        .map(|row| TitleRecord::new(row.title, row.label))
        .collect();
    let config = TrainConfig::new()
        .with_dims(16, 16)
        .with_dropout(0.0)
        .with_learning_rate(0.01)
        .with_epochs(15)
        .with_batch_size(8);

    let mut pipeline = Pipeline::from_records(config, &records).unwrap();
    let epochs = pipeline.train().unwrap();
    assert_eq!(pipeline.stage(), Stage::Training);

    let first = epochs.first().unwrap().mean_loss;
    let last = epochs.last().unwrap().mean_loss;
    assert!(last < first, "loss did not decrease: {first} -> {last}");
}

#[test]
fn test_prediction_probability_in_range() {
    let records: Vec<TitleRecord> = corpus()
        .into_iter()
        .map(|row| TitleRecord::new(row.title, row.label))
        .collect();
    let pipeline = Pipeline::from_records(tiny_config(), &records).unwrap();

    let prediction = pipeline.predict("Completely Unseen Vocabulary").unwrap();
    assert!((0.0..=1.0).contains(&prediction.real_probability));
    let expected = if prediction.real_probability > 0.5 {
        Label::Real
    } else {
        Label::Fake
    };
    assert_eq!(prediction.label, expected);
}

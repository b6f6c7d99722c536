use rand::rngs::StdRng;
use rand::SeedableRng;

use twolayer_nn::data::{load_dataset, save_dataset};
use twolayer_nn::eval::{evaluate, save_report, EvaluateConfig};
use twolayer_nn::network::{load_network, random_network, save_network};
use twolayer_nn::prep::{parse_csv, train_test_split};
use twolayer_nn::train::{train_loop, TrainConfig};

fn synthetic_csv(rows: usize) -> String {
    let mut text = String::from("age,chol,noise,target\n");
    for i in 0..rows {
        let age = 30 + (i * 7) % 40;
        let chol = 150 + (i * 13) % 120;
        let noise = (i * 31) % 5;
        let target = u8::from(age > 50);
        text.push_str(&format!("{age},{chol},{noise},{target}\n"));
    }
    text
}

#[test]
fn csv_to_metrics_file() {
    let dir = tempfile::tempdir().unwrap();
    let train_path = dir.path().join("train.txt");
    let test_path = dir.path().join("test.txt");
    let init_path = dir.path().join("init.txt");
    let metrics_path = dir.path().join("metrics.txt");

    let table = parse_csv(&synthetic_csv(80), "target", None).unwrap();
    let mut rng = StdRng::seed_from_u64(9);
    let data = train_test_split(table, 0.25, &mut rng).unwrap();
    save_dataset(&data.train, &train_path).unwrap();
    save_dataset(&data.test, &test_path).unwrap();

    let init = random_network(3, 5, 1, &mut rng).unwrap();
    save_network(&init, &init_path).unwrap();

    let train = load_dataset(&train_path).unwrap();
    let test = load_dataset(&test_path).unwrap();
    assert_eq!(train.len(), 60);
    assert_eq!(test.len(), 20);

    let mut network = load_network(&init_path).unwrap();
    let history = train_loop(&mut network, &train, &TrainConfig::new(200, 0.5)).unwrap();
    assert!(history.last().unwrap().error_sum < history[0].error_sum);

    let report = evaluate(&network, &test, &EvaluateConfig::default()).unwrap();
    assert_eq!(report.units[0].counts.total(), test.len());
    save_report(&report, &metrics_path).unwrap();

    let written = std::fs::read_to_string(&metrics_path).unwrap();
    let first: Vec<&str> = written.lines().next().unwrap().split_whitespace().collect();
    assert_eq!(first.len(), 8);
    let counted: usize = first[..4].iter().map(|c| c.parse::<usize>().unwrap()).sum();
    assert_eq!(counted, test.len());
}

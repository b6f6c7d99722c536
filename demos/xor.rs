use twolayer_nn::{evaluate, train_loop, Dataset, EvaluateConfig, Example, Network, TrainConfig};

fn main() -> twolayer_nn::Result<()> {
    let mut network = Network::from_weights(
        vec![
            vec![0.5, 0.9, 0.4],
            vec![0.1, 0.3, 0.8],
        ],
        vec![vec![0.2, 0.6, 0.7]],
    )?;

    let rows = vec![
        (vec![1.0, 0.0], 1.0),
        (vec![1.0, 1.0], 0.0),
        (vec![0.0, 1.0], 1.0),
        (vec![0.0, 0.0], 0.0),
    ];
    let examples = rows
        .into_iter()
        .map(|(features, target)| Example { features, targets: vec![target] })
        .collect();
    let dataset = Dataset::new(examples, 2, 1)?;

    let history = train_loop(&mut network, &dataset, &TrainConfig::new(10000, 0.5))?;
    for stats in history.iter().step_by(1000) {
        println!("Epoch {}: error = {:.6}", stats.epoch, stats.error_sum);
    }

    for example in &dataset.examples {
        println!(
            "Input: {:?} -> Output: {:.4}",
            example.features,
            network.predict(&example.features)[0]
        );
    }

    let report = evaluate(&network, &dataset, &EvaluateConfig::default())?;
    println!("{}", twolayer_nn::eval::format_report(&report));
    Ok(())
}

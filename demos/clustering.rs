//! Greedy Category Utility clustering on a small colour/size/weight table.

use catclump::GreedyCu;

fn main() {
    let data: Vec<Vec<&str>> = vec![
        vec!["Blue", "Small", "False"],
        vec!["Green", "Medium", "True"],
        vec!["Red", "Large", "False"],
        vec!["Red", "Small", "True"],
        vec!["Green", "Medium", "False"],
        vec!["Yellow", "Medium", "False"],
        vec!["Red", "Large", "False"],
    ];

    // --- Greedy CU (k=2, 4 restarts) ---
    let k = 2;
    let fit = GreedyCu::new(k).with_restarts(4).fit(&data).unwrap();
    println!("=== Greedy CU (k={}, restarts=4) ===", k);
    println!("  labels: {:?}", fit.labels);
    println!(
        "  CU = {:.4} (restart {}, all: {:?})",
        fit.score, fit.best_restart, fit.restart_scores
    );

    for cluster in 0..k {
        println!("\n  cluster {}", cluster);
        for (i, record) in data.iter().enumerate() {
            if fit.labels[i] == cluster {
                println!("    {:2} {:8} {:8} {:8}", i, record[0], record[1], record[2]);
            }
        }
    }
}

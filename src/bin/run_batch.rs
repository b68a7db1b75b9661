//! Run projections for a whole scenarios CSV
//!
//! Outputs one summary row per scenario for side-by-side comparison

use std::fs::File;
use std::io::Write;
use std::time::Instant;

use savings_projector::scenario::ScenarioRunner;
use savings_projector::schedule::loader::load_schedules;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let input_path = args.next().unwrap_or_else(|| "scenarios.csv".to_string());
    let output_path = args.next().unwrap_or_else(|| "batch_summary.csv".to_string());

    let start = Instant::now();
    println!("Loading scenarios from {}...", input_path);

    let scenarios = load_schedules(&input_path).expect("Failed to load scenarios");
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let schedules: Vec<_> = scenarios.iter().map(|s| s.schedule.clone()).collect();

    println!("Running projections...");
    let proj_start = Instant::now();
    let results = ScenarioRunner::run_batch(&schedules).expect("Invalid scenario input");
    println!("Projections complete in {:?}", proj_start.elapsed());

    let mut file = File::create(&output_path).expect("Failed to create output file");

    writeln!(
        file,
        "Scenario,FinalBalance,TotalInterest,TotalDeposits,TotalWithdrawals,Years"
    )
    .unwrap();

    for (scenario, result) in scenarios.iter().zip(&results) {
        writeln!(
            file,
            "{},{:.2},{:.2},{:.2},{:.2},{}",
            scenario.name,
            result.final_balance,
            result.total_interest,
            result.total_deposits,
            result.total_withdrawals,
            result.years(),
        )
        .unwrap();
    }

    println!("Output written to {}", output_path);

    // Console preview
    println!(
        "\n{:>20} {:>14} {:>14} {:>12} {:>12}",
        "Scenario", "Final", "Interest", "Deposits", "Withdrawals"
    );
    println!("{}", "-".repeat(78));
    for (scenario, result) in scenarios.iter().zip(&results).take(24) {
        println!(
            "{:>20} {:>14.2} {:>14.2} {:>12.2} {:>12.2}",
            scenario.name,
            result.final_balance,
            result.total_interest,
            result.total_deposits,
            result.total_withdrawals,
        );
    }
    if scenarios.len() > 24 {
        println!("... ({} more scenarios)", scenarios.len() - 24);
    }
}

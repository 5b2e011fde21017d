use ticketlens_core::{Dataset, Paths};
use ticketlens_report::{
    averages_table, bar_chart, build_recommendations, elapsed_hours, grid_table, parse_timestamp,
    CategoryAverages,
};
use ticketlens_text::{FrequencyTable, Stopwords, Tokenizer};
use tracing::debug;

const DEFAULT_DATASET: &str = "customer_support_tickets.csv";
const CHART_WIDTH: usize = 40;

pub fn run(file: Option<&str>) -> anyhow::Result<()> {
    let path = file.unwrap_or(DEFAULT_DATASET);
    let dataset = Dataset::from_csv(path)?;
    debug!(rows = dataset.len(), path, "dataset loaded");

    // Cached stop-word list when available, embedded copy otherwise
    let stopwords = match Paths::new() {
        Ok(paths) => Stopwords::ensure(&paths).unwrap_or_else(|_| Stopwords::embedded()),
        Err(_) => Stopwords::embedded(),
    };
    let tokenizer = Tokenizer::new(stopwords);

    let frequency = build_frequency(&dataset, &tokenizer);
    let ranked = frequency.ranked();
    debug!(
        distinct = frequency.distinct(),
        total = frequency.total(),
        "token frequencies counted"
    );

    println!("Most Common Issues");
    println!("==================");
    if ranked.is_empty() {
        println!("  (none)");
    } else {
        for (token, count) in &ranked {
            println!("  {token}: {count}");
        }
        println!();
        println!("{}", bar_chart(&ranked, CHART_WIDTH));
    }

    let resolution = resolution_averages(&dataset);
    println!();
    println!("Average Resolution Time Per Ticket Type (hours)");
    println!("-----------------------------------------------");
    println!("{}", averages_table(resolution.rows()));

    let satisfaction = satisfaction_averages(&dataset);
    println!();
    println!("Average Customer Satisfaction Per Ticket Type");
    println!("---------------------------------------------");
    println!("{}", averages_table(satisfaction.rows()));

    let rows: Vec<(String, String)> = build_recommendations(&ranked)
        .into_iter()
        .map(|(token, solution)| (token, solution.to_string()))
        .collect();
    println!();
    println!("{}", grid_table(("Common Issue", "Suggested Solution"), &rows));

    println!();
    println!("Recommendations:");
    println!("1. Prioritize ticket types with high resolution times for process improvements.");
    println!("2. Automate common issues to reduce handling time.");
    println!("3. Focus on low-rated issues to improve customer satisfaction.");

    Ok(())
}

/// Tokenize the ticket type column of every record and fold the sequences
/// into a global frequency table
fn build_frequency(dataset: &Dataset, tokenizer: &Tokenizer) -> FrequencyTable {
    let mut frequency = FrequencyTable::new();
    for record in dataset.records() {
        let tokens = tokenizer.tokenize(&record.ticket_type);
        frequency.observe(&tokens);
    }
    frequency
}

fn resolution_averages(dataset: &Dataset) -> CategoryAverages {
    CategoryAverages::compute(dataset.records().iter().map(|record| {
        let first = parse_timestamp(&record.first_response_time);
        let resolved = parse_timestamp(&record.time_to_resolution);
        (record.ticket_type.as_str(), elapsed_hours(first, resolved))
    }))
}

fn satisfaction_averages(dataset: &Dataset) -> CategoryAverages {
    CategoryAverages::compute(
        dataset
            .records()
            .iter()
            .map(|record| (record.ticket_type.as_str(), record.satisfaction_rating)),
    )
}

use bakery_recipe::lifecycle::{setup_tracing, Bakery, Scenario};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    // An optional JSON scenario file; the two-baker demo otherwise.
    let scenario = match std::env::args().nth(1) {
        Some(path) => Scenario::load(&path).map_err(|e| e.to_string())?,
        None => Scenario::demo(),
    };
    info!(
        bakers = scenario.config.bakers,
        orders = scenario.orders.len(),
        "Starting bakery"
    );

    let report = match Bakery::serve(scenario).await {
        Ok(report) => report,
        Err(e) => {
            error!(error = %e, "Bakery run failed");
            return Err(e.to_string());
        }
    };

    for record in &report.telemetry.batches {
        println!(
            "Baker {} baked batch {} ({} breads) for {}",
            record.baker.0, record.batch, record.size, record.customer
        );
    }
    for pickup in &report.pickups {
        println!(
            "Customer {} has picked up {} breads after {:.2} seconds",
            pickup.customer,
            pickup.breads.len(),
            pickup.waited.as_secs_f64()
        );
    }
    println!("All orders are complete.");
    println!("\n{}", report.telemetry.statistics);
    Ok(())
}

use delivery_planner::{BestRoutePlanner, DeliveryRequest, DeliverySolver, Location};
use std::error::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Driver starts in Koramangala, Bengaluru
    let request = DeliveryRequest {
        driver: Location::new(12.9716, 77.5946),
        restaurant1: Location::new(12.9343, 77.6214),
        restaurant2: Location::new(12.9321, 77.6101),
        consumer1: Location::new(12.9352, 77.6245),
        consumer2: Location::new(12.9279, 77.6271),
        preparation_time1: 15.0, // minutes
        preparation_time2: 20.0, // minutes
        travel_speed: 20.0,      // km/h
    };

    let planner = BestRoutePlanner::new(request)?;
    info!(?request, convention = ?planner.convention(), "Planning delivery");

    let best_route = planner.find_best_route();
    println!("{}", best_route.report(planner.convention()));

    Ok(())
}

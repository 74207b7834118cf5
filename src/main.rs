use clap::Parser;
use fleet_rental::utils::{logger, validation::Validate};
use fleet_rental::{CliConfig, Customer, Rentable, RentalAgency, Vehicle};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting fleet-rental demo");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let mut agency = RentalAgency::new();
    agency.add_vehicle(Vehicle::car("CAR123", "Toyota", 50.0, true)?);
    agency.add_vehicle(Vehicle::truck("TRUCK123", "Ford", 100.0, 500.0)?);
    agency.add_vehicle(Vehicle::motorcycle("MOTO123", "Harley", 30.0)?);

    let mut customer = Customer::new(config.customer.clone())?;

    let bookings = [
        ("Toyota", config.car_days),
        ("Ford", config.truck_days),
        ("Harley", config.motorcycle_days),
    ];

    for (model, days) in bookings {
        match agency.find_available_vehicle_mut(model) {
            Some(vehicle) => {
                let transaction = vehicle.rent(&mut customer, days)?;
                println!(
                    "✅ Rented {} ({}) to {} for {} days: ${}",
                    model,
                    transaction.vehicle_id(),
                    customer.name(),
                    days,
                    transaction.total_cost()
                );
            }
            None => {
                tracing::warn!(model, "no available vehicle for model");
                eprintln!("❌ No available {} in the fleet", model);
            }
        }
    }

    for transaction in customer.rental_history() {
        if let Some(vehicle) = agency.vehicle_mut(transaction.vehicle_id()) {
            vehicle.return_vehicle();
        }
    }
    tracing::info!("All vehicles returned");

    if config.json {
        println!("{}", agency.fleet_json()?);
    }

    Ok(())
}

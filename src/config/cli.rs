use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_rental_days, Validate};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "fleet-rental")]
#[command(about = "A small vehicle rental agency demo")]
pub struct CliConfig {
    /// Name of the customer renting the sample fleet
    #[arg(long, default_value = "John Doe")]
    pub customer: String,

    /// Rental duration in days for the car
    #[arg(long, default_value = "3")]
    pub car_days: u32,

    /// Rental duration in days for the truck
    #[arg(long, default_value = "5")]
    pub truck_days: u32,

    /// Rental duration in days for the motorcycle
    #[arg(long, default_value = "2")]
    pub motorcycle_days: u32,

    /// Print the final fleet state as JSON
    #[arg(long)]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("customer", &self.customer)?;
        validate_rental_days(self.car_days)?;
        validate_rental_days(self.truck_days)?;
        validate_rental_days(self.motorcycle_days)?;
        Ok(())
    }
}

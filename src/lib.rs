pub mod config;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use domain::agency::RentalAgency;
pub use domain::model::{Customer, RentalTransaction, Vehicle, VehicleKind};
pub use domain::ports::Rentable;
pub use utils::error::{RentalError, Result};

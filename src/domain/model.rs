use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_non_negative, validate_positive_rate,
};

/// The closed set of vehicle kinds the agency rents out, with kind-specific
/// pricing data. Adding a kind forces every pricing match to be revisited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VehicleKind {
    Car { has_gps: bool },
    Motorcycle,
    Truck { cargo_capacity: f64 },
}

/// A rentable vehicle: common attributes plus its kind.
///
/// Invariants: `vehicle_id` and `model` are never empty, `base_rental_rate`
/// is always positive, a truck's cargo capacity is never negative. All
/// constructors and setters enforce this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    vehicle_id: String,
    model: String,
    base_rental_rate: f64,
    available: bool,
    kind: VehicleKind,
}

impl Vehicle {
    pub fn new(
        vehicle_id: impl Into<String>,
        model: impl Into<String>,
        base_rental_rate: f64,
        kind: VehicleKind,
    ) -> Result<Self> {
        let vehicle_id = vehicle_id.into();
        let model = model.into();

        validate_non_empty_string("vehicle_id", &vehicle_id)?;
        validate_non_empty_string("model", &model)?;
        validate_positive_rate("base_rental_rate", base_rental_rate)?;
        if let VehicleKind::Truck { cargo_capacity } = kind {
            validate_non_negative("cargo_capacity", cargo_capacity)?;
        }

        Ok(Self {
            vehicle_id,
            model,
            base_rental_rate,
            available: true,
            kind,
        })
    }

    pub fn car(
        vehicle_id: impl Into<String>,
        model: impl Into<String>,
        base_rental_rate: f64,
        has_gps: bool,
    ) -> Result<Self> {
        Self::new(
            vehicle_id,
            model,
            base_rental_rate,
            VehicleKind::Car { has_gps },
        )
    }

    pub fn motorcycle(
        vehicle_id: impl Into<String>,
        model: impl Into<String>,
        base_rental_rate: f64,
    ) -> Result<Self> {
        Self::new(vehicle_id, model, base_rental_rate, VehicleKind::Motorcycle)
    }

    pub fn truck(
        vehicle_id: impl Into<String>,
        model: impl Into<String>,
        base_rental_rate: f64,
        cargo_capacity: f64,
    ) -> Result<Self> {
        Self::new(
            vehicle_id,
            model,
            base_rental_rate,
            VehicleKind::Truck { cargo_capacity },
        )
    }

    pub fn vehicle_id(&self) -> &str {
        &self.vehicle_id
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn set_model(&mut self, model: impl Into<String>) -> Result<()> {
        let model = model.into();
        validate_non_empty_string("model", &model)?;
        self.model = model;
        Ok(())
    }

    pub fn base_rental_rate(&self) -> f64 {
        self.base_rental_rate
    }

    pub fn set_base_rental_rate(&mut self, rate: f64) -> Result<()> {
        validate_positive_rate("base_rental_rate", rate)?;
        self.base_rental_rate = rate;
        Ok(())
    }

    pub fn kind(&self) -> &VehicleKind {
        &self.kind
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    /// Whether this vehicle can currently be handed to a customer. For now
    /// this is plain availability; kind-specific eligibility rules (e.g.
    /// maintenance holds) would slot in here.
    pub fn is_available_for_rental(&self) -> bool {
        self.available
    }

    /// Computes the rental price for the given duration from the current
    /// rate and kind. Pure; does not touch availability.
    pub fn rental_cost(&self, days: u32) -> f64 {
        let base = self.base_rental_rate * days as f64;
        match self.kind {
            VehicleKind::Car { has_gps } => {
                if has_gps {
                    base + 10.0 * days as f64
                } else {
                    base
                }
            }
            VehicleKind::Motorcycle => base * 0.8,
            VehicleKind::Truck { cargo_capacity } => base + cargo_capacity * 5.0,
        }
    }
}

/// A customer and their append-only rental history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    name: String,
    rental_history: Vec<RentalTransaction>,
}

impl Customer {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_non_empty_string("name", &name)?;
        Ok(Self {
            name,
            rental_history: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_rental(&mut self, transaction: RentalTransaction) {
        self.rental_history.push(transaction);
    }

    pub fn rental_history(&self) -> &[RentalTransaction] {
        &self.rental_history
    }
}

/// An immutable record of one rental. References customer and vehicle by
/// stable identifier and snapshots the cost at rent time, so later rate
/// changes do not rewrite history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalTransaction {
    customer_name: String,
    vehicle_id: String,
    days: u32,
    total_cost: f64,
    rented_at: DateTime<Utc>,
}

impl RentalTransaction {
    pub(crate) fn new(customer: &Customer, vehicle: &Vehicle, days: u32) -> Self {
        Self {
            customer_name: customer.name().to_string(),
            vehicle_id: vehicle.vehicle_id().to_string(),
            days,
            total_cost: vehicle.rental_cost(days),
            rented_at: Utc::now(),
        }
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn vehicle_id(&self) -> &str {
        &self.vehicle_id
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub fn rented_at(&self) -> DateTime<Utc> {
        self.rented_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::RentalError;

    #[test]
    fn test_new_vehicle_starts_available() {
        let car = Vehicle::car("CAR123", "Toyota", 50.0, true).unwrap();
        assert!(car.is_available());
        assert!(car.is_available_for_rental());
    }

    #[test]
    fn test_construction_rejects_invalid_arguments() {
        assert!(matches!(
            Vehicle::car("", "Toyota", 50.0, false),
            Err(RentalError::InvalidArgument { .. })
        ));
        assert!(matches!(
            Vehicle::car("CAR123", "", 50.0, false),
            Err(RentalError::InvalidArgument { .. })
        ));
        assert!(matches!(
            Vehicle::car("CAR123", "Toyota", 0.0, false),
            Err(RentalError::InvalidArgument { .. })
        ));
        assert!(matches!(
            Vehicle::car("CAR123", "Toyota", -5.0, false),
            Err(RentalError::InvalidArgument { .. })
        ));
        assert!(matches!(
            Vehicle::truck("TRUCK123", "Ford", 100.0, -1.0),
            Err(RentalError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_setters_enforce_invariants() {
        let mut car = Vehicle::car("CAR123", "Toyota", 50.0, false).unwrap();

        assert!(car.set_model("Honda").is_ok());
        assert_eq!(car.model(), "Honda");
        assert!(car.set_model("").is_err());
        assert_eq!(car.model(), "Honda");

        assert!(car.set_base_rental_rate(60.0).is_ok());
        assert_eq!(car.base_rental_rate(), 60.0);
        assert!(car.set_base_rental_rate(0.0).is_err());
        assert_eq!(car.base_rental_rate(), 60.0);
    }

    #[test]
    fn test_car_pricing_with_and_without_gps() {
        let with_gps = Vehicle::car("CAR1", "Toyota", 50.0, true).unwrap();
        assert_eq!(with_gps.rental_cost(3), 180.0);

        let without_gps = Vehicle::car("CAR2", "Toyota", 50.0, false).unwrap();
        assert_eq!(without_gps.rental_cost(3), 150.0);
    }

    #[test]
    fn test_motorcycle_pricing_applies_discount() {
        let moto = Vehicle::motorcycle("MOTO123", "Harley", 30.0).unwrap();
        assert_eq!(moto.rental_cost(2), 48.0);
    }

    #[test]
    fn test_truck_pricing_includes_cargo_surcharge() {
        let truck = Vehicle::truck("TRUCK123", "Ford", 100.0, 500.0).unwrap();
        assert_eq!(truck.rental_cost(5), 3000.0);
    }

    #[test]
    fn test_transaction_snapshots_cost_at_rent_time() {
        let mut car = Vehicle::car("CAR123", "Toyota", 50.0, false).unwrap();
        let customer = Customer::new("John Doe").unwrap();

        let transaction = RentalTransaction::new(&customer, &car, 3);
        assert_eq!(transaction.total_cost(), 150.0);

        car.set_base_rental_rate(80.0).unwrap();
        assert_eq!(transaction.total_cost(), 150.0);
    }

    #[test]
    fn test_customer_rejects_empty_name() {
        assert!(matches!(
            Customer::new(""),
            Err(RentalError::InvalidArgument { .. })
        ));
        assert!(Customer::new("John Doe").is_ok());
    }

    #[test]
    fn test_rental_history_preserves_insertion_order() {
        let car = Vehicle::car("CAR123", "Toyota", 50.0, false).unwrap();
        let moto = Vehicle::motorcycle("MOTO123", "Harley", 30.0).unwrap();
        let mut customer = Customer::new("John Doe").unwrap();

        let first = RentalTransaction::new(&customer, &car, 3);
        customer.add_rental(first);
        let second = RentalTransaction::new(&customer, &moto, 2);
        customer.add_rental(second);

        let history = customer.rental_history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].vehicle_id(), "CAR123");
        assert_eq!(history[1].vehicle_id(), "MOTO123");
    }
}

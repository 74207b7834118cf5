use crate::domain::model::{Customer, RentalTransaction, Vehicle};
use crate::utils::error::{RentalError, Result};
use crate::utils::validation::validate_rental_days;

/// The rent/return capability. Kept as a trait so callers can stay generic
/// over anything rentable, even though `Vehicle` is the only implementor.
pub trait Rentable {
    /// Rents to the given customer for `days` days. On success the
    /// transaction is appended to the customer's history, the vehicle
    /// becomes unavailable, and a copy of the transaction is returned.
    fn rent(&mut self, customer: &mut Customer, days: u32) -> Result<RentalTransaction>;

    /// Marks the vehicle available again. Idempotent; returning a vehicle
    /// that was never rented is a no-op.
    fn return_vehicle(&mut self);
}

impl Rentable for Vehicle {
    fn rent(&mut self, customer: &mut Customer, days: u32) -> Result<RentalTransaction> {
        validate_rental_days(days)?;

        if !self.is_available_for_rental() {
            return Err(RentalError::VehicleUnavailable {
                vehicle_id: self.vehicle_id().to_string(),
                model: self.model().to_string(),
            });
        }

        let transaction = RentalTransaction::new(customer, self, days);
        customer.add_rental(transaction.clone());
        self.set_available(false);

        tracing::debug!(
            vehicle_id = %self.vehicle_id(),
            customer = %customer.name(),
            days,
            total_cost = transaction.total_cost(),
            "vehicle rented"
        );

        Ok(transaction)
    }

    fn return_vehicle(&mut self) {
        self.set_available(true);
        tracing::debug!(vehicle_id = %self.vehicle_id(), "vehicle returned");
    }
}

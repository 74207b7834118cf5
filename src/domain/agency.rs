use serde::{Deserialize, Serialize};

use crate::domain::model::Vehicle;
use crate::utils::error::Result;

/// The fleet registry. Vehicles are kept in registration order and looked
/// up by exact model name or by identifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RentalAgency {
    fleet: Vec<Vehicle>,
}

impl RentalAgency {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_vehicle(&mut self, vehicle: Vehicle) {
        tracing::debug!(
            vehicle_id = %vehicle.vehicle_id(),
            model = %vehicle.model(),
            "vehicle registered"
        );
        self.fleet.push(vehicle);
    }

    /// First vehicle in registration order whose model matches exactly and
    /// which is available for rental. `None` is the normal no-match outcome,
    /// not an error.
    pub fn find_available_vehicle(&self, model: &str) -> Option<&Vehicle> {
        self.fleet
            .iter()
            .find(|vehicle| vehicle.model() == model && vehicle.is_available_for_rental())
    }

    /// Mutable variant of [`find_available_vehicle`](Self::find_available_vehicle),
    /// for callers that go on to rent the match.
    pub fn find_available_vehicle_mut(&mut self, model: &str) -> Option<&mut Vehicle> {
        self.fleet
            .iter_mut()
            .find(|vehicle| vehicle.model() == model && vehicle.is_available_for_rental())
    }

    /// Looks a vehicle up by identifier regardless of availability, e.g. to
    /// process a return.
    pub fn vehicle_mut(&mut self, vehicle_id: &str) -> Option<&mut Vehicle> {
        self.fleet
            .iter_mut()
            .find(|vehicle| vehicle.vehicle_id() == vehicle_id)
    }

    pub fn fleet(&self) -> &[Vehicle] {
        &self.fleet
    }

    /// Pretty-printed JSON view of the fleet, for dumps or an external
    /// storage layer.
    pub fn fleet_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.fleet)?)
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RentalError {
    #[error("Invalid {field} '{value}': {reason}")]
    InvalidArgument {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Vehicle '{vehicle_id}' ({model}) is not available for rental")]
    VehicleUnavailable { vehicle_id: String, model: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RentalError>;

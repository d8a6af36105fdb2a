//! Request and response value objects.
//!
//! Everything here is request-scoped: built for one query, serialized into
//! one response, never persisted.

pub mod hotel;
pub mod location;
pub mod places;
pub mod query;
pub mod response;
pub mod weather;

pub use hotel::{HotelOffer, HotelPrice};
pub use location::Location;
pub use places::PointOfInterest;
pub use query::TravelQuery;
pub use response::TravelGuideResult;
pub use weather::WeatherSnapshot;

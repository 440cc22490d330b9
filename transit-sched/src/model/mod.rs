mod calendar;
mod calendar_exception;
pub mod date_codec;
mod restriction_code;
mod trip;
mod trip_instance;

pub use calendar::Calendar;
pub use calendar_exception::ExceptionKind;
pub use restriction_code::RestrictionCode;
pub use trip::Trip;
pub use trip_instance::TripInstance;

/// the network's internal identifier for a directed link. distinct from the
/// stable identifier carried by the source line feature it was derived from.
pub type EdgeId = usize;

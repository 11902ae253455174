mod listing_format;
mod log_level;

pub use listing_format::ListingFormat;
pub use log_level::LogLevel;

pub mod app_config;
pub mod card;
pub mod config;
pub mod error;
pub mod filters;
pub mod maps;
pub mod options;
pub mod venue;

pub use app_config::{localize_address, AppConfig, Environment};
pub use card::VenueCard;
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{ConfigError, FilterError};
pub use filters::{SearchFilters, SearchRadius};
pub use maps::MapsLink;
pub use venue::{Coordinates, PriceLevel, Venue};

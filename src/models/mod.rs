pub mod appointment;
pub mod option;
pub mod role;
pub mod view_mode;
pub mod window;

pub use appointment::{Appointment, Moderation, Participant};
pub use option::{ConfigurableOption, TaxonomyConfig, TaxonomyField};
pub use role::UserRole;
pub use view_mode::ViewMode;
pub use window::{DayBucket, ViewWindow};

pub mod agenda;
pub mod bucket;
pub mod permission;
pub mod status;
pub mod taxonomy;
pub mod view;
pub mod window;

pub use agenda::sort_for_agenda;
pub use bucket::{bucket_by_date, filter_by_window};
pub use permission::can_modify_status;
pub use taxonomy::resolve_taxonomy;
pub use window::compute_window;

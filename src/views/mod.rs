pub mod format;
pub mod layout;
pub mod customer;
pub mod rider;
pub mod boss;

pub use layout::render_app;
pub use customer::render_customer_page;
pub use rider::render_rider_page;
pub use boss::render_boss_page;

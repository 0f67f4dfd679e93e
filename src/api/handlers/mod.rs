//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod analytics;
pub mod health;
pub mod links;
pub mod maintenance;
pub mod redirect;

pub use analytics::{link_analytics_handler, overview_handler};
pub use health::health_handler;
pub use links::{
    create_link_handler, delete_link_by_id_handler, delete_link_handler, get_link_handler,
    list_links_handler,
};
pub use maintenance::sweep_handler;
pub use redirect::redirect_handler;

//! Email capture for the marketing site: two JSON endpoints forwarding
//! waitlist and feedback sign-ups to the contacts provider, and the modal
//! controller that drives the capture forms.

pub mod api_client;
pub mod capture_error;
pub mod configuration;
pub mod contacts_client;
pub mod domain;
pub mod gateway;
pub mod modal;
pub mod routes;
pub mod startup;
pub mod telemetry;
pub mod utils;

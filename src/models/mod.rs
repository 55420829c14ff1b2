pub mod activity;

pub use activity::{Activity, ActivityCatalog, SignupConfirmation};

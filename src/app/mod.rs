pub mod app;
pub mod calc;
pub mod dashboard;
pub mod errors;
pub mod form;
pub mod present;
pub mod ui;
pub mod utils;

pub use app::App;
pub use dashboard::{Dashboard, PassOutcome, run_pass};
pub use errors::PassError;
pub use form::InputForm;

//! Login form: state machine, controller and HTML view.

pub mod controller;
pub mod form;
pub mod view;

pub use self::controller::LoginFormController;
pub use self::form::{LoginFormState, Navigation, Phase, SubmitDecision};

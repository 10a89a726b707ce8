pub mod controller;
pub mod event;
pub mod state;
pub mod validity;

pub use controller::{ModeSink, Outcome, RegistrationController};
pub use event::FormEvent;
pub use state::{Effect, FormFields, Phase, RegistrationForm, Transition};
pub use validity::{ConstraintValidity, FixedValidity, FormValiditySource};

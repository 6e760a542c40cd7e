//! Patients, doctors and their inflammation observations.
//!
//! The model keeps each patient's history as a sequence of [`Observation`]s
//! rather than as a row of an inflammation table. People are modelled by
//! composition: [`Patient`] and [`Doctor`] each embed a [`Person`], expose it
//! through [`AsRef<Person>`], and share the [`Named`] capability.
//!
//! # Examples
//!
//! ```
//! use inflammation_model::{Doctor, Named, Patient};
//!
//! let mut alice = Patient::new("Alice");
//! assert_eq!(alice.add_observation(3.0, None).day(), 0);
//! assert_eq!(alice.add_observation(4.0, None).day(), 1);
//! assert_eq!(alice.last_observation().unwrap().value(), 4.0);
//!
//! let mut evan = Doctor::new("Evan");
//! evan.add_patient(alice.clone());
//! evan.add_patient(alice);
//! assert_eq!(evan.patients().len(), 1);
//! assert_eq!(evan.name(), "Evan");
//! ```

pub use self::{
    doctor::Doctor,
    observation::Observation,
    patient::Patient,
    person::{Named, Person},
};

mod doctor;
mod observation;
mod patient;
mod person;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("patient {patient:?} has no observations")]
pub struct NoObservationsError {
    pub patient: String,
}

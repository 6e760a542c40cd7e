use std::fmt;

use crate::{Named, Patient, Person};

/// A person responsible for a group of patients.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Doctor {
    #[serde(flatten)]
    person: Person,
    patients: Vec<Patient>,
}

impl Doctor {
    #[must_use]
    pub fn new<N>(name: N) -> Self
    where
        N: Into<String>,
    {
        Self {
            person: Person::new(name),
            patients: vec![],
        }
    }

    /// Patients in the order they were added.
    #[must_use]
    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    /// Adds a patient unless an equal patient is already assigned.
    ///
    /// Returns whether the patient was added.
    pub fn add_patient(&mut self, patient: Patient) -> bool {
        if self.patients.contains(&patient) {
            return false;
        }
        self.patients.push(patient);
        true
    }
}

impl Named for Doctor {
    fn name(&self) -> &str {
        self.person.name()
    }
}

impl AsRef<Person> for Doctor {
    fn as_ref(&self) -> &Person {
        &self.person
    }
}

impl fmt::Display for Doctor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.person, f)
    }
}

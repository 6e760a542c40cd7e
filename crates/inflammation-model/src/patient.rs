use std::fmt;

use crate::{Named, NoObservationsError, Observation, Person};

/// A person whose inflammation is being tracked.
///
/// Observations are kept in insertion order, which is treated as
/// chronological order.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Patient {
    #[serde(flatten)]
    person: Person,
    observations: Vec<Observation>,
}

impl Patient {
    /// Creates a patient with no observations.
    #[must_use]
    pub fn new<N>(name: N) -> Self
    where
        N: Into<String>,
    {
        Self::with_observations(name, vec![])
    }

    /// Creates a patient with an existing observation history.
    ///
    /// The given sequence is used as-is, even when it is empty.
    #[must_use]
    pub fn with_observations<N>(name: N, observations: Vec<Observation>) -> Self
    where
        N: Into<String>,
    {
        Self {
            person: Person::new(name),
            observations,
        }
    }

    /// Creates a patient from one row of an inflammation table.
    ///
    /// The `i`-th reading becomes the observation for day `i`.
    ///
    /// # Examples
    ///
    /// ```
    /// use inflammation_model::Patient;
    ///
    /// let patient = Patient::from_readings("Alice", [0.0, 2.0, 5.0]);
    /// let last = patient.last_observation().unwrap();
    /// assert_eq!((last.day(), last.value()), (2, 5.0));
    /// ```
    #[must_use]
    pub fn from_readings<N, I>(name: N, readings: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = f64>,
    {
        let observations = (0..)
            .zip(readings)
            .map(|(day, value)| Observation::new(day, value))
            .collect();
        Self::with_observations(name, observations)
    }

    #[must_use]
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Records a new observation and returns it.
    ///
    /// Without an explicit `day`, the observation is dated the day after the
    /// most recent one, or day 0 if the patient has no observations yet.
    /// The inferred day saturates at `u32::MAX`.
    pub fn add_observation(&mut self, value: f64, day: Option<u32>) -> Observation {
        let day = match (day, self.observations.last()) {
            (Some(day), _) => day,
            (None, Some(last)) => last.day().saturating_add(1),
            (None, None) => 0,
        };

        let observation = Observation::new(day, value);
        self.observations.push(observation);
        observation
    }

    /// Returns the most recently added observation.
    pub fn last_observation(&self) -> Result<&Observation, NoObservationsError> {
        self.observations.last().ok_or_else(|| NoObservationsError {
            patient: self.person.name().to_owned(),
        })
    }
}

impl Named for Patient {
    fn name(&self) -> &str {
        self.person.name()
    }
}

impl AsRef<Person> for Patient {
    fn as_ref(&self) -> &Person {
        &self.person
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.person, f)
    }
}

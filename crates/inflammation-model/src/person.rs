use std::fmt;

/// Something identified by a human-readable name.
///
/// Implemented by [`Person`] and by every entity that embeds one, so patients
/// and doctors can be handled uniformly wherever only the name matters.
pub trait Named {
    fn name(&self) -> &str;
}

/// A person, identified by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Person {
    name: String,
}

impl Person {
    #[must_use]
    pub fn new<N>(name: N) -> Self
    where
        N: Into<String>,
    {
        Self { name: name.into() }
    }
}

impl Named for Person {
    fn name(&self) -> &str {
        &self.name
    }
}

impl AsRef<Person> for Person {
    fn as_ref(&self) -> &Person {
        self
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.name, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_person() {
        let bob = Person::new("Bob");
        assert_eq!(bob.name(), "Bob");
        assert_eq!(bob.to_string(), "Bob");
    }
}

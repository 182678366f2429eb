//! Person module - the participants being matched

/// Identifier of a person, unique within a corpus
pub type PersonId = i64;

/// Something a person works through: an organisation, project or role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    /// Short title (e.g. an organisation name)
    pub title: String,

    /// Optional longer description or mission statement
    pub description: Option<String>,
}

impl Vehicle {
    /// Create a vehicle with a title only
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    /// Attach a description
    ///
    /// Empty descriptions are treated as absent.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.description = if description.is_empty() {
            None
        } else {
            Some(description)
        };
        self
    }
}

/// A participant in the matching corpus
///
/// People are created by the corpus loader and never mutated afterwards.
///
/// # Examples
///
/// ```
/// use rapport_domain::{Person, Vehicle};
///
/// let alice = Person::new(1, "Alice")
///     .with_values(["cake", "respect"])
///     .with_visions(["The world is beautiful"])
///     .with_vehicles([Vehicle::new("Owns a candy company")]);
///
/// assert_eq!(alice.id, 1);
/// assert_eq!(alice.values.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    /// Stable identifier
    pub id: PersonId,

    /// Display name
    pub name: String,

    /// Things the person values, in their own order
    pub values: Vec<String>,

    /// How the person sees the world they want to build
    pub visions: Vec<String>,

    /// Organisations and roles the person acts through
    pub vehicles: Vec<Vehicle>,
}

impl Person {
    /// Create a person with empty attribute lists
    pub fn new(id: PersonId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            values: Vec::new(),
            visions: Vec::new(),
            vehicles: Vec::new(),
        }
    }

    /// Set the values list
    pub fn with_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Set the visions list
    pub fn with_visions<I, S>(mut self, visions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.visions = visions.into_iter().map(Into::into).collect();
        self
    }

    /// Set the vehicles list
    pub fn with_vehicles(mut self, vehicles: impl IntoIterator<Item = Vehicle>) -> Self {
        self.vehicles = vehicles.into_iter().collect();
        self
    }
}

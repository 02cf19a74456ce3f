use std::collections::BTreeSet;
use std::fmt;

/// Tag names the engine reads or writes.
pub mod tag {
    /// Identity tag carried by every sheep.
    pub const SHEEP: &str = "sheep";
    /// Identity tag carried by every wolf.
    pub const WOLF: &str = "wolf";
    /// Identity tag carried by the shepherd.
    pub const SHEPHERD: &str = "shepherd";
    /// Marks an agent wolves hunt and that flees wolves.
    pub const PREY: &str = "prey";
    /// Marks an agent for removal in the next cull phase.
    pub const DEAD: &str = "dead";
    /// Set on a wolf that killed this tick; consumed by its starvation update.
    pub const EAT: &str = "eat";
    /// Set on a female after mating; consumed by the spawn phase.
    pub const PREGNANT: &str = "pregnant";
    /// Eligible to mate.
    pub const CAN_PROCREATE: &str = "canprocreate";
    /// Male sheep.
    pub const MALE: &str = "male";
    /// Female sheep.
    pub const FEMALE: &str = "female";
}

/// The set of string tags that carries an agent's behavioral state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tags(BTreeSet<String>);

impl Tags {
    /// Create an empty tag set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `true` if the tag is present.
    pub fn has(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    /// Add a tag. Returns `true` if it was not already present.
    pub fn add(&mut self, tag: impl Into<String>) -> bool {
        self.0.insert(tag.into())
    }

    /// Remove a tag. Returns `true` if it was present.
    pub fn remove(&mut self, tag: &str) -> bool {
        self.0.remove(tag)
    }

    /// Tags in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of tags set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return `true` if no tag is set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Tags {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for Tags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<&str> = self.iter().collect();
        write!(f, "[{}]", parts.join(", "))
    }
}

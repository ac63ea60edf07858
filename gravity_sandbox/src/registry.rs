//! Append-only storage for the simulated bodies

use crate::body::Body;
use crate::error::InvalidBodyError;

/// Stable handle to a body; valid for the lifetime of the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(usize);

impl BodyId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Ordered set of bodies. Bodies are never removed or reordered.
#[derive(Debug, Clone, Default)]
pub struct BodyRegistry {
    bodies: Vec<Body>,
}

impl BodyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append a body, returning its handle
    ///
    /// A rejected body leaves the registry untouched.
    pub fn add(&mut self, body: Body) -> Result<BodyId, InvalidBodyError> {
        body.validate()?;
        let id = BodyId(self.bodies.len());
        self.bodies.push(body);
        Ok(id)
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    /// Bodies in insertion order
    pub fn as_slice(&self) -> &[Body] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Only the step loop mutates bodies in place
    pub(crate) fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }
}

impl<'a> IntoIterator for &'a BodyRegistry {
    type Item = &'a Body;
    type IntoIter = std::slice::Iter<'a, Body>;

    fn into_iter(self) -> Self::IntoIter {
        self.bodies.iter()
    }
}

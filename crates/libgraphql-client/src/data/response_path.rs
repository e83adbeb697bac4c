use smallvec::SmallVec;

/// The location of a value within a response, expressed as the chain of
/// object keys and list indices leading to it from the root entity.
///
/// Displayed in dotted form, e.g. `hero.friends.1.name`.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct ResponsePath(SmallVec<[ResponsePathSegment; 4]>);
impl ResponsePath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> &[ResponsePathSegment] {
        self.0.as_slice()
    }

    pub fn with_index(&self, index: usize) -> Self {
        let mut path = self.clone();
        path.0.push(ResponsePathSegment::Index(index));
        path
    }

    pub fn with_key(&self, key: impl Into<String>) -> Self {
        let mut path = self.clone();
        path.0.push(ResponsePathSegment::Key(key.into()));
        path
    }
}
impl std::fmt::Display for ResponsePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return write!(f, "<root>");
        }

        for (idx, segment) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, ".")?;
            }
            match segment {
                ResponsePathSegment::Index(index) => write!(f, "{index}")?,
                ResponsePathSegment::Key(key) => write!(f, "{key}")?,
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum ResponsePathSegment {
    Index(usize),
    Key(String),
}

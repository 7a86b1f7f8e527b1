use crate::{Error, Result};

/// Nesting budget for a hierarchy walk.
///
/// Counts the levels descended from the top node: the root, each part, and
/// a node's transform children. Transform children are leaves, so the walk
/// never follows references any deeper than that.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Depth {
    current: usize,
    limit: usize,
}

impl Depth {
    pub(crate) fn new(limit: usize) -> Self {
        Self { current: 0, limit }
    }

    /// One level further down, or an error past the limit.
    pub(crate) fn descend(self) -> Result<Self> {
        if self.current >= self.limit {
            return Err(Error::DepthExceeded(self.limit));
        }
        Ok(Self {
            current: self.current + 1,
            ..self
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descend_stops_at_the_limit() {
        let depth = Depth::new(2);
        let depth = depth.descend().unwrap().descend().unwrap();
        assert!(matches!(depth.descend(), Err(Error::DepthExceeded(2))));
    }
}

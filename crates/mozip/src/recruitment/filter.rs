use std::collections::BTreeSet;

/// Optional id allow-list, parsed once at the boundary and passed inward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdFilter<T: Ord> {
    All,
    Only(BTreeSet<T>),
}

impl<T: Ord> Default for IdFilter<T> {
    fn default() -> Self {
        IdFilter::All
    }
}

impl<T: Ord + From<String>> IdFilter<T> {
    /// Parses a comma separated list of ids.
    ///
    /// Tokens are taken verbatim: `""` (or a trailing comma) yields an empty-id
    /// member that only matches a literal empty id.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None => IdFilter::All,
            Some(raw) => IdFilter::Only(
                raw.split(',')
                    .map(|token| T::from(token.to_string()))
                    .collect(),
            ),
        }
    }
}

impl<T: Ord> IdFilter<T> {
    pub fn only(ids: impl IntoIterator<Item = T>) -> Self {
        IdFilter::Only(ids.into_iter().collect())
    }

    pub fn allows(&self, id: &T) -> bool {
        match self {
            IdFilter::All => true,
            IdFilter::Only(ids) => ids.contains(id),
        }
    }
}

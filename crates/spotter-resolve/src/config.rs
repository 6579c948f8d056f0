/// What `require_single` does when a query without discriminating criteria
/// leaves several elements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AmbiguityPolicy {
    /// Report `ResolveError::Ambiguous`.
    #[default]
    Fail,
    /// Log a warning and take the first element in document order.
    WarnAndPickFirst,
}

/// Resolver configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResolverConfig {
    pub(crate) ambiguity: AmbiguityPolicy,
}

impl ResolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ambiguity policy.
    pub fn ambiguity(mut self, policy: AmbiguityPolicy) -> Self {
        self.ambiguity = policy;
        self
    }

    pub fn get_ambiguity(&self) -> AmbiguityPolicy {
        self.ambiguity
    }
}

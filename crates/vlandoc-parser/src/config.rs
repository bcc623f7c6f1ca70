use vlandoc_core::range::RangePolicy;

/// Options controlling which directives are honored and how strictly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseConfig {
    hostname: bool,
    range_policy: RangePolicy,
}

impl ParseConfig {
    /// Creates a parser configuration.
    ///
    /// # Arguments
    ///
    /// * `hostname` - Whether `hostname` lines set the switch hostname
    /// * `range_policy` - Whether malformed member tokens fail the parse or are skipped
    pub fn new(hostname: bool, range_policy: RangePolicy) -> Self {
        Self {
            hostname,
            range_policy,
        }
    }

    pub fn hostname(&self) -> bool {
        self.hostname
    }

    pub fn range_policy(&self) -> RangePolicy {
        self.range_policy
    }
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self::new(true, RangePolicy::Strict)
    }
}

use crate::config::IntakeConfig;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("incident description has {actual} characters, limit is {limit}")]
    TooLong { limit: usize, actual: usize },
    #[error("batch contains {actual} incidents, limit is {limit}")]
    BatchTooLarge { limit: usize, actual: usize },
}

/// Caller-side bounds on text handed to the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntakePolicy {
    max_incident_chars: usize,
    max_batch_len: usize,
}

impl IntakePolicy {
    pub const DEFAULT_MAX_BATCH_LEN: usize = 500;

    pub fn from_config(config: &IntakeConfig) -> Self {
        Self {
            max_incident_chars: config.max_incident_chars,
            max_batch_len: Self::DEFAULT_MAX_BATCH_LEN,
        }
    }

    /// Policy that accepts anything.
    pub fn unbounded() -> Self {
        Self {
            max_incident_chars: 0,
            max_batch_len: 0,
        }
    }

    pub fn with_max_batch_len(mut self, max_batch_len: usize) -> Self {
        self.max_batch_len = max_batch_len;
        self
    }

    pub fn max_incident_chars(&self) -> usize {
        self.max_incident_chars
    }

    pub fn check_description(&self, description: &str) -> Result<(), IntakeError> {
        if self.max_incident_chars == 0 {
            return Ok(());
        }
        let actual = description.chars().count();
        if actual > self.max_incident_chars {
            return Err(IntakeError::TooLong {
                limit: self.max_incident_chars,
                actual,
            });
        }
        Ok(())
    }

    pub fn check_batch_len(&self, len: usize) -> Result<(), IntakeError> {
        if self.max_batch_len != 0 && len > self.max_batch_len {
            return Err(IntakeError::BatchTooLarge {
                limit: self.max_batch_len,
                actual: len,
            });
        }
        Ok(())
    }
}

impl Default for IntakePolicy {
    fn default() -> Self {
        Self::from_config(&IntakeConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_characters_not_bytes() {
        let policy = IntakePolicy::from_config(&IntakeConfig {
            max_incident_chars: 3,
        });
        assert!(policy.check_description("ééé").is_ok());
        assert_eq!(
            policy.check_description("abcd"),
            Err(IntakeError::TooLong {
                limit: 3,
                actual: 4
            })
        );
    }

    #[test]
    fn zero_limits_disable_checks() {
        let policy = IntakePolicy::unbounded();
        assert!(policy.check_description(&"x".repeat(100_000)).is_ok());
        assert!(policy.check_batch_len(10_000).is_ok());
    }

    #[test]
    fn empty_description_is_accepted() {
        assert!(IntakePolicy::default().check_description("").is_ok());
    }

    #[test]
    fn batch_limit_is_enforced() {
        let policy = IntakePolicy::default().with_max_batch_len(2);
        assert!(policy.check_batch_len(2).is_ok());
        assert!(matches!(
            policy.check_batch_len(3),
            Err(IntakeError::BatchTooLarge { limit: 2, actual: 3 })
        ));
    }
}

use serde::{Deserialize, Serialize};

/// Identifiers are opaque strings handed out by the remote platform.
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }
    };
}

define_id!(TeamId);
define_id!(EscalationId);
define_id!(ScheduleId);
define_id!(UserId);
define_id!(AlertId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_raw_value() {
        let id = ScheduleId::new("4f0c2a1e-8a55-4b9e-9e0f-0d3c1b6a7e21");
        assert_eq!(id.to_string(), "4f0c2a1e-8a55-4b9e-9e0f-0d3c1b6a7e21");
        assert_eq!(id.as_str(), "4f0c2a1e-8a55-4b9e-9e0f-0d3c1b6a7e21");
    }

    #[test]
    fn empty_id_is_detected() {
        assert!(UserId::new("").is_empty());
        assert!(!UserId::new("x").is_empty());
    }
}

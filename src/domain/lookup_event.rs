//! Lookup event model for asynchronous request logging.

/// An in-memory record of a tracking lookup, queued for async persistence.
///
/// Created in the track handler once the tracking number has validated, then
/// sent over a bounded channel to
/// [`crate::domain::lookup_worker::run_lookup_worker`]. This keeps the
/// audit-log insert off the request path: a full queue or a failing insert
/// never delays or fails the lookup response.
#[derive(Debug, Clone)]
pub struct LookupEvent {
    pub tracking_number: String,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
}

impl LookupEvent {
    pub fn new(tracking_number: String, ip: Option<String>, user_agent: Option<&str>) -> Self {
        Self {
            tracking_number,
            ip,
            user_agent: user_agent.map(|s| s.to_string()),
        }
    }

    /// Caller address as stored in the log; `"unknown"` when absent.
    pub fn ip_or_unknown(&self) -> &str {
        self.ip.as_deref().unwrap_or("unknown")
    }

    /// Caller agent as stored in the log; `"unknown"` when absent.
    pub fn user_agent_or_unknown(&self) -> &str {
        self.user_agent.as_deref().unwrap_or("unknown")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_event_creation_full() {
        let event = LookupEvent::new(
            "MAX123456789".to_string(),
            Some("192.168.1.1".to_string()),
            Some("Mozilla/5.0"),
        );

        assert_eq!(event.tracking_number, "MAX123456789");
        assert_eq!(event.ip, Some("192.168.1.1".to_string()));
        assert_eq!(event.user_agent, Some("Mozilla/5.0".to_string()));
    }

    #[test]
    fn test_lookup_event_creation_minimal() {
        let event = LookupEvent::new("MAX987654321".to_string(), None, None);

        assert_eq!(event.tracking_number, "MAX987654321");
        assert!(event.ip.is_none());
        assert!(event.user_agent.is_none());
    }

    #[test]
    fn test_missing_caller_fields_fall_back_to_unknown() {
        let event = LookupEvent::new("MAX987654321".to_string(), None, None);

        assert_eq!(event.ip_or_unknown(), "unknown");
        assert_eq!(event.user_agent_or_unknown(), "unknown");
    }

    #[test]
    fn test_present_caller_fields_stored_as_is() {
        let event = LookupEvent::new(
            "MAX123456789".to_string(),
            Some("192.168.1.1".to_string()),
            Some("Mozilla/5.0"),
        );

        assert_eq!(event.ip_or_unknown(), "192.168.1.1");
        assert_eq!(event.user_agent_or_unknown(), "Mozilla/5.0");
    }

    #[test]
    fn test_lookup_event_clone() {
        let event = LookupEvent::new(
            "MAX111111111".to_string(),
            Some("10.0.0.1".to_string()),
            Some("TestBot/1.0"),
        );

        let cloned = event.clone();

        assert_eq!(cloned.tracking_number, event.tracking_number);
        assert_eq!(cloned.ip, event.ip);
        assert_eq!(cloned.user_agent, event.user_agent);
    }
}

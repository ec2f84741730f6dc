//! Advisory message selection by session risk level.

use super::risk_level::SessionRiskLevel;

const MEDIUM_ADVISORY: &str = "Some of your answers suggest today may be a harder day than usual. \
     You can still proceed with your session, but consider having someone you trust available \
     afterwards, and take a break whenever you need one.";

const HIGH_ADVISORY: &str = "Your answers indicate significant stress right now. Before continuing, we strongly \
     recommend making sure you have a crisis plan in place and talking with a mental health \
     professional. The resources below are available immediately if you need support.";

const CRITICAL_ADVISORY: &str = "Based on your answers, now is not a safe time for a mediation session. We recommend \
     pausing mediation and speaking with a mental health professional or one of the crisis \
     resources below before resuming. Your safety comes first.";

/// Returns the advisory paragraph for a session risk level, or `None` for
/// low risk. Messages escalate in directiveness with the level.
pub fn advisory_message(risk_level: SessionRiskLevel) -> Option<&'static str> {
    match risk_level {
        SessionRiskLevel::Low => None,
        SessionRiskLevel::Medium => Some(MEDIUM_ADVISORY),
        SessionRiskLevel::High => Some(HIGH_ADVISORY),
        SessionRiskLevel::Critical => Some(CRITICAL_ADVISORY),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_risk_has_no_message() {
        assert!(advisory_message(SessionRiskLevel::Low).is_none());
    }

    #[test]
    fn non_low_levels_have_non_empty_messages() {
        for level in [
            SessionRiskLevel::Medium,
            SessionRiskLevel::High,
            SessionRiskLevel::Critical,
        ] {
            let message = advisory_message(level).unwrap();
            assert!(!message.is_empty());
        }
    }

    #[test]
    fn messages_are_distinct_per_level() {
        let medium = advisory_message(SessionRiskLevel::Medium).unwrap();
        let high = advisory_message(SessionRiskLevel::High).unwrap();
        let critical = advisory_message(SessionRiskLevel::Critical).unwrap();

        assert_ne!(medium, high);
        assert_ne!(high, critical);
        assert_ne!(medium, critical);
    }

    #[test]
    fn critical_message_recommends_pausing() {
        let critical = advisory_message(SessionRiskLevel::Critical).unwrap();
        assert!(critical.contains("pausing mediation"));
    }
}

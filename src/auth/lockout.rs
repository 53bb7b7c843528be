use chrono::{DateTime, Duration, Utc};

/// Politique de verrouillage temporaire après échecs répétés.
/// Le verrou est actif ssi compteur >= max_attempts ET
/// now < dernier échec + fenêtre.
#[derive(Debug, Clone, Copy)]
pub struct LockoutPolicy {
    pub max_attempts: i32,
    pub window_minutes: i64,
}

impl Default for LockoutPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            window_minutes: 30,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockoutStatus {
    Clear,
    Locked { retry_after: Duration },
}

impl LockoutPolicy {
    // `now` is a parameter so window tests run against pinned instants.
    pub fn check(
        &self,
        failed_attempts: i32,
        last_failed_attempt: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> LockoutStatus {
        if failed_attempts < self.max_attempts {
            return LockoutStatus::Clear;
        }

        let Some(last_failed) = last_failed_attempt else {
            return LockoutStatus::Clear;
        };

        let locked_until = last_failed + Duration::minutes(self.window_minutes);
        if now < locked_until {
            LockoutStatus::Locked {
                retry_after: locked_until - now,
            }
        } else {
            LockoutStatus::Clear
        }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Active,
    Inactive,
}

impl SubscriptionStatus {
    pub fn parse(status: &str) -> Self {
        match status {
            "active" => SubscriptionStatus::Active,
            _ => SubscriptionStatus::Inactive,
        }
    }
}

/// At most one row per user. Created and reactivated by the payment webhook;
/// flipped to inactive by the subscription gate when observed past expiry.
#[derive(Debug, Clone, Serialize)]
pub struct Subscription {
    pub id: Uuid,
    pub user_id: Uuid,
    pub status: SubscriptionStatus,
    pub plan_type: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Subscription {
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.status == SubscriptionStatus::Active && self.expires_at > now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn subscription(status: SubscriptionStatus, expires_in: Duration) -> Subscription {
        let now = Utc::now();
        Subscription {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            status,
            plan_type: "premium".to_string(),
            expires_at: now + expires_in,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn active_requires_status_and_future_expiry() {
        let now = Utc::now();
        assert!(subscription(SubscriptionStatus::Active, Duration::days(10)).is_active(now));
        assert!(!subscription(SubscriptionStatus::Active, Duration::days(-1)).is_active(now));
        assert!(!subscription(SubscriptionStatus::Inactive, Duration::days(10)).is_active(now));
    }
}

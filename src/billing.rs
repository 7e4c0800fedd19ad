//! Subscription billing: plan catalog and the invoice state machine.
//!
//! Per member the flow is NoSubscription -> PendingInvoice -> Active. The
//! pending invoice is mirrored to localStorage so a reload keeps the flow
//! where it was; the server stays authoritative and is re-fetched after
//! every payment.

use thiserror::Error;

use crate::types::{PendingInvoice, SubscriptionStatus};

/// Membership plan shown on the purchase page
pub struct Plan {
    pub name: &'static str,
    /// Dollars per month
    pub price: u32,
    pub period: &'static str,
    pub features: &'static [&'static str],
    pub popular: bool,
}

pub const PLANS: [Plan; 3] = [
    Plan {
        name: "Silver",
        price: 29,
        period: "/month",
        features: &["Access to gym floor", "Locker room access", "Free WiFi"],
        popular: false,
    },
    Plan {
        name: "Gold",
        price: 59,
        period: "/month",
        features: &[
            "All Silver features",
            "Group classes",
            "1 Personal training session",
        ],
        popular: true,
    },
    Plan {
        name: "Platinum",
        price: 99,
        period: "/month",
        features: &[
            "All Gold features",
            "Unlimited Personal training",
            "Sauna access",
            "Guest pass",
        ],
        popular: false,
    },
];

pub fn plan_amount(name: &str) -> Option<u32> {
    PLANS.iter().find(|p| p.name == name).map(|p| p.price)
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BillingError {
    #[error("An invoice for the {0} plan is still awaiting payment. Settle it before choosing another plan.")]
    InvoiceInFlight(String),
    #[error("Unknown membership plan: {0}")]
    UnknownPlan(String),
}

/// Client-side gate for selecting a plan.
///
/// At most one invoice may be in flight; a second selection is rejected here
/// without touching the network. Returns the amount due for the plan.
pub fn select_plan(current: Option<&PendingInvoice>, plan: &str) -> Result<u32, BillingError> {
    if let Some(invoice) = current {
        return Err(BillingError::InvoiceInFlight(invoice.plan.clone()));
    }
    plan_amount(plan).ok_or_else(|| BillingError::UnknownPlan(plan.to_string()))
}

/// Reconcile the cached invoice against the server's subscription state.
///
/// An active subscription supersedes any leftover pending invoice; the cache
/// entry is discarded in that case. Local state is never trusted over the
/// server's.
pub fn reconcile(
    server: Option<&SubscriptionStatus>,
    cached: Option<PendingInvoice>,
) -> Option<PendingInvoice> {
    match server {
        Some(sub) if sub.is_active() => None,
        _ => cached,
    }
}

/// Whether the post-payment re-fetch confirmed an active subscription.
///
/// A failed or still-pending re-fetch is not a settled payment; the server
/// state wins over whatever the client just did.
pub fn payment_settled(server: Option<&SubscriptionStatus>) -> bool {
    server.map(SubscriptionStatus::is_active).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoice(plan: &str) -> PendingInvoice {
        PendingInvoice {
            invoice_id: "inv1".into(),
            status: "pending".into(),
            plan: plan.into(),
            amount: plan_amount(plan).unwrap(),
        }
    }

    #[test]
    fn catalog_prices_match_the_marketing_page() {
        assert_eq!(plan_amount("Silver"), Some(29));
        assert_eq!(plan_amount("Gold"), Some(59));
        assert_eq!(plan_amount("Platinum"), Some(99));
        assert_eq!(plan_amount("Diamond"), None);
    }

    #[test]
    fn selecting_a_plan_with_no_invoice_in_flight_succeeds() {
        assert_eq!(select_plan(None, "Gold"), Ok(59));
    }

    #[test]
    fn second_selection_is_rejected_while_an_invoice_is_pending() {
        let pending = invoice("Gold");
        assert_eq!(
            select_plan(Some(&pending), "Platinum"),
            Err(BillingError::InvoiceInFlight("Gold".into()))
        );
        // even re-selecting the same plan is rejected
        assert_eq!(
            select_plan(Some(&pending), "Gold"),
            Err(BillingError::InvoiceInFlight("Gold".into()))
        );
    }

    #[test]
    fn unknown_plans_are_rejected() {
        assert_eq!(
            select_plan(None, "Diamond"),
            Err(BillingError::UnknownPlan("Diamond".into()))
        );
    }

    #[test]
    fn active_subscription_discards_the_cached_invoice() {
        let active = SubscriptionStatus {
            status: "active".into(),
            plan: Some("Gold".into()),
            expires_at: None,
        };
        assert_eq!(reconcile(Some(&active), Some(invoice("Gold"))), None);
    }

    #[test]
    fn inactive_or_unknown_server_state_keeps_the_cache() {
        let none = SubscriptionStatus {
            status: "none".into(),
            plan: None,
            expires_at: None,
        };
        assert_eq!(
            reconcile(Some(&none), Some(invoice("Gold"))),
            Some(invoice("Gold"))
        );
        assert_eq!(reconcile(None, Some(invoice("Gold"))), Some(invoice("Gold")));
        assert_eq!(reconcile(Some(&none), None), None);
    }

    #[test]
    fn payment_only_settles_on_a_confirmed_active_subscription() {
        let active = SubscriptionStatus {
            status: "active".into(),
            plan: Some("Gold".into()),
            expires_at: None,
        };
        assert!(payment_settled(Some(&active)));

        let pending = SubscriptionStatus {
            status: "pending".into(),
            plan: Some("Gold".into()),
            expires_at: None,
        };
        assert!(!payment_settled(Some(&pending)));
        // a failed re-fetch never counts as settled
        assert!(!payment_settled(None));
    }

    #[test]
    fn billing_errors_render_actionable_messages() {
        let err = BillingError::InvoiceInFlight("Gold".into());
        assert!(err.to_string().contains("Gold"));
        assert!(err.to_string().contains("awaiting payment"));
    }
}

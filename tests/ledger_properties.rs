//! Property tests for the usage ledger and quota enforcer.

use proptest::prelude::*;

use vidforge::domain::account::{QuotaPolicy, UserAccount, UserTier};
use vidforge::domain::foundation::{UsageDay, UserId};
use vidforge::domain::usage::{ActionRequest, QuotaEnforcer};

fn account(tier: UserTier) -> UserAccount {
    let mut account = UserAccount::register(
        UserId::new("prop-user").unwrap(),
        "casey",
        "casey@example.com",
    );
    account.tier = tier;
    account
}

fn day_strategy() -> impl Strategy<Value = UsageDay> {
    (2020i32..2030, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| UsageDay::from_ymd(y, m, d).unwrap())
}

proptest! {
    #[test]
    fn reconcile_is_idempotent(start in day_strategy(), next in day_strategy(), usage in 0u32..100) {
        let mut acct = account(UserTier::Free);
        acct.daily_usage = usage;
        acct.last_usage_day = Some(start);

        acct.reconcile(next);
        let after_first = acct.clone();
        let second_reset = acct.reconcile(next);

        prop_assert!(!second_reset);
        prop_assert_eq!(acct, after_first);
    }

    #[test]
    fn reconcile_on_a_new_day_always_zeroes(start in day_strategy(), usage in 1u32..100) {
        let mut acct = account(UserTier::Free);
        acct.daily_usage = usage;
        acct.last_usage_day = Some(start);

        let next = start.next();
        let did_reset = acct.reconcile(next);

        prop_assert!(did_reset);
        prop_assert_eq!(acct.daily_usage, 0);
        prop_assert_eq!(acct.last_usage_day, Some(next));
    }

    #[test]
    fn total_usage_never_decreases(
        days in prop::collection::vec(day_strategy(), 1..20),
        actions_per_day in prop::collection::vec(0u32..5, 1..20),
    ) {
        let mut acct = account(UserTier::Paid);
        let mut last_total = 0u64;

        for (day, actions) in days.iter().zip(actions_per_day.iter()) {
            acct.reconcile(*day);
            for _ in 0..*actions {
                let (_, total) = acct.record_action(*day);
                prop_assert!(total >= last_total);
                last_total = total;
            }
            prop_assert!(acct.total_usage >= last_total);
        }
    }

    #[test]
    fn free_tier_never_exceeds_quota_in_a_day(attempts in 1u32..20, day in day_strategy()) {
        let enforcer = QuotaEnforcer::new(QuotaPolicy::default());
        let mut acct = account(UserTier::Free);
        let mut approved = 0u32;

        for _ in 0..attempts {
            let decision = enforcer.authorize(&mut acct, &ActionRequest::single(None), day);
            if decision.allowed {
                acct.record_action(day);
                approved += 1;
            }
        }

        prop_assert!(approved <= 3);
        prop_assert_eq!(approved, attempts.min(3));
    }

    #[test]
    fn remaining_quota_is_consistent_with_usage(usage in 0u32..3, day in day_strategy()) {
        let enforcer = QuotaEnforcer::new(QuotaPolicy::default());
        let mut acct = account(UserTier::Free);
        acct.daily_usage = usage;
        acct.last_usage_day = Some(day);

        let decision = enforcer.authorize(&mut acct, &ActionRequest::single(None), day);

        prop_assert!(decision.allowed);
        prop_assert_eq!(decision.remaining_daily, i64::from(3 - usage - 1));
    }
}

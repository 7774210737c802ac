use super::*;
use crate::helpers::utils::FlagQuota;

#[test]
fn can_reach_time_quota() {
    let quota = TimeQuota::new(0.05);

    assert!(!quota.is_reached());

    std::thread::sleep(std::time::Duration::from_millis(60));

    assert!(quota.is_reached());
}

#[test]
fn can_reach_zero_time_quota_immediately() {
    let quota = TimeQuota::new(0.);

    std::thread::sleep(std::time::Duration::from_millis(1));

    assert!(quota.is_reached());
}

parameterized_test! {can_combine_quotas, (flags, expected), {
    can_combine_quotas_impl(flags, expected);
}}

can_combine_quotas! {
    case01_empty: (vec![], false),
    case02_none_reached: (vec![false, false], false),
    case03_one_reached: (vec![false, true], true),
    case04_all_reached: (vec![true, true], true),
}

fn can_combine_quotas_impl(flags: Vec<bool>, expected: bool) {
    let quotas = flags
        .into_iter()
        .map(|flag| Arc::new(FlagQuota::new(flag)) as Arc<dyn Quota + Send + Sync>)
        .collect();

    assert_eq!(CompositeQuota::new(quotas).is_reached(), expected);
}

#[test]
fn can_react_on_inner_quota_change() {
    let flag = Arc::new(FlagQuota::default());
    let time: Arc<dyn Quota + Send + Sync> = Arc::new(TimeQuota::new(100.));
    let quota = CompositeQuota::new(vec![time, flag.clone() as Arc<dyn Quota + Send + Sync>]);

    assert!(!quota.is_reached());
    flag.set(true);
    assert!(quota.is_reached());
}

use super::*;

#[test]
fn can_reach_quota_on_interruption() {
    let quota = InterruptionQuota::default();
    assert!(!quota.is_reached());

    quota.interrupt();

    assert!(quota.is_reached());
}

#[test]
fn can_create_interruption_quota() {
    let quota = create_interruption_quota().expect("cannot create quota");

    assert!(!quota.is_reached());
}

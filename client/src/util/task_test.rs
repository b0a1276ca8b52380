use super::*;

#[test]
fn alive_flag_starts_alive() {
    assert!(AliveFlag::new().is_alive());
}

#[test]
fn clearing_any_clone_clears_all() {
    let flag = AliveFlag::default();
    let clone = flag.clone();
    clone.clear();
    assert!(!flag.is_alive());
    assert!(!clone.is_alive());
}

#[test]
fn sleep_resolves_immediately_outside_browser() {
    futures::executor::block_on(sleep(Duration::from_secs(60)));
}

use super::{FakeHardTimer, HardTimer};

#[test]
fn counts_inclusively() {
    let mut hard = FakeHardTimer::new(0xFFFF);
    hard.init(0xFFFF);
    hard.set_reload(4);
    hard.start();

    for ms in 1..=4 {
        assert!(!hard.tick());
        assert_eq!(hard.counter(), ms);
    }
    assert!(hard.tick());
    assert_eq!(hard.counter(), 0);
}

#[test]
fn stopped_timer_does_not_count() {
    let mut hard = FakeHardTimer::new(0xFFFF);
    hard.set_reload(3);
    assert!(!hard.tick());
    assert_eq!(hard.counter(), 0);

    hard.start();
    hard.tick();
    hard.stop();
    assert_eq!(hard.counter(), 0);
    assert!(!hard.is_running());
}

#[test]
fn reload_is_capped() {
    let mut hard = FakeHardTimer::new(100);
    hard.set_reload(1000);
    assert_eq!(hard.reload(), 100);
}

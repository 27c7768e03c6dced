//! Snapshot Tests - save_state / restore_state
//!
//! Critical invariants tested:
//! - Round trip: draws after restore repeat the draws after save
//! - Independence: the snapshot is a deep copy, never advanced by draws
//! - Restore leaves the snapshot itself unchanged

use hashmix_prng_core_rs::RandomNumberDevice;

fn device() -> RandomNumberDevice {
    RandomNumberDevice::new(128, &[0x01, 0x02, 0x03, 0x04]).unwrap()
}

#[test]
fn test_save_draw_restore_draw_repeats() {
    let mut device = device();
    device.generate_u64(5);

    device.save_state();
    let dump_at_save = device.export();
    let first = device.generate_u64(40);

    device.restore_state();
    assert_eq!(device.export(), dump_at_save);

    let second = device.generate_u64(40);
    assert_eq!(first, second);
}

#[test]
fn test_initial_snapshot_is_construction_state() {
    let mut device = device();
    let initial = device.export();

    device.generate_f64(33);
    device.restore_state();

    assert_eq!(device.export(), initial);
}

#[test]
fn test_draws_do_not_touch_snapshot() {
    let mut device = device();
    let snapshot = device.previous().clone();

    device.generate_u64(100);

    assert_eq!(device.previous(), &snapshot);
    assert_ne!(device.current(), &snapshot);
}

#[test]
fn test_restore_leaves_snapshot_unchanged() {
    let mut device = device();
    device.generate_u64(3);
    device.save_state();
    let snapshot = device.previous().clone();

    device.generate_u64(7);
    device.restore_state();
    device.generate_u64(7);

    assert_eq!(device.previous(), &snapshot);
}

#[test]
fn test_repeated_restore_replays_same_burst() {
    let mut device = device();
    device.save_state();

    let bursts: Vec<Vec<u64>> = (0..3)
        .map(|_| {
            let burst = device.generate_u64(10);
            device.restore_state();
            burst
        })
        .collect();

    assert_eq!(bursts[0], bursts[1]);
    assert_eq!(bursts[1], bursts[2]);
}

#[test]
fn test_save_overwrites_older_snapshot() {
    let mut device = device();
    device.generate_u64(4);
    device.save_state();
    device.generate_u64(9);
    device.save_state();
    let expected = device.generate_u64(6);

    device.restore_state();
    assert_eq!(device.generate_u64(6), expected);
}

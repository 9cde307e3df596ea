use crate::qint::{full_lookup, unpack, Qint, QINT_MASK};
use crate::table::{default_rows, rows};
use approx::assert_relative_eq;
use rand::Rng;

#[test]
fn only_low_seven_bits_matter() {
    let mut rng = rand::rng();
    for _ in 0..10_000 {
        let packed = rng.random::<i64>();
        assert_eq!(unpack(packed), unpack(packed & QINT_MASK as i64));
    }
    for packed in 0..=u8::MAX {
        assert_eq!(unpack(packed), unpack(packed & QINT_MASK));
    }
}

#[test]
fn documented_values() {
    assert_eq!(unpack(0x30), 1_000_000);
    assert_eq!(unpack(0x31), 1_250_000);
    assert_eq!(unpack(0x34), 5_000_000);
    assert_eq!(unpack(0x38), 10_000_000);
    assert_eq!(unpack(0x3A), 25_000_000);
}

#[test]
fn lookup_is_strictly_increasing() {
    let lookup = full_lookup();
    assert!(lookup.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn floor_and_ceil_bracket_the_amount() {
    for amount in [0, 1, 4, 999_999, 1_000_000, 1_100_000, 123_456_789_000] {
        let floor = Qint::floor_from_nanotons(amount);
        assert!(floor.decode() <= amount);
        if floor < Qint::MAX {
            assert!(Qint::new(floor.bits() + 1).decode() > amount);
        }

        let ceil = Qint::ceil_from_nanotons(amount).unwrap();
        assert!(ceil.decode() >= amount);
        if ceil > Qint::MIN {
            assert!(Qint::new(ceil.bits() - 1).decode() < amount);
        }
    }
}

#[test]
fn exact_amounts_encode_to_themselves() {
    for bits in 0..=QINT_MASK {
        let qint = Qint::new(bits);
        assert_eq!(Qint::floor_from_nanotons(qint.decode()), qint);
        assert_eq!(Qint::ceil_from_nanotons(qint.decode()), Some(qint));
    }
}

#[test]
fn out_of_range_amounts() {
    assert_eq!(Qint::floor_from_nanotons(u64::MAX), Qint::MAX);
    assert_eq!(Qint::ceil_from_nanotons(Qint::MAX.decode() + 1), None);
}

#[test]
fn ton_values_are_rounded() {
    assert_relative_eq!(Qint::new(0x31).to_ton(), 0.00125);
    assert_relative_eq!(Qint::new(0x40).to_ton(), 0.1);
    // 0x01 is a single nanoton, below the fifth decimal
    assert_eq!(Qint::new(0x01).to_ton(), 0.0);
}

#[test]
fn default_table_shape() {
    let table = default_rows();
    assert_eq!(table.len(), 17);
    assert_eq!(table[0].qint, Qint::new(0x30));
    assert_eq!(table[16].qint, Qint::new(0x40));
}

#[test]
fn table_stops_at_last_qint() {
    let table = rows(0x7C, 17);
    assert_eq!(table.len(), 4);
    assert_eq!(table.last().unwrap().qint, Qint::MAX);
    assert!(rows(0x30, 0).is_empty());
}

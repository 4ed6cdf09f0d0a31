use proptest::prelude::*;

use warden_types::{Address, BatchId, BlockHeight, PermissionId, Timestamp};

proptest! {
    /// Every address survives Display -> FromStr.
    #[test]
    fn address_display_parse(bytes in prop::array::uniform20(0u8..)) {
        let addr = Address::new(bytes);
        let parsed: Address = addr.to_string().parse().unwrap();
        prop_assert_eq!(parsed, addr);
    }

    /// Address::is_zero is true only for all-zero bytes.
    #[test]
    fn address_is_zero_correct(bytes in prop::array::uniform20(0u8..)) {
        prop_assert_eq!(Address::new(bytes).is_zero(), bytes == [0u8; 20]);
    }

    /// Timestamp ordering: new(a) <= new(b) iff a <= b.
    #[test]
    fn timestamp_ordering(a in 0u64..u64::MAX, b in 0u64..u64::MAX) {
        prop_assert_eq!(Timestamp::new(a) <= Timestamp::new(b), a <= b);
    }

    /// saturating_add never wraps.
    #[test]
    fn timestamp_saturating_add(base in 0u64..u64::MAX, secs in 0u64..u64::MAX) {
        let shifted = Timestamp::new(base).saturating_add(secs);
        prop_assert!(shifted >= Timestamp::new(base));
        prop_assert_eq!(shifted.as_secs(), base.saturating_add(secs));
    }

    /// Timestamp elapsed_since: elapsed_since(now) = now - self (saturating).
    #[test]
    fn timestamp_elapsed_since(base in 0u64..1_000_000, offset in 0u64..1_000_000) {
        let t = Timestamp::new(base);
        prop_assert_eq!(t.elapsed_since(Timestamp::new(base + offset)), offset);
        prop_assert_eq!(Timestamp::new(base + offset).elapsed_since(t), 0);
    }

    /// previous() never underflows and is the inverse of next() above genesis.
    #[test]
    fn block_height_previous_next(h in 0u64..u64::MAX) {
        let height = BlockHeight::new(h);
        prop_assert!(height.previous() <= height);
        prop_assert_eq!(height.next().previous(), height);
    }

    /// Distinct proposal ids map to distinct batch ids.
    #[test]
    fn batch_id_injective(a in any::<u64>(), b in any::<u64>()) {
        prop_assert_eq!(
            BatchId::from_proposal_id(a) == BatchId::from_proposal_id(b),
            a == b
        );
    }

    /// Labelled permission ids print back as their label.
    #[test]
    fn permission_label_round_trip(label in "[A-Z_]{1,32}") {
        let id = PermissionId::from_label(&label);
        prop_assert_eq!(id.label(), Some(label.as_str()));
    }
}

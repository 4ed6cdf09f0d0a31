//! Decoder robustness: untrusted payloads never panic and never decode
//! partially.

use proptest::prelude::*;
use warden_calls::{Action, Call, CallError, DaoCall, RosterCall};
use warden_types::{Address, BatchId, MEMBER_PERMISSION_ID};

fn sample_execute() -> Vec<u8> {
    let grant = DaoCall::grant(
        Address::derive("roster"),
        Address::derive("carol"),
        MEMBER_PERMISSION_ID,
    );
    let action = Action::call(Address::derive("dao"), &grant).unwrap();
    DaoCall::execute(BatchId::from_proposal_id(7), vec![action], 0)
        .encode()
        .unwrap()
}

proptest! {
    #[test]
    fn arbitrary_bytes_never_panic(data in prop::collection::vec(any::<u8>(), 0..512)) {
        let _ = DaoCall::decode(&data);
        let _ = RosterCall::decode(&data);
    }

    #[test]
    fn tagged_garbage_never_panics(body in prop::collection::vec(any::<u8>(), 0..512)) {
        let mut data = b"DAO\x01".to_vec();
        data.extend(body);
        let _ = DaoCall::decode(&data);
    }

    /// Every strict prefix of a valid payload is rejected.
    #[test]
    fn truncated_payloads_are_rejected(cut in 0usize..64) {
        let data = sample_execute();
        let cut = cut % data.len();
        prop_assert!(DaoCall::decode(&data[..cut]).is_err());
    }

    /// Flipping the interface tag turns a valid payload into an unknown one.
    #[test]
    fn foreign_tags_are_rejected(tag in prop::array::uniform4(any::<u8>())) {
        prop_assume!(&tag != b"DAO\x01");
        let mut data = sample_execute();
        data[..4].copy_from_slice(&tag);
        prop_assert!(matches!(DaoCall::decode(&data), Err(CallError::UnknownInterface(_))));
    }
}

#[test]
fn oversized_length_prefix_is_rejected_without_allocating() {
    // SetMetadata variant index (u32) followed by a u64::MAX byte length.
    let mut data = b"DAO\x01".to_vec();
    data.extend_from_slice(&3u32.to_le_bytes());
    data.extend_from_slice(&u64::MAX.to_le_bytes());
    assert!(matches!(DaoCall::decode(&data), Err(CallError::Malformed(_))));
}

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use warden_calls::{Action, Call, DaoCall};
use warden_condition::MemberAccessCondition;
use warden_host::PermissionCondition;
use warden_types::{Address, BatchId, PermissionId, EXECUTE_PERMISSION_ID, MEMBER_PERMISSION_ID};

const TARGET: Address = Address::from_low_u64(0x7a);

#[derive(Arbitrary, Debug)]
enum Shape {
    Grant { on_target: bool, who: [u8; 20], member: bool, other: [u8; 32] },
    Revoke { on_target: bool, who: [u8; 20], member: bool, other: [u8; 32] },
    Metadata(Vec<u8>),
    Raw(Vec<u8>),
}

#[derive(Arbitrary, Debug)]
struct Input {
    shapes: Vec<Shape>,
    raw: Vec<u8>,
}

fn build(shape: &Shape) -> (Vec<u8>, bool) {
    let permission_of = |member: bool, other: &[u8; 32]| {
        if member {
            MEMBER_PERMISSION_ID
        } else {
            PermissionId::new(*other)
        }
    };
    let on_of = |on_target: bool| if on_target { TARGET } else { Address::from_low_u64(0x7b) };
    match shape {
        Shape::Grant { on_target, who, member, other } => {
            let permission = permission_of(*member, other);
            let call = DaoCall::grant(on_of(*on_target), Address::new(*who), permission);
            (call.encode().unwrap(), *on_target && permission == MEMBER_PERMISSION_ID)
        }
        Shape::Revoke { on_target, who, member, other } => {
            let permission = permission_of(*member, other);
            let call = DaoCall::revoke(on_of(*on_target), Address::new(*who), permission);
            (call.encode().unwrap(), *on_target && permission == MEMBER_PERMISSION_ID)
        }
        Shape::Metadata(metadata) => (
            DaoCall::SetMetadata { metadata: metadata.clone() }.encode().unwrap(),
            false,
        ),
        // Raw bytes could, in principle, be a valid grant; check after decoding.
        Shape::Raw(bytes) => {
            let allowed = matches!(
                DaoCall::decode(bytes),
                Ok(DaoCall::Grant { on, permission, .. } | DaoCall::Revoke { on, permission, .. })
                    if on == TARGET && permission == MEMBER_PERMISSION_ID
            );
            (bytes.clone(), allowed)
        }
    }
}

fuzz_target!(|input: Input| {
    let condition = MemberAccessCondition::new(TARGET);
    let granted = |data: &[u8]| {
        condition.is_granted(&Address::ZERO, &Address::ZERO, &EXECUTE_PERMISSION_ID, data)
    };

    // Arbitrary payloads must not panic.
    let _ = granted(&input.raw);

    // Constructed batches are granted exactly when every action is allowed.
    let built: Vec<(Vec<u8>, bool)> = input.shapes.iter().map(build).collect();
    let expected = !built.is_empty() && built.iter().all(|(_, ok)| *ok);
    let actions = built
        .into_iter()
        .map(|(data, _)| Action::new(Address::ZERO, 0, data))
        .collect();
    let Ok(batch) = DaoCall::execute(BatchId::ZERO, actions, 0).encode() else {
        return;
    };
    assert_eq!(granted(&batch), expected);
});

#![no_main]

use libfuzzer_sys::fuzz_target;
use warden_calls::{Call, DaoCall, RosterCall};

// Decoding untrusted payloads must never panic, and anything that decodes
// must re-encode to exactly the input (no trailing or ignored bytes).
fuzz_target!(|data: &[u8]| {
    if let Ok(call) = DaoCall::decode(data) {
        let encoded = call.encode().expect("decoded call re-encodes");
        assert_eq!(encoded, data);

        if let DaoCall::Execute { actions, .. } = call {
            for action in actions {
                let _ = DaoCall::decode(&action.data);
            }
        }
    }

    if let Ok(call) = RosterCall::decode(data) {
        let encoded = call.encode().expect("decoded call re-encodes");
        assert_eq!(encoded, data);
    }
});

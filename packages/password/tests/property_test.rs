//! Property tests over arbitrary passwords and parameters

use proptest::prelude::*;
use secure_identity_password::{HashRecord, HashingParameters, hash, verify};

fn params() -> HashingParameters {
    HashingParameters::default().with_iterations(100)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_hash_verifies_own_password(password in "\\PC{1,64}") {
        let encoded = hash(&password, &params()).expect("hash should succeed");
        prop_assert!(verify(&encoded, &password, &params()));
    }

    #[test]
    fn prop_other_password_is_rejected(a in "\\PC{1,32}", b in "\\PC{1,32}") {
        prop_assume!(a != b);
        let encoded = hash(&a, &params()).expect("hash should succeed");
        prop_assert!(!verify(&encoded, &b, &params()));
    }

    #[test]
    fn prop_record_round_trips(
        password in "[a-zA-Z0-9]{1,32}",
        separator in prop::sample::select(vec!['.', '$', ':', '|', '-', '_']),
    ) {
        let params = params().with_field_separator(separator);
        let encoded = hash(&password, &params).expect("hash should succeed");
        let record = HashRecord::parse(&encoded, separator).expect("record should parse");
        prop_assert_eq!(record.encode(separator), encoded);
    }

    #[test]
    fn prop_arbitrary_input_never_panics(encoded in "\\PC{0,96}", password in "\\PC{0,16}") {
        // any outcome is fine as long as it is a plain boolean
        let _ = verify(&encoded, &password, &params());
    }
}

//! Property tests for generated values: length, alphabet membership and determinism

use proptest::prelude::*;
use serde_json::json;
use sidecred_common::{CredentialRequest, Provider, ProviderType};
use sidecred_random::{Alphabet, Generator, RandomProvider};

prop_compose! {
    fn arb_alphabet()(
        chars in prop::collection::btree_set(any::<char>(), 1..40),
    ) -> Alphabet {
        Alphabet::new(chars.into_iter().collect::<String>()).unwrap()
    }
}

proptest! {
    #[test]
    fn test_value_length_matches_request(seed in any::<u64>(), length in 0usize..512) {
        let provider = RandomProvider::new(seed);
        let request = CredentialRequest::new(
            ProviderType::Random,
            "prop",
            json!({ "length": length }),
        );

        let (credentials, metadata) = provider.create(&request).unwrap();
        prop_assert_eq!(credentials.len(), 1);
        prop_assert!(metadata.is_none());
        prop_assert_eq!(credentials[0].value.chars().count(), length);
    }

    #[test]
    fn test_every_character_is_from_alphabet(
        seed in any::<u64>(),
        alphabet in arb_alphabet(),
        length in 0usize..256,
    ) {
        let generator = Generator::new(seed, alphabet.clone());
        let value = generator.generate(length);

        prop_assert_eq!(value.chars().count(), length);
        prop_assert!(value.chars().all(|c| alphabet.contains(c)));
    }

    #[test]
    fn test_same_seed_same_values(
        seed in any::<u64>(),
        lengths in prop::collection::vec(0usize..64, 1..16),
    ) {
        let first = Generator::new(seed, Alphabet::default());
        let second = Generator::new(seed, Alphabet::default());

        for length in lengths {
            prop_assert_eq!(first.generate(length), second.generate(length));
        }
    }
}

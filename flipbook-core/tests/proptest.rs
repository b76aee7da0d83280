//! Property-based tests using proptest

use flipbook_core::{
    decoder::{decode_store, salvage_store},
    encoder::encode_store,
    Frame, FrameStore,
};
use proptest::prelude::*;

fn store_of(count: usize) -> FrameStore {
    let mut store = FrameStore::new();
    for i in 0..count {
        store.push(
            Frame::new(format!("frame-{}", i), i as u32, format!("img/{}.png", i)).unwrap(),
        );
    }
    store
}

proptest! {
    #[test]
    fn prop_round_trip_encode_decode(
        entries in prop::collection::vec(
            ("[a-zA-Z][a-zA-Z0-9 _-]{0,23}", any::<u32>(), "[a-z0-9/]{1,24}\\.png"),
            0..16,
        )
    ) {
        let mut store = FrameStore::new();
        for (i, (name, duration, path)) in entries.iter().enumerate() {
            // prefix with the index so names stay unique
            store.push(Frame::new(format!("{}-{}", i, name), *duration, path.clone()).unwrap());
        }

        let encoded = encode_store(&store).unwrap();
        let decoded = decode_store(&encoded).unwrap();

        prop_assert_eq!(decoded, store);
    }

    #[test]
    fn prop_decode_never_panics(
        data in prop::collection::vec(any::<u8>(), 0..4096)
    ) {
        // Should never panic, even on random data
        let result = decode_store(&data);
        prop_assert!(result.is_ok() || result.is_err());
    }

    #[test]
    fn prop_salvage_never_panics(
        data in prop::collection::vec(any::<u8>(), 0..4096)
    ) {
        let _ = salvage_store(&data);
    }

    #[test]
    fn prop_truncation_salvages_exact_prefix(
        count in 1usize..8,
        cut in any::<prop::sample::Index>()
    ) {
        let store = store_of(count);
        let encoded = encode_store(&store).unwrap();
        let keep = cut.index(encoded.len());

        let (salvaged, _) = salvage_store(&encoded[..keep]);

        prop_assert!(salvaged.len() <= count);
        prop_assert_eq!(salvaged.frames(), &store.frames()[..salvaged.len()]);
    }

    #[test]
    fn prop_length_tracks_inserts_and_removals(
        removals in prop::collection::vec(any::<prop::sample::Index>(), 0..8),
        count in 0usize..12,
    ) {
        let mut store = store_of(count);
        let mut expected = count;

        for removal in removals {
            if expected == 0 {
                break;
            }
            let position = removal.index(expected) + 1;
            store.remove_at(position).unwrap();
            expected -= 1;
        }

        prop_assert_eq!(store.len(), expected);
    }

    #[test]
    fn prop_insert_lands_at_requested_position(
        count in 0usize..10,
        slot in any::<prop::sample::Index>()
    ) {
        let mut store = store_of(count);
        let position = slot.index(count + 1) + 1;

        store
            .insert_at(Frame::new("probe", 1, "probe.png").unwrap(), position)
            .unwrap();

        prop_assert_eq!(store.position_of("probe"), Some(position));
        prop_assert_eq!(store.len(), count + 1);
    }

    #[test]
    fn prop_move_keeps_membership_and_target(
        count in 1usize..10,
        from in any::<prop::sample::Index>(),
        to in any::<prop::sample::Index>()
    ) {
        let mut store = store_of(count);
        let name = format!("frame-{}", from.index(count));
        let target = to.index(count) + 1;

        let before: Vec<String> = store.iter().map(|f| f.name.clone()).collect();
        store.move_to(&name, target).unwrap();

        prop_assert_eq!(store.position_of(&name), Some(target));
        prop_assert_eq!(store.len(), count);

        // everything else keeps its relative order
        let others_before: Vec<&String> = before.iter().filter(|n| **n != name).collect();
        let after: Vec<String> = store.iter().map(|f| f.name.clone()).collect();
        let others_after: Vec<&String> = after.iter().filter(|n| **n != name).collect();
        prop_assert_eq!(others_before, others_after);
    }
}

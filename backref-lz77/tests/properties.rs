//! Property tests for the token model, the matcher and the symbol tally.

use backref_lz77::{
    BackrefError, Lz77Options, Lz77Store, Lz77Token, SymbolAlphabet, lz77_counts, lz77_lazy,
    verify_len_dist,
};
use proptest::prelude::*;

/// Inputs with plenty of repetition: a few short words from a small alphabet.
fn repetitive_bytes() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(
        proptest::collection::vec(b'a'..=b'd', 1..=6),
        0..=200,
    )
    .prop_map(|words| words.concat())
}

fn any_options() -> impl Strategy<Value = Lz77Options> {
    (1usize..=64, 3usize..=258, any::<bool>()).prop_map(|(hits, nice, lazy)| {
        Lz77Options::new()
            .with_max_chain_hits(hits)
            .with_nice_length(nice)
            .with_lazy_matching(lazy)
    })
}

fn check_invariants(store: &Lz77Store) -> Result<(), TestCaseError> {
    prop_assert_eq!(store.litlens().len(), store.dists().len());
    for (&litlen, &dist) in store.litlens().iter().zip(store.dists()) {
        if dist == 0 {
            prop_assert!(litlen <= 255);
        } else {
            prop_assert!((3..=258).contains(&litlen));
            prop_assert!((1..=32768).contains(&dist));
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn lazy_parse_round_trips(input in repetitive_bytes(), options in any_options()) {
        let store = lz77_lazy(&options, &input, 0, input.len()).unwrap();
        check_invariants(&store)?;
        prop_assert_eq!(store.reconstruct(&[]).unwrap(), input.clone());
        prop_assert!(store.verify(&input, 0).is_ok());
    }

    #[test]
    fn lazy_parse_round_trips_random_bytes(input in proptest::collection::vec(any::<u8>(), 0..2048)) {
        let store = lz77_lazy(&Lz77Options::default(), &input, 0, input.len()).unwrap();
        check_invariants(&store)?;
        prop_assert_eq!(store.reconstruct(&[]).unwrap(), input);
    }

    #[test]
    fn sub_range_round_trips(
        input in repetitive_bytes(),
        a in any::<prop::sample::Index>(),
        b in any::<prop::sample::Index>(),
    ) {
        let len = input.len() + 1;
        let (x, y) = (a.index(len), b.index(len));
        let (instart, inend) = (x.min(y), x.max(y));

        let store = lz77_lazy(&Lz77Options::default(), &input, instart, inend).unwrap();
        check_invariants(&store)?;
        prop_assert_eq!(store.byte_range(0, store.len()), inend - instart);
        prop_assert!(store.verify(&input, instart).is_ok());
        prop_assert_eq!(
            store.reconstruct(&input[..instart]).unwrap(),
            input[instart..inend].to_vec()
        );
    }

    #[test]
    fn tally_conserves_tokens(
        input in repetitive_bytes(),
        a in any::<prop::sample::Index>(),
        b in any::<prop::sample::Index>(),
        with_eob in any::<bool>(),
    ) {
        let store = lz77_lazy(&Lz77Options::default(), &input, 0, input.len()).unwrap();
        let len = store.len() + 1;
        let (x, y) = (a.index(len), b.index(len));
        let (start, end) = (x.min(y), x.max(y));
        let alphabet = if with_eob {
            SymbolAlphabet::DeflateWithEndOfBlock
        } else {
            SymbolAlphabet::Deflate
        };

        let counts = lz77_counts(store.litlens(), store.dists(), start, end, alphabet).unwrap();
        let matches = store.dists()[start..end].iter().filter(|&&d| d != 0).count();
        prop_assert_eq!(counts.literal_total() + counts.length_total(), end - start);
        prop_assert_eq!(counts.dist_total(), matches);
        prop_assert_eq!(counts.litlen[256], usize::from(with_eob));
        prop_assert_eq!(counts.litlen[286] + counts.litlen[287], 0);
        prop_assert_eq!(counts.dist[30] + counts.dist[31], 0);
    }

    #[test]
    fn verifier_rejects_mismatched_source(
        input in proptest::collection::vec(any::<u8>(), 8..256),
        pos_seed in any::<prop::sample::Index>(),
        dist_seed in any::<prop::sample::Index>(),
    ) {
        // Place a 3-byte match whose first byte is forced to differ.
        let pos = 1 + pos_seed.index(input.len() - 3);
        let dist = 1 + dist_seed.index(pos);
        let mut data = input;
        data[pos] = data[pos - dist].wrapping_add(1);

        prop_assert_eq!(
            verify_len_dist(&data, pos, dist as u16, 3),
            Err(BackrefError::corrupt_match(pos, dist as u16, 3, Some(0)))
        );
    }

    #[test]
    fn copy_is_independent(input in repetitive_bytes()) {
        let original = lz77_lazy(&Lz77Options::default(), &input, 0, input.len()).unwrap();
        let mut copy = original.clone();
        copy.push_literal(b'!');
        copy.release();
        copy.release();
        prop_assert_eq!(copy.len(), 0);
        prop_assert_eq!(original.reconstruct(&[]).unwrap(), input);
    }
}

#[test]
fn lazy_decision_skips_two_shorter_match() {
    // At 13 "abcd" (4 bytes) is available, at 14 "bcdefg" (6 bytes).
    let input = b"xabcdQbcdefgRabcdefgZ";
    let store = lz77_lazy(&Lz77Options::default(), input, 0, input.len()).unwrap();

    let mut pos = 0;
    let mut at_13 = None;
    let mut at_14 = None;
    for token in store.iter() {
        match pos {
            13 => at_13 = Some(token),
            14 => at_14 = Some(token),
            _ => {}
        }
        pos += token.byte_len();
    }

    assert_eq!(at_13, Some(Lz77Token::Literal(b'a')));
    assert_eq!(
        at_14,
        Some(Lz77Token::Match {
            length: 6,
            distance: 8
        })
    );
}

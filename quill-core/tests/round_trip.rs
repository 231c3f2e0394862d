//! Round-trip and self-inverse properties across the whole registry.

use quill_core::{apply, output_bound, CodecError, Mode, Scheme, TransformOptions};

/// Schemes that upper-case or drop characters, so decode cannot recover
/// arbitrary input.
const LOSSY: &[Scheme] = &[Scheme::A1z26, Scheme::Nato, Scheme::Morse, Scheme::Bacon];

/// Schemes whose decode only recovers non-ASCII-only input shapes.
const DOMAIN_SHAPED: &[Scheme] = &[Scheme::Punycode];

const SELF_INVERSE: &[Scheme] =
    &[Scheme::Reverse, Scheme::Rot13, Scheme::Rot5, Scheme::Rot47, Scheme::Atbash];

fn round_trip_schemes() -> impl Iterator<Item = Scheme> {
    Scheme::ALL.iter().copied().filter(|s| {
        s.is_reversible() && !LOSSY.contains(s) && !DOMAIN_SHAPED.contains(s)
    })
}

fn round_trip(scheme: Scheme, text: &str, options: &TransformOptions) -> Result<String, CodecError> {
    let encoded = apply(Mode::Encode, scheme, text, options)?;
    apply(Mode::Decode, scheme, &encoded, options)
}

#[test]
fn fixed_inputs_round_trip_through_every_reversible_scheme() {
    let inputs = ["", "a", "Hello World", "  spaced  out  ", "x+y=z & <tag>", "naïve café 😀"];
    let options = TransformOptions::default();
    for scheme in round_trip_schemes() {
        for input in inputs {
            match round_trip(scheme, input, &options) {
                Ok(back) => assert_eq!(back, input, "{scheme} did not round-trip {input:?}"),
                Err(e) => panic!("{scheme} failed on {input:?}: {e}"),
            }
        }
    }
}

#[test]
fn lossy_schemes_recover_upper_case_letters() {
    let options = TransformOptions::default();
    for &scheme in LOSSY {
        match round_trip(scheme, "HELLO WORLD", &options) {
            Ok(back) => assert_eq!(back, "HELLO WORLD", "{scheme} lost letters"),
            Err(e) => panic!("{scheme} failed: {e}"),
        }
    }
}

#[test]
fn every_hash_refuses_to_decode() {
    let options = TransformOptions::default();
    for &scheme in Scheme::ALL.iter().filter(|s| !s.is_reversible()) {
        let err = apply(Mode::Decode, scheme, "deadbeef", &options);
        assert!(matches!(err, Err(CodecError::NotReversible(s)) if s == scheme), "{scheme}: {err:?}");
    }
}

#[test]
fn custom_options_round_trip() {
    let options = TransformOptions::new()
        .with_shift(-40)
        .with_key("Longer Key!")
        .with_separator(",\n");
    for scheme in [Scheme::Caesar, Scheme::Vigenere, Scheme::Xor, Scheme::Binary, Scheme::Hex0x] {
        match round_trip(scheme, "The quick brown fox", &options) {
            Ok(back) => assert_eq!(back, "The quick brown fox", "{scheme} with custom options"),
            Err(e) => panic!("{scheme} failed: {e}"),
        }
    }
}

proptest::proptest! {
    #[test]
    fn proptest_printable_ascii_round_trips(text in "[ -~]{0,48}") {
        let options = TransformOptions::default();
        for scheme in round_trip_schemes() {
            let back = round_trip(scheme, &text, &options);
            proptest::prop_assert!(back.is_ok(), "{} failed: {:?}", scheme, back);
            proptest::prop_assert_eq!(back.ok(), Some(text.clone()), "{} round-trip", scheme);
        }
    }

    #[test]
    fn proptest_unicode_round_trips(text in "\\PC{0,24}") {
        let options = TransformOptions::default();
        for scheme in round_trip_schemes() {
            let back = round_trip(scheme, &text, &options);
            proptest::prop_assert_eq!(back.ok(), Some(text.clone()), "{} round-trip", scheme);
        }
    }

    #[test]
    fn proptest_self_inverse_schemes(text in "\\PC{0,32}") {
        let options = TransformOptions::default();
        for &scheme in SELF_INVERSE {
            let once = apply(Mode::Encode, scheme, &text, &options);
            let twice = once.and_then(|s| apply(Mode::Encode, scheme, &s, &options));
            proptest::prop_assert_eq!(twice.ok(), Some(text.clone()), "{} twice", scheme);
        }
    }

    #[test]
    fn proptest_caesar_any_shift(text in "[ -~]{0,32}", shift in proptest::prelude::any::<i64>()) {
        let options = TransformOptions::new().with_shift(shift);
        let back = round_trip(Scheme::Caesar, &text, &options);
        proptest::prop_assert_eq!(back.ok(), Some(text), "caesar with shift {}", shift);
    }

    #[test]
    fn proptest_decoders_never_panic(id in 0..Scheme::ALL.len(), text in "\\PC{0,32}") {
        let scheme = Scheme::ALL[id];
        let _ = apply(Mode::Decode, scheme, &text, &TransformOptions::default());
    }

    #[test]
    fn proptest_output_never_exceeds_bound(
        id in 0..Scheme::ALL.len(),
        text in "\\PC{0,40}",
        separator in "[ ,;:-]{0,4}",
    ) {
        let scheme = Scheme::ALL[id];
        let options = TransformOptions::new().with_separator(separator);
        for mode in [Mode::Encode, Mode::Decode] {
            let input = match mode {
                Mode::Encode => text.clone(),
                Mode::Decode => match apply(Mode::Encode, scheme, &text, &options) {
                    Ok(encoded) => encoded,
                    Err(_) => continue,
                },
            };
            if let Ok(output) = apply(mode, scheme, &input, &options) {
                let bound = output_bound(mode, scheme, &input, &options);
                proptest::prop_assert!(
                    output.len() <= bound,
                    "{} {:?}: {} bytes over bound {}", scheme, mode, output.len(), bound
                );
            }
        }
    }
}

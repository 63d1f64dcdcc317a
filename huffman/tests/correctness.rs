extern crate env_logger;
extern crate huffcode;
extern crate itertools;
#[macro_use] extern crate quickcheck;

use huffcode::Codes;
use huffcode::Config;
use huffcode::DecompressError;
use huffcode::DeserializeError;
use huffcode::EmptyInput;
use huffcode::Error;
use huffcode::Frequencies;
use huffcode::TieBreak;
use huffcode::Tree;
use itertools::Itertools;
use quickcheck::TestResult;

fn init_logger() {
    // Another test might have been first.
    let _ = env_logger::init();
}

fn build(text: &[u8], tie_break: TieBreak) -> Tree {
    Tree::build(&Frequencies::from_text(text), tie_break).unwrap()
}

fn code_strings(codes: &Codes) -> Vec<(u8, String)> {
    codes.iter().map(|(s, c)| (s, c.to_string())).collect_vec()
}

fn roundtrip(text: &[u8], tie_break: TieBreak) -> bool {
    let compressed = Config::new().tie_break(tie_break).compress(text).unwrap();
    huffcode::decompress(&compressed.bits, &compressed.tree).unwrap() == text
}

#[test]
fn three_symbols() {
    init_logger();
    let c = huffcode::compress(b"aaabbc").unwrap();
    assert_eq!(c.codes.get(b'a').unwrap().len(), 1);
    assert_eq!(c.codes.get(b'b').unwrap().len(), 2);
    assert_eq!(c.codes.get(b'c').unwrap().len(), 2);
    assert_eq!(code_strings(&c.codes), [
        (b'a', "1".to_string()),
        (b'b', "01".to_string()),
        (b'c', "00".to_string()),
    ]);
    assert_eq!(c.bits, "111010100");
    assert_eq!(c.tree, b"LcLbBLaB");
    assert_eq!(huffcode::decompress(&c.bits, &c.tree).unwrap(), b"aaabbc");
}

#[test]
fn single_symbol() {
    init_logger();
    let c = huffcode::compress(b"zzzz").unwrap();
    assert_eq!(c.codes.get(b'z').unwrap().to_string(), "0");
    assert_eq!(c.bits, "0000");
    assert_eq!(c.tree, b"Lz");
    assert_eq!(huffcode::decompress("0000", b"Lz").unwrap(), b"zzzz");
}

#[test]
fn tie_break_stable() {
    let first = build(b"aabb", TieBreak::Ascending);
    let first = code_strings(&Codes::from_tree(&first));
    assert_eq!(first, [(b'a', "0".to_string()), (b'b', "1".to_string())]);
    for _ in 0..32 {
        let again = build(b"aabb", TieBreak::Ascending);
        assert_eq!(code_strings(&Codes::from_tree(&again)), first);
    }
    let descending = build(b"aabb", TieBreak::Descending);
    assert_eq!(code_strings(&Codes::from_tree(&descending)),
        [(b'a', "1".to_string()), (b'b', "0".to_string())]);
}

#[test]
fn lone_branch() {
    assert_eq!(Tree::deserialize(b"B").unwrap_err(), DeserializeError::StackUnderflow);
    assert_eq!(huffcode::decompress("", b"B"),
        Err(Error::Deserialize(DeserializeError::StackUnderflow)));
}

#[test]
fn empty_input() {
    let frequencies = Frequencies::from_text(b"");
    assert_eq!(Tree::build(&frequencies, TieBreak::Ascending).unwrap_err(), EmptyInput);
    assert_eq!(huffcode::compress(b"").unwrap_err(), EmptyInput);
}

#[test]
fn truncated_stream() {
    let c = huffcode::compress(b"hello world").unwrap();
    let bits = &c.bits[..c.bits.len() - 1];
    assert_eq!(huffcode::decompress(bits, &c.tree),
        Err(Error::Decompress(DecompressError::Truncated)));
}

#[test]
fn unknown_symbol() {
    let codes = Codes::from_tree(&build(b"abc", TieBreak::Ascending));
    let error: Error = codes.compress(b"abcd").unwrap_err().into();
    assert_eq!(error, Error::UnknownSymbol(b'd'));
}

#[test]
fn all_bytes() {
    init_logger();
    let text = (0..=255u8).chain(0..128).collect_vec();
    assert!(roundtrip(&text, TieBreak::Ascending));
    assert!(roundtrip(&text, TieBreak::Descending));
}

#[test]
fn skewed() {
    // Fibonacci frequencies produce a maximally deep tree.
    let mut text = vec![];
    let (mut a, mut b) = (1, 1);
    for symbol in 0..20u8 {
        for _ in 0..a {
            text.push(symbol);
        }
        let next = a + b;
        a = b;
        b = next;
    }
    let tree = build(&text, TieBreak::Ascending);
    let codes = Codes::from_tree(&tree);
    assert_eq!(codes.iter().map(|(_, c)| c.len()).max(), Some(19));
    assert!(roundtrip(&text, TieBreak::Ascending));
}

quickcheck! {
    fn prop_roundtrip(text: Vec<u8>) -> TestResult {
        if text.is_empty() {
            return TestResult::discard();
        }
        TestResult::from_bool(roundtrip(&text, TieBreak::Ascending)
            && roundtrip(&text, TieBreak::Descending))
    }

    fn prop_packed_roundtrip(text: Vec<u8>) -> TestResult {
        if text.is_empty() {
            return TestResult::discard();
        }
        let tree = build(&text, TieBreak::Ascending);
        let codes = Codes::from_tree(&tree);
        let mut buffer = Vec::with_capacity(codes.compressed_len(&text).unwrap());
        let packed = codes.compress_packed(&text, &mut buffer).unwrap();
        let num_bits = codes.compressed_bit_len(&text).unwrap();
        TestResult::from_bool(packed.len() == codes.compressed_len(&text).unwrap()
            && tree.decompress_packed(packed, num_bits).unwrap() == text)
    }

    fn prop_prefix_free(text: Vec<u8>) -> TestResult {
        if text.is_empty() {
            return TestResult::discard();
        }
        let codes = Codes::from_tree(&build(&text, TieBreak::Ascending));
        for (a, ca) in codes.iter() {
            for (b, cb) in codes.iter() {
                if a != b && ca.is_prefix_of(cb) {
                    return TestResult::failed();
                }
            }
        }
        TestResult::passed()
    }

    fn prop_frequency_order(text: Vec<u8>) -> TestResult {
        if text.is_empty() {
            return TestResult::discard();
        }
        let frequencies = Frequencies::from_text(&text);
        let codes = Codes::from_tree(&Tree::build(&frequencies, TieBreak::Ascending).unwrap());
        for (a, ca) in codes.iter() {
            for (b, cb) in codes.iter() {
                if frequencies.get(a) < frequencies.get(b) && ca.len() < cb.len() {
                    return TestResult::failed();
                }
            }
        }
        TestResult::passed()
    }

    fn prop_serialization_roundtrip(text: Vec<u8>) -> TestResult {
        if text.is_empty() {
            return TestResult::discard();
        }
        let tree = build(&text, TieBreak::Ascending);
        let rebuilt = Tree::deserialize(&tree.serialize()).unwrap();
        TestResult::from_bool(Codes::from_tree(&rebuilt) == Codes::from_tree(&tree))
    }

    fn prop_every_symbol_coded(text: Vec<u8>) -> TestResult {
        if text.is_empty() {
            return TestResult::discard();
        }
        let frequencies = Frequencies::from_text(&text);
        let codes = Codes::from_tree(&Tree::build(&frequencies, TieBreak::Ascending).unwrap());
        TestResult::from_bool(codes.len() == frequencies.num_symbols()
            && codes.iter().all(|(s, c)| frequencies.get(s) != 0 && !c.is_empty()))
    }

    fn deserialize_no_panic(data: Vec<u8>) -> bool {
        let _ = Tree::deserialize(&data);
        true
    }

    fn decompress_no_panic(text: Vec<u8>, bits: Vec<bool>) -> TestResult {
        if text.is_empty() {
            return TestResult::discard();
        }
        let tree = build(&text, TieBreak::Ascending);
        let bits: String = bits.into_iter().map(|b| if b { '1' } else { '0' }).collect();
        let _ = tree.decompress(&bits);
        TestResult::passed()
    }
}

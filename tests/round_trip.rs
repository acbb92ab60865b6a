use huffcode::huffman::{
    build_code_table, build_frequency_table, build_huffman_tree, compress, decompress,
    huffman_decode, huffman_encode, pack_bits, unpack_bits,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_ascii(rng: &mut StdRng, len: usize, alphabet: &[u8]) -> String {
    (0..len)
        .map(|_| char::from(alphabet[rng.gen_range(0..alphabet.len())]))
        .collect()
}

#[test]
fn test_random_texts_round_trip() {
    let mut rng = StdRng::seed_from_u64(42);
    let alphabet: Vec<u8> = (0u8..128).collect();
    for _ in 0..200 {
        let len = rng.gen_range(1..500);
        let text = random_ascii(&mut rng, len, &alphabet);
        let (bytes, tree) = compress(&text).unwrap();
        assert_eq!(decompress(&bytes, &tree).unwrap(), text);
    }
}

#[test]
fn test_skewed_texts_round_trip() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let len = rng.gen_range(1..2000);
        let text = random_ascii(&mut rng, len, b"aaaaaaaaaaaaaaabbbbbccd");
        let (encoded, tree) = huffman_encode(&text).unwrap();
        assert_eq!(huffman_decode(&encoded, &tree).unwrap(), text);
    }
}

#[test]
fn test_single_symbol_texts_round_trip() {
    for ch in ['a', ' ', '\n', '\u{0}', '\u{7f}'] {
        for len in [1, 7, 8, 9, 64] {
            let text: String = std::iter::repeat(ch).take(len).collect();
            let (bytes, tree) = compress(&text).unwrap();
            assert_eq!(tree.leaf_count(), 2);
            assert_eq!(decompress(&bytes, &tree).unwrap(), text);
        }
    }
}

#[test]
fn test_prefix_free_on_random_alphabets() {
    let mut rng = StdRng::seed_from_u64(1234);
    let alphabet: Vec<u8> = (b' '..=b'~').collect();
    for _ in 0..20 {
        let text = random_ascii(&mut rng, 300, &alphabet);
        let frequencies = build_frequency_table(&text).unwrap();
        let tree = build_huffman_tree(&frequencies).unwrap();
        let table = build_code_table(&tree);
        assert_eq!(table.len(), frequencies.len());

        let codes: Vec<&str> = table.iter().map(|(_, code)| code).collect();
        for a in &codes {
            assert!(!a.is_empty());
            for b in &codes {
                if a != b {
                    assert!(!b.starts_with(a), "{a} is a prefix of {b}");
                }
            }
        }
    }
}

#[test]
fn test_huffman_beats_fixed_width() {
    let text = "abracadabra alakazam ".repeat(20);
    let frequencies = build_frequency_table(&text).unwrap();
    let table = build_code_table(&build_huffman_tree(&frequencies).unwrap());
    // 10 distinct symbols would need 4 bits each with a fixed-width code.
    assert_eq!(table.len(), 10);
    assert!(table.average_code_length(&frequencies) < 4.0);
}

#[test]
fn test_packing_preserves_length() {
    let mut rng = StdRng::seed_from_u64(99);
    for len in 0..64 {
        let bits: String = (0..len)
            .map(|_| if rng.gen_bool(0.5) { '1' } else { '0' })
            .collect();
        let packed = pack_bits(&bits).unwrap();
        assert_eq!(packed.len(), len / 8 + 1);
        assert_eq!(unpack_bits(&packed).unwrap(), bits);
    }
}

#[test]
fn test_crate_root_exports_file_and_counting_helpers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bits.bin");
    huffcode::write_bit_string(&path, "1010").unwrap();
    assert_eq!(
        huffcode::read_bit_string(&path, huffcode::UnpackMode::Strict).unwrap(),
        "1010"
    );
    assert_eq!(
        huffcode::unpack_bits_with(&[0x00, 0xA0], huffcode::UnpackMode::Lenient).unwrap(),
        "10100000"
    );
    let counts = huffcode::count_characters("aab").unwrap();
    assert_eq!(counts.get(&'a'), Some(&2));
    assert_eq!(huffcode::ALPHABET_SIZE, 128);
}

use bitvec::prelude::*;
use packed_bitarray::{BitArray, floor_mod};
use proptest::prelude::*;
use rand::{SeedableRng, rngs::StdRng};

fn filled(bits: usize, seed: u64) -> BitArray {
    let mut array = BitArray::new(bits);
    array.random_fill(&mut StdRng::seed_from_u64(seed));
    array
}

// Strategy for a randomly filled array plus a sub-range inside it
prop_compose! {
    fn arb_range(max_bits: usize)
        (bits in 1..max_bits, seed in any::<u64>())
        (offset in 0..=bits, len_seed in any::<usize>(), bits in Just(bits), seed in Just(seed))
        -> (BitArray, usize, usize)
    {
        let length = len_seed % (bits - offset + 1);
        (filled(bits, seed), offset, length)
    }
}

// Strategy for an inclusive range [left, right] inside a randomly filled array
prop_compose! {
    fn arb_reverse(max_bits: usize)
        (bits in 1..max_bits, seed in any::<u64>())
        (a in 0..bits, b in 0..bits, bits in Just(bits), seed in Just(seed))
        -> (BitArray, usize, usize)
    {
        (filled(bits, seed), a.min(b), a.max(b))
    }
}

fn model(array: &BitArray) -> Vec<bool> {
    array.iter().collect()
}

proptest! {
    #[test]
    fn test_set_get_round_trip(
        (array, index, _len) in arb_range(300),
        value in any::<bool>()
    ) {
        prop_assume!(index < array.len());
        let mut array = array;
        let mut expected = model(&array);

        array.set(index, value);
        expected[index] = value;

        prop_assert_eq!(array.get(index), value);
        prop_assert_eq!(model(&array), expected);
    }

    #[test]
    fn test_reverse_matches_model((array, left, right) in arb_reverse(300)) {
        let mut array = array;
        let mut expected = model(&array);

        array.reverse(left, right);
        expected[left..=right].reverse();

        prop_assert_eq!(model(&array), expected);
    }

    #[test]
    fn test_reverse_is_self_inverse((array, left, right) in arb_reverse(300)) {
        let original = array.clone();
        let mut array = array;

        array.reverse(left, right);
        array.reverse(left, right);

        prop_assert_eq!(array.as_bytes(), original.as_bytes());
    }

    #[test]
    fn test_rotate_matches_model(
        (array, offset, length) in arb_range(300),
        amount in -1000isize..1000
    ) {
        let mut array = array;
        let mut expected = model(&array);

        array.rotate(offset, length, amount);
        if length > 0 {
            expected[offset..offset + length].rotate_right(floor_mod(amount, length));
        }

        prop_assert_eq!(model(&array), expected);
    }

    #[test]
    fn test_rotate_matches_bitvec(
        (array, offset, length) in arb_range(400),
        amount in any::<isize>()
    ) {
        let mut reference = BitVec::<u8, Lsb0>::from_vec(array.as_bytes().to_vec());
        let mut array = array;

        array.rotate(offset, length, amount);
        if length > 0 {
            reference[offset..offset + length].rotate_right(floor_mod(amount, length));
        }

        // Tail bits are untouched on both sides, so whole bytes compare equal.
        prop_assert_eq!(array.as_bytes(), reference.as_raw_slice());
    }

    #[test]
    fn test_rotate_by_multiple_is_noop(
        (array, offset, length) in arb_range(300),
        turns in -4isize..=4
    ) {
        let original = array.clone();
        let mut array = array;

        array.rotate(offset, length, 0);
        prop_assert_eq!(&array, &original);

        array.rotate(offset, length, turns * length as isize);
        prop_assert_eq!(&array, &original);
    }

    #[test]
    fn test_left_right_duality(
        (array, offset, length) in arb_range(300),
        k_seed in any::<usize>()
    ) {
        prop_assume!(length > 0);
        let k = k_seed % length;
        let signed_len = length as isize;

        let mut a = array.clone();
        let mut b = array.clone();
        let mut c = array;
        a.rotate(offset, length, k as isize);
        b.rotate(offset, length, k as isize - signed_len);
        c.rotate(offset, length, -(signed_len - k as isize));

        prop_assert_eq!(&a, &b);
        prop_assert_eq!(&a, &c);
    }

    #[test]
    fn test_rotations_compose(
        (array, offset, length) in arb_range(300),
        a in -500isize..500,
        b in -500isize..500
    ) {
        let mut twice = array.clone();
        let mut once = array;

        twice.rotate(offset, length, a);
        twice.rotate(offset, length, b);
        once.rotate(offset, length, a + b);

        prop_assert_eq!(twice, once);
    }

    #[test]
    fn test_rotate_is_local(
        (array, offset, length) in arb_range(300),
        amount in any::<isize>()
    ) {
        let before = model(&array);
        let mut array = array;

        array.rotate(offset, length, amount);

        let after = model(&array);
        prop_assert_eq!(&after[..offset], &before[..offset]);
        prop_assert_eq!(&after[offset + length..], &before[offset + length..]);

        let mut inside_before = before[offset..offset + length].to_vec();
        let mut inside_after = after[offset..offset + length].to_vec();
        inside_before.sort_unstable();
        inside_after.sort_unstable();
        prop_assert_eq!(inside_after, inside_before);
    }
}

//! Walks through building, rotating and reversing a `BitArray`.

use packed_bitarray::{AllocError, BitArray};
use rand::{SeedableRng, rngs::StdRng};

fn main() -> Result<(), AllocError> {
    println!("=== BitArray Rotation ===\n");

    let mut bits = BitArray::try_new(10)?;
    for i in 5..10 {
        bits.set(i, true);
    }
    println!("Start (bit 0 on the right): {bits}");

    bits.rotate(2, 6, 2);
    println!("Bits 2..8 rotated right by 2: {bits}");

    bits.rotate(2, 6, -2);
    println!("Rotated back by -2:           {bits}");

    bits.reverse(0, 9);
    println!("Whole array reversed:         {bits}\n");

    let mut large = BitArray::try_new(77)?;
    large.random_fill(&mut StdRng::seed_from_u64(2024));
    println!("Random 77-bit array:  {large}");
    println!("Set bits: {}", large.count_ones());

    let before = large.clone();
    large.rotate(5, 64, 1000);
    large.rotate(5, 64, -1000);
    println!("Round trip restored:  {}", large == before);

    match BitArray::try_new(usize::MAX) {
        Ok(_) => println!("\nUnexpectedly allocated usize::MAX bits"),
        Err(err) => println!("\nHuge allocation refused: {err}"),
    }

    Ok(())
}

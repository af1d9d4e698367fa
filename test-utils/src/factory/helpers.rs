//! Shared helper utilities for factory methods.

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Builds a checksum-valid CPF from a numeric seed.
///
/// The seed is folded into a nine-digit base starting at `100000000`, so the base never
/// consists of identical digits, then both modulo-11 check digits are appended.
///
/// # Arguments
/// - `seed` - Any number; distinct seeds below 900 million yield distinct CPFs
///
/// # Returns
/// - `String` - Eleven-digit CPF that passes checksum validation
pub fn valid_cpf(seed: u64) -> String {
    let base = 100_000_000 + seed % 900_000_000;
    let mut digits: Vec<u32> = base
        .to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect();

    for _ in 0..2 {
        let weight_start = digits.len() as u32 + 1;
        let sum: u32 = digits
            .iter()
            .enumerate()
            .map(|(i, d)| d * (weight_start - i as u32))
            .sum();
        let remainder = sum % 11;
        digits.push(if remainder < 2 { 0 } else { 11 - remainder });
    }

    digits
        .into_iter()
        .filter_map(|d| char::from_digit(d, 10))
        .collect()
}

/// Generates a checksum-valid CPF that is unique within the test run.
pub fn next_cpf() -> String {
    valid_cpf(next_id())
}

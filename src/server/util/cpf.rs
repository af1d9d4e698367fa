//! Brazilian CPF (individual taxpayer number) validation.

const CPF_LENGTH: usize = 11;

/// Returns true when `cpf` is a well-formed CPF.
///
/// A CPF is eleven ASCII digits whose last two are modulo-11 check digits. Strings of
/// eleven identical digits satisfy the checksum but are never issued, so they are rejected.
/// Formatted input such as `529.982.247-25` is rejected; callers send bare digits.
pub fn is_valid_cpf(cpf: &str) -> bool {
    if cpf.len() != CPF_LENGTH || !cpf.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let digits: Vec<u32> = cpf.bytes().map(|b| u32::from(b - b'0')).collect();

    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    check_digit(&digits[..9]) == digits[9] && check_digit(&digits[..10]) == digits[10]
}

/// Computes the check digit following `digits`.
///
/// Weights run from `digits.len() + 1` down to 2; a remainder below 2 maps to 0.
fn check_digit(digits: &[u32]) -> u32 {
    let first_weight = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| d * (first_weight - i as u32))
        .sum();

    match sum % 11 {
        0 | 1 => 0,
        remainder => 11 - remainder,
    }
}

use crate::errors::GenerationError;

/// Compute the Luhn check digit for a 14-digit IMEI prefix (TAC + FAC + SNR).
///
/// Digits at odd 0-based positions are doubled, doubles above 9 are reduced
/// by 9, and the check digit is whatever brings the sum to a multiple of 10.
pub fn luhn_check_digit(digits: &str) -> Result<u8, GenerationError> {
    if digits.len() != 14 {
        return Err(GenerationError::InvalidInput(format!(
            "expected 14 digits, got {}",
            digits.len()
        )));
    }

    let mut sum = 0u32;
    for (position, ch) in digits.chars().enumerate() {
        let mut digit = ch.to_digit(10).ok_or_else(|| {
            GenerationError::InvalidInput(format!("non-digit character '{ch}'"))
        })?;
        if position % 2 == 1 {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
    }

    Ok(((10 - sum % 10) % 10) as u8)
}

/// Whether a full 15-digit IMEI passes the Luhn check.
///
/// The check digit sits at an even position and is therefore never doubled.
pub fn luhn_is_valid(digits: &str) -> bool {
    if digits.len() != 15 || !digits.chars().all(|ch| ch.is_ascii_digit()) {
        return false;
    }

    let sum: u32 = digits
        .chars()
        .filter_map(|ch| ch.to_digit(10))
        .enumerate()
        .map(|(position, digit)| {
            if position % 2 == 1 {
                let doubled = digit * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                digit
            }
        })
        .sum();

    sum % 10 == 0
}

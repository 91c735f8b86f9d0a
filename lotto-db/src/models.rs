use std::fmt;

use crate::error::NumberError;

pub const MIN_NUMBER: u8 = 1;
pub const MAX_NUMBER: u8 = 45;
pub const PICK_COUNT: usize = 6;
/// Seuil des numéros « hauts » (23-45).
pub const HIGH_THRESHOLD: u8 = 23;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    pub draw_id: u32,
    pub numbers: [u8; PICK_COUNT],
}

impl Draw {
    pub fn new(draw_id: u32, numbers: [u8; PICK_COUNT]) -> Result<Self, NumberError> {
        validate_numbers(&numbers, "Tirage")?;
        Ok(Self { draw_id, numbers })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberStats {
    pub number: u8,
    pub frequency: u32,
    /// Nombre de tirages écoulés depuis la dernière sortie.
    pub gap: u32,
}

/// Grille de 6 numéros distincts dans 1-45, triée par ordre croissant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumberSet([u8; PICK_COUNT]);

impl NumberSet {
    pub fn new(numbers: &[u8]) -> Result<Self, NumberError> {
        if numbers.len() != PICK_COUNT {
            return Err(NumberError::Count {
                expected: PICK_COUNT,
                found: numbers.len(),
            });
        }
        validate_numbers(numbers, "Grille")?;

        let mut arr = [0u8; PICK_COUNT];
        arr.copy_from_slice(numbers);
        arr.sort();
        Ok(Self(arr))
    }

    pub fn numbers(&self) -> &[u8; PICK_COUNT] {
        &self.0
    }

    pub fn contains(&self, n: u8) -> bool {
        self.0.contains(&n)
    }

    pub fn odd_count(&self) -> usize {
        self.0.iter().filter(|&&n| n % 2 == 1).count()
    }

    pub fn high_count(&self) -> usize {
        self.0.iter().filter(|&&n| n >= HIGH_THRESHOLD).count()
    }

    pub fn sum(&self) -> u32 {
        self.0.iter().map(|&n| n as u32).sum()
    }
}

impl fmt::Display for NumberSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self
            .0
            .iter()
            .map(|n| format!("{:2}", n))
            .collect::<Vec<_>>()
            .join(" - ");
        write!(f, "{s}")
    }
}

pub fn is_valid_number(n: i64) -> bool {
    (MIN_NUMBER as i64..=MAX_NUMBER as i64).contains(&n)
}

/// Contrôle de plage puis de doublons. Ne modifie pas l'entrée.
pub fn validate_numbers(numbers: &[u8], label: &str) -> Result<(), NumberError> {
    if let Some(&n) = numbers.iter().find(|&&n| !is_valid_number(n as i64)) {
        return Err(NumberError::Range {
            label: label.to_string(),
            number: n as i64,
        });
    }

    let mut seen = [false; MAX_NUMBER as usize + 1];
    for &n in numbers {
        if seen[n as usize] {
            return Err(NumberError::Duplicate {
                label: label.to_string(),
                number: n,
            });
        }
        seen[n as usize] = true;
    }
    Ok(())
}

/// Analyse une saisie du type "3, 12, 21". Une saisie vide donne une liste vide.
pub fn parse_numbers(input: &str, label: &str) -> Result<Vec<u8>, NumberError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(Vec::new());
    }

    let mut numbers = Vec::new();
    for token in input.split(',') {
        let token = token.trim();
        let value: i64 = token.parse().map_err(|_| NumberError::InputFormat {
            label: label.to_string(),
            token: token.to_string(),
        })?;
        if !is_valid_number(value) {
            return Err(NumberError::Range {
                label: label.to_string(),
                number: value,
            });
        }
        numbers.push(value as u8);
    }

    validate_numbers(&numbers, label)?;
    Ok(numbers)
}

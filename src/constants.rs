/// Letter table and fixed messages shared across the crate.
/// The weights below are positional: `ALPHABET_WEIGHTS[i]` belongs to `ALPHABET[i]`.

pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

// X and Y carry 7 and 6 respectively, not the usual 6 and 7
pub const ALPHABET_WEIGHTS: [u32; 26] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, 1, 2, 3, 4, 5, 6, 7, 8, 9, 1, 2, 3, 4, 5, 7, 6, 8,
];

/// Values that are never reduced when they come out of the initial letter sum
pub const MASTER_NUMBERS: [u32; 2] = [11, 22];

/// Minimum raw length (spaces included) of an acceptable full name
pub const MIN_NAME_LENGTH: usize = 3;

pub const INVALID_NAME_MESSAGE: &str = "Nome inválido! Digite um nome válido.";
pub const UNRECOGNIZED_NUMBER_MESSAGE: &str = "Número não reconhecido.";

// Config and logging defaults
pub const DEFAULT_CONFIG_FILE: &str = "numerology.toml";
pub const CONFIG_PATH_ENV: &str = "NUMEROLOGY_CONFIG";
pub const DEFAULT_LOG_DIR: &str = "logs";
pub const DEFAULT_LOG_FILE: &str = "numerology.log";
pub const DEFAULT_LOG_FILTER: &str = "numerology=info";

/// Weight of an upper-case Latin letter, `None` for anything outside `A..=Z`
pub fn letter_weight(letter: char) -> Option<u32> {
    ALPHABET.find(letter).map(|idx| ALPHABET_WEIGHTS[idx])
}

/// Get every letter paired with its weight, in alphabet order
pub fn weight_table() -> Vec<(char, u32)> {
    ALPHABET.chars().zip(ALPHABET_WEIGHTS).collect()
}

use crate::constants::MIN_NAME_LENGTH;

/// Decides whether raw input is acceptable as a full name.
///
/// The three checks are independent:
/// - at least `MIN_NAME_LENGTH` characters before trimming, spaces included
/// - some character is a letter or anything other than a plain space
/// - a space survives inside the trimmed text (first name + last name)
pub fn is_valid(name: &str) -> bool {
    let long_enough = name.chars().count() >= MIN_NAME_LENGTH;
    let has_content = name.chars().any(|c| c.is_alphabetic() || c != ' ');
    let has_inner_space = name.trim().contains(' ');

    tracing::trace!(long_enough, has_content, has_inner_space, "validated name");

    long_enough && has_content && has_inner_space
}

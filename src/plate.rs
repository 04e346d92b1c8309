// src/plate.rs
//
// Plate text validation and cleanup. Plates follow a 7-character layout:
// positions 0,1,4,5,6 hold uppercase letters, positions 2,3 hold digits.
// OCR reliably confuses a handful of glyph pairs (O/0, I/1, J/3, A/4, G/6,
// S/5), so a character of the wrong class is accepted when it has a
// counterpart in the right class, and `format_license` maps it over.

/// Digit a confusable letter stands in for, if any.
fn as_digit(c: char) -> Option<char> {
    Some(match c {
        'O' => '0',
        'I' => '1',
        'J' => '3',
        'A' => '4',
        'G' => '6',
        'S' => '5',
        _ => return None,
    })
}

/// Letter a confusable digit stands in for, if any.
fn as_letter(c: char) -> Option<char> {
    Some(match c {
        '0' => 'O',
        '1' => 'I',
        '3' => 'J',
        '4' => 'A',
        '6' => 'G',
        '5' => 'S',
        _ => return None,
    })
}

/// Whether `text` fits the plate layout, counting confusable glyphs as
/// members of the class their position requires.
pub fn complies_format(text: &str) -> bool {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() != 7 {
        return false;
    }
    chars.iter().enumerate().all(|(i, &c)| match i {
        2 | 3 => c.is_ascii_digit() || as_digit(c).is_some(),
        _ => c.is_ascii_uppercase() || as_letter(c).is_some(),
    })
}

/// Map each character toward the class its position requires: digit
/// positions get letter->digit substitution, letter positions digit->letter.
/// Characters already in the right class (or with no counterpart) pass
/// through. Call on text that passed [`complies_format`].
pub fn format_license(text: &str) -> String {
    text.chars()
        .enumerate()
        .map(|(i, c)| match i {
            2 | 3 => as_digit(c).unwrap_or(c),
            _ => as_letter(c).unwrap_or(c),
        })
        .collect()
}

/// Clean a raw OCR readout: uppercase, strip spaces, then gate on the plate
/// layout and apply the confusion mapping. `None` when the cleaned text does
/// not fit the layout.
pub fn normalize(raw: &str) -> Option<String> {
    let cleaned: String = raw
        .to_uppercase()
        .chars()
        .filter(|c| *c != ' ')
        .collect();
    complies_format(&cleaned).then(|| format_license(&cleaned))
}

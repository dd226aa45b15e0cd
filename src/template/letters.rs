//! Polish letter fallback for printers without a Latin-2 code page.

/// Replace Polish special letters with their plain ASCII base letter.
///
/// Characters outside the table pass through unchanged.
///
/// ```
/// use tp::template::letters::strip_accents;
///
/// assert_eq!(strip_accents("Zażółć gęślą jaźń"), "Zazolc gesla jazn");
/// ```
pub fn strip_accents(text: &str) -> String {
    text.chars().map(base_letter).collect()
}

fn base_letter(ch: char) -> char {
    match ch {
        'ą' => 'a',
        'ć' => 'c',
        'ę' => 'e',
        'ł' => 'l',
        'ń' => 'n',
        'ó' => 'o',
        'ś' => 's',
        'ź' => 'z',
        'ż' => 'z',
        'Ą' => 'A',
        'Ć' => 'C',
        'Ę' => 'E',
        'Ł' => 'L',
        'Ń' => 'N',
        'Ó' => 'O',
        'Ś' => 'S',
        'Ź' => 'Z',
        'Ż' => 'Z',
        other => other,
    }
}

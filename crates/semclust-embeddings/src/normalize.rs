//! Variable-name cleanup applied before a variable is embedded.
//!
//! Commas and underscores become spaces; each Greek letter becomes its
//! title-cased letter name followed by a space, so `β_rate` reads as
//! `Beta  rate` to a word-level embedder.

/// Letter names for U+03B1..=U+03C9 (`α` to `ω`). Final sigma shares
/// `Sigma`.
const LOWER_NAMES: [&str; 25] = [
    "Alpha", "Beta", "Gamma", "Delta", "Epsilon", "Zeta", "Eta", "Theta", "Iota", "Kappa",
    "Lamda", "Mu", "Nu", "Xi", "Omicron", "Pi", "Rho", "Sigma", "Sigma", "Tau", "Upsilon",
    "Phi", "Chi", "Psi", "Omega",
];

/// Title-cased name of a Greek letter, or `None` for any other character.
///
/// Accented letters (tonos, dialytika) and the symbol variants (`ϑ`, `ϕ`,
/// `ϖ`, `ϵ`, `ϱ`, `ϰ`, `ϐ`, `ϴ`) resolve to their base letter.
pub fn greek_letter_name(c: char) -> Option<&'static str> {
    let cp = c as u32;
    match cp {
        0x03B1..=0x03C9 => Some(LOWER_NAMES[(cp - 0x03B1) as usize]),
        // U+03A2 is unassigned (no capital final sigma).
        0x0391..=0x03A1 | 0x03A3..=0x03A9 => Some(LOWER_NAMES[(cp - 0x0391) as usize]),
        _ => accented_or_symbol(c),
    }
}

fn accented_or_symbol(c: char) -> Option<&'static str> {
    let name = match c {
        'ά' | 'Ά' => "Alpha",
        'έ' | 'Έ' | 'ϵ' => "Epsilon",
        'ή' | 'Ή' => "Eta",
        'ί' | 'Ί' | 'ϊ' | 'Ϊ' | 'ΐ' => "Iota",
        'ό' | 'Ό' => "Omicron",
        'ύ' | 'Ύ' | 'ϋ' | 'Ϋ' | 'ΰ' => "Upsilon",
        'ώ' | 'Ώ' => "Omega",
        'ϐ' => "Beta",
        'ϑ' | 'ϴ' => "Theta",
        'ϕ' => "Phi",
        'ϖ' => "Pi",
        'ϰ' => "Kappa",
        'ϱ' => "Rho",
        _ => return None,
    };
    Some(name)
}

/// Normalize one variable name.
pub fn normalize_variable(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 8);
    for c in raw.chars() {
        match c {
            ',' | '_' => out.push(' '),
            _ => match greek_letter_name(c) {
                Some(name) => {
                    out.push_str(name);
                    out.push(' ');
                }
                None => out.push(c),
            },
        }
    }
    out
}

pub fn normalize_variables(raw: &[String]) -> Vec<String> {
    raw.iter().map(|v| normalize_variable(v)).collect()
}

use anyhow::Context as _;

use crate::cli::NormalizeArgs;
use crate::lemmatize::lemmatize;

/// Splits on whitespace, drops tokens containing an apostrophe or made only of
/// digits, and lemmatizes the rest. Order, case and duplicates are preserved.
#[must_use]
pub fn normalize(raw: &str) -> Vec<String> {
    raw.split_whitespace()
        .filter(|token| !token.contains('\''))
        .filter(|token| !is_digit_token(token))
        .map(lemmatize)
        .collect()
}

/// True when every char is a decimal digit in some script or a digit-valued
/// superscript/circled form. Fractions and Roman numerals do not count.
pub fn is_digit_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(is_digit_char)
}

fn is_digit_char(c: char) -> bool {
    c.is_ascii_digit() || is_decimal_digit(c) || is_digit_form(c)
}

// Zero of each run of ten decimal digits outside ASCII.
const DECIMAL_ZEROS: &[u32] = &[
    0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66, 0x0CE6,
    0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946, 0x19D0,
    0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0, 0xA9F0,
    0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0, 0x112F0,
    0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50, 0x11DA0,
    0x16A60, 0x16AC0, 0x16B50, 0x1E140, 0x1E2F0, 0x1E950, 0x1FBF0,
];

fn is_decimal_digit(c: char) -> bool {
    let code = c as u32;
    // Mathematical digits: five styles of 0-9 back to back.
    if (0x1D7CE..=0x1D7FF).contains(&code) {
        return true;
    }
    DECIMAL_ZEROS
        .iter()
        .any(|zero| (*zero..*zero + 10).contains(&code))
}

fn is_digit_form(c: char) -> bool {
    matches!(c as u32,
        0x00B2..=0x00B3 |
        0x00B9           |
        0x1369..=0x1371 |
        0x19DA           |
        0x2070           |
        0x2074..=0x2079 |
        0x2080..=0x2089 |
        0x2460..=0x2468 |
        0x2474..=0x247C |
        0x2488..=0x2490 |
        0x24EA           |
        0x24F5..=0x24FD |
        0x24FF           |
        0x2776..=0x277E |
        0x2780..=0x2788 |
        0x278A..=0x2792 |
        0x10A40..=0x10A43 |
        0x10E60..=0x10E68 |
        0x11052..=0x1105A |
        0x1F100..=0x1F10A
    )
}

pub fn run(args: NormalizeArgs) -> anyhow::Result<()> {
    let tokens = normalize(&args.text);
    tracing::debug!(count = tokens.len(), "normalized text");

    if args.json {
        let json = serde_json::to_string(&tokens).context("serialize tokens")?;
        println!("{json}");
    } else {
        for token in tokens {
            println!("{token}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::normalize;

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(normalize("").is_empty());
        assert!(normalize("   \t\n").is_empty());
    }

    #[test]
    fn apostrophe_and_numeric_tokens_are_dropped() {
        assert_eq!(
            normalize("the wizard's 3 dragons don't sleep 42nd"),
            vec!["the", "dragon", "sleep", "42nd"]
        );
    }

    #[test]
    fn only_digit_valued_tokens_count_as_numeric() {
        assert_eq!(normalize("½ cup Ⅻ"), vec!["½", "cup", "Ⅻ"]);
        assert_eq!(normalize("٣ ² ① ４ 12 x²"), vec!["x²"]);
    }

    #[test]
    fn case_duplicates_and_punctuation_are_kept() {
        assert_eq!(
            normalize("Dragons dragons dragons, Dragons"),
            vec!["Dragons", "dragon", "dragons,", "Dragons"]
        );
    }

    #[test]
    fn quoted_s_literal_never_survives() {
        assert!(normalize("it 's' here").iter().all(|t| t != "'s'"));
    }
}

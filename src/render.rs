use crate::lookup::{Recommendation, Resolution};

pub const NOT_FOUND_MESSAGE: &str = "Book details not found.";
pub const FAILURE_MESSAGE: &str = "Something went wrong while making a recommendation.";

/// Uppercases each cased letter that follows an uncased char and lowercases
/// the rest, so `"the lord of the rings"` becomes `"The Lord Of The Rings"`
/// and `"o'neil"` becomes `"O'Neil"`. Uncased letters such as CJK neither
/// start nor continue a word.
#[must_use]
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_cased = false;
    for c in text.chars() {
        if prev_is_cased {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_is_cased = c.is_uppercase() || c.is_lowercase();
    }
    out
}

pub fn to_text(rec: &Recommendation) -> String {
    let mut out = format!("You should read {}.\n", title_case(&rec.label));
    match &rec.resolution {
        Resolution::Found { book } => {
            out.push_str(&format!("Title: {}\n", book.title));
            out.push_str(&format!("Author(s): {}\n", book.author_list().join(", ")));
            out.push_str(&format!("Description: {}\n", book.description));
            out.push_str(&format!("Cover: {}\n", book.image));
        }
        Resolution::NotFound => {
            out.push_str(NOT_FOUND_MESSAGE);
            out.push('\n');
        }
    }
    out
}

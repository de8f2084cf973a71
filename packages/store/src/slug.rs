//! Slug generation and validation.
//!
//! [`slugify`] turns arbitrary text into a lowercase ASCII identifier that is
//! legal in a URL path segment. Russian text is transliterated with the
//! customary table (`ж` → `zh`, `щ` → `sch`, `я` → `ya`, …) so that
//! `"Заголовок"` becomes `"zagolovok"`; any other non-ASCII letter goes
//! through `deunicode`.
//!
//! For Russian text the output matches `pytils.translit.slugify`. It differs
//! from pytils in three places:
//!
//! - `_` is kept (`"snake_case"` stays as is; pytils drops it);
//! - letters of other scripts are transliterated (`"Café"` → `"cafe"`, where
//!   pytils gives `"caf"`);
//! - leading and trailing `-` are trimmed (`"! Заметка"` → `"zametka"`, where
//!   pytils gives `"-zametka"`).

/// Longest slug a note may carry.
pub const MAX_SLUG_LEN: usize = 100;

/// Transliterate `text` into a slug.
///
/// The result only contains `[a-z0-9_-]`, never starts or ends with `-` and
/// never contains two `-` in a row. It can be empty when `text` has nothing
/// transliterable in it.
pub fn slugify(text: &str) -> String {
    let mut ascii = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        if c.is_ascii() {
            ascii.push(c);
        } else if let Some(latin) = transliterate_cyrillic(c) {
            ascii.push_str(latin);
        } else if let Some(latin) = deunicode::deunicode_char(c) {
            ascii.push_str(&latin.to_ascii_lowercase());
        }
    }
    let ascii = ascii.replace("&amp;", " and ").replace('&', " and ");

    let mut slug = String::with_capacity(ascii.len());
    let mut pending_dash = false;
    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else if c == '-' || c.is_whitespace() {
            pending_dash = true;
        }
    }
    slug
}

/// Whether `slug` is made only of ASCII letters, digits, `-` and `_`.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn transliterate_cyrillic(c: char) -> Option<&'static str> {
    let latin = match c {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'е' => "e",
        'ё' => "yo",
        'ж' => "zh",
        'з' => "z",
        'и' => "i",
        'й' => "j",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "h",
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "sch",
        'ъ' | 'ь' => "",
        'ы' => "y",
        'э' => "e",
        'ю' => "yu",
        'я' => "ya",
        _ => return None,
    };
    Some(latin)
}

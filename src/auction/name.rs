use super::BidderName;

/// Canonical form of a bidder name
///
/// Surrounding whitespace is dropped, inner runs of whitespace become a
/// single space and the first letter of every word is capitalized:
/// `" harry   haCkeR "` becomes `"Harry Hacker"`.
pub fn normalize(name: &str) -> BidderName {
    name.split_whitespace()
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut chars = word.chars();

    // leading punctuation and digits are kept, the first letter is capitalized
    for c in chars.by_ref() {
        if !c.is_alphabetic() {
            out.push(c);
            continue;
        }
        // uppercasing may expand (`ß` -> `SS`), only the first char stays upper
        let mut upper = c.to_uppercase();
        out.extend(upper.next());
        out.extend(upper.flat_map(char::to_lowercase));
        break;
    }
    out.extend(chars.flat_map(char::to_lowercase));

    out
}

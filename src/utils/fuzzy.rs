// Fuzzy matching utilities for time code suggestions

/// Calculate Levenshtein distance between two strings
/// Returns the minimum number of single-character edits (insertions, deletions, substitutions)
/// needed to transform one string into another
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    if s1_chars.is_empty() {
        return s2_chars.len();
    }
    if s2_chars.is_empty() {
        return s1_chars.len();
    }

    // Single rolling row instead of the full matrix
    let mut prev: Vec<usize> = (0..=s2_chars.len()).collect();
    let mut curr = vec![0; s2_chars.len() + 1];

    for (i, c1) in s1_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, c2) in s2_chars.iter().enumerate() {
            let cost = if c1 == c2 { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1) // deletion
                .min(curr[j] + 1) // insertion
                .min(prev[j] + cost); // substitution
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[s2_chars.len()]
}

/// Find registered codes close to a mistyped one
/// Returns up to 5 codes sorted by distance (closest first), compared case-insensitively
pub fn find_near_code_matches<'a, I>(search: &str, codes: I, max_distance: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let search_lower = search.to_lowercase();
    let mut matches: Vec<(&str, usize)> = Vec::new();

    for code in codes {
        let code_lower = code.to_lowercase();
        let distance = levenshtein_distance(&search_lower, &code_lower);

        if distance <= max_distance {
            matches.push((code, distance));
        } else if search_lower.len() < code_lower.len() && code_lower.contains(&search_lower) {
            // Prefix matches rank ahead of other substring matches
            let extra = code_lower.len() - search_lower.len();
            let substring_distance = if code_lower.starts_with(&search_lower) {
                extra
            } else {
                extra + 1
            };
            if substring_distance <= max_distance + 2 {
                matches.push((code, substring_distance.min(max_distance)));
            }
        }
    }

    matches.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));
    matches.into_iter().take(5).map(|(code, _)| code.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("abc", ""), 3);
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("same", "same"), 0);
        assert_eq!(levenshtein_distance("PTO", "PT0"), 1);
    }

    #[test]
    fn test_find_near_code_matches() {
        let codes = ["PTO", "PROJECT_X", "PROJECT_Y", "ADMIN"];

        let matches = find_near_code_matches("pto", codes.iter().copied(), 2);
        assert_eq!(matches[0], "PTO");

        let matches = find_near_code_matches("PROJECT_Z", codes.iter().copied(), 2);
        assert_eq!(matches, vec!["PROJECT_X", "PROJECT_Y"]);

        // Prefix of a longer code
        let matches = find_near_code_matches("ADM", codes.iter().copied(), 1);
        assert_eq!(matches, vec!["ADMIN"]);

        let matches = find_near_code_matches("COMPLETELY_DIFFERENT", codes.iter().copied(), 2);
        assert!(matches.is_empty());
    }
}

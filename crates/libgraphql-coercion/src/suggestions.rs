//! "Did you mean ...?" suggestions for misspelled field names and enum values.

const MAX_SUGGESTIONS: usize = 5;

/// Given an invalid `input` string and a pool of valid `options`, return the
/// options that are similar enough to `input` to be worth suggesting, most
/// similar first. Options at the same distance are ordered lexically.
///
/// Similarity is the case-insensitive optimal-string-alignment distance
/// (Levenshtein plus adjacent transpositions). An option only qualifies when
/// its distance is at most `floor(input.len() * 0.4) + 1`. An option that
/// differs from `input` only by case always qualifies.
pub fn suggestion_list<S: AsRef<str>>(
    input: &str,
    options: impl IntoIterator<Item = S>,
) -> Vec<String> {
    let lexical_distance = LexicalDistance::new(input);
    let threshold = (input.chars().count() as f64 * 0.4).floor() as usize + 1;

    let mut options_by_distance: Vec<(usize, String)> =
        options.into_iter()
            .filter_map(|option| {
                let option = option.as_ref();
                lexical_distance.measure(option, threshold)
                    .map(|distance| (distance, option.to_string()))
            })
            .collect();

    options_by_distance.sort_by(|(a_dist, a), (b_dist, b)| {
        a_dist.cmp(b_dist).then_with(|| a.cmp(b))
    });
    options_by_distance.dedup_by(|(_, a), (_, b)| a == b);
    options_by_distance.into_iter()
        .map(|(_, option)| option)
        .collect()
}

/// Render a " Did you mean ...?" suffix for an error message, or an empty
/// string when there are no `suggestions`. At most 5 suggestions are listed.
///
/// `sub_message` is inserted before the quoted suggestions, e.g.
/// `Some("the enum value")` yields ` Did you mean the enum value "RED"?`.
pub fn did_you_mean(sub_message: Option<&str>, suggestions: &[String]) -> String {
    let quoted: Vec<String> =
        suggestions.iter()
            .take(MAX_SUGGESTIONS)
            .map(|suggestion| format!("\"{suggestion}\""))
            .collect();

    let mut message = String::from(" Did you mean ");
    if let Some(sub_message) = sub_message {
        message.push_str(sub_message);
        message.push(' ');
    }

    match quoted.as_slice() {
        [] => return String::new(),
        [only] => message.push_str(only),
        [first, second] => {
            message.push_str(first);
            message.push_str(" or ");
            message.push_str(second);
        },
        [init @ .., last] => {
            message.push_str(&init.join(", "));
            message.push_str(", or ");
            message.push_str(last);
        },
    }
    message.push('?');
    message
}

struct LexicalDistance<'a> {
    input: &'a str,
    input_chars: Vec<char>,
    input_lowercase: String,
}
impl<'a> LexicalDistance<'a> {
    fn new(input: &'a str) -> Self {
        let input_lowercase = input.to_lowercase();
        Self {
            input,
            input_chars: input_lowercase.chars().collect(),
            input_lowercase,
        }
    }

    /// The distance between the input and `option`, or `None` if it exceeds
    /// `threshold`.
    fn measure(&self, option: &str, threshold: usize) -> Option<usize> {
        if self.input == option {
            return Some(0);
        }

        let option_lowercase = option.to_lowercase();
        if self.input_lowercase == option_lowercase {
            return Some(1);
        }

        let option_chars: Vec<char> = option_lowercase.chars().collect();
        let (a, b) =
            if option_chars.len() < self.input_chars.len() {
                (self.input_chars.as_slice(), option_chars.as_slice())
            } else {
                (option_chars.as_slice(), self.input_chars.as_slice())
            };

        if a.len() - b.len() > threshold {
            return None;
        }

        // Only the previous two rows are ever consulted.
        let mut rows = [
            (0..=b.len()).collect::<Vec<usize>>(),
            vec![0; b.len() + 1],
            vec![0; b.len() + 1],
        ];

        for i in 1..=a.len() {
            let mut smallest_cell = i;
            rows[i % 3][0] = i;
            for j in 1..=b.len() {
                let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
                let mut current_cell =
                    (rows[(i - 1) % 3][j] + 1)
                        .min(rows[i % 3][j - 1] + 1)
                        .min(rows[(i - 1) % 3][j - 1] + cost);

                if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                    current_cell = current_cell.min(rows[(i - 2) % 3][j - 2] + 1);
                }

                smallest_cell = smallest_cell.min(current_cell);
                rows[i % 3][j] = current_cell;
            }

            if smallest_cell > threshold {
                return None;
            }
        }

        let distance = rows[a.len() % 3][b.len()];
        if distance <= threshold {
            Some(distance)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_empty_for_empty_options() {
        assert!(suggestion_list("input", Vec::<String>::new()).is_empty());
    }

    #[test]
    fn returns_exact_match_first() {
        assert_eq!(
            suggestion_list("name", ["naem", "name", "names"]),
            vec!["name", "naem", "names"],
        );
    }

    #[test]
    fn treats_transposition_as_a_single_edit() {
        assert_eq!(suggestion_list("naem", ["name", "id"]), vec!["name"]);
    }

    #[test]
    fn case_only_differences_are_close() {
        assert_eq!(suggestion_list("RED", ["red", "BLUE"]), vec!["red"]);
    }

    #[test]
    fn rejects_options_beyond_threshold() {
        assert!(suggestion_list("color", ["id", "tag"]).is_empty());
    }

    #[test]
    fn orders_ties_lexically() {
        assert_eq!(suggestion_list("ab", ["ac", "aa", "ad"]), vec!["aa", "ac", "ad"]);
    }

    #[test]
    fn did_you_mean_formats_by_count() {
        let s = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        assert_eq!(did_you_mean(None, &[]), "");
        assert_eq!(did_you_mean(None, &s(&["A"])), " Did you mean \"A\"?");
        assert_eq!(did_you_mean(None, &s(&["A", "B"])), " Did you mean \"A\" or \"B\"?");
        assert_eq!(
            did_you_mean(Some("the enum value"), &s(&["A", "B", "C"])),
            " Did you mean the enum value \"A\", \"B\", or \"C\"?",
        );
        assert_eq!(
            did_you_mean(None, &s(&["A", "B", "C", "D", "E", "F"])),
            " Did you mean \"A\", \"B\", \"C\", \"D\", or \"E\"?",
        );
    }
}

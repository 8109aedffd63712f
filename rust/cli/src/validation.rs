//! Input parsing and validation for the interactive `play` loop and the
//! `prob` command.
//!
//! Interactive input is parsed into a [`ParseResult`] so the caller can tell a
//! move, a quit request and a bad line apart without any error plumbing.

use liardice_engine::dice::Face;

/// A move typed at the `play` prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayInput {
    /// Ask the computer to open the round
    FirstBid,
    /// The human's bid, which the computer answers
    Bid { quantity: u32, face: Face },
    /// Show the computer's dice and settle the round
    Reveal,
    Help,
}

/// Outcome of parsing one line of interactive input.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    Action(PlayInput),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse a line typed at the `play` prompt (case-insensitive).
///
/// - "first" or "f" → computer opens
/// - "bid Q F", "b Q F" or just "Q F" → bid of Q dice showing F
/// - "reveal" or "r" → reveal and settle the round
/// - "help" or "h" or "?" → help
/// - "q" or "quit" → quit
///
/// # Example
///
/// ```rust
/// # use liardice_cli::validation::{parse_play_input, ParseResult, PlayInput};
/// use liardice_engine::dice::Face;
///
/// assert_eq!(
///     parse_play_input("bid 3 5"),
///     ParseResult::Action(PlayInput::Bid { quantity: 3, face: Face::Five })
/// );
/// assert_eq!(
///     parse_play_input("4 1"),
///     ParseResult::Action(PlayInput::Bid { quantity: 4, face: Face::One })
/// );
/// assert_eq!(parse_play_input("q"), ParseResult::Quit);
///
/// match parse_play_input("bid 0 3") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("positive")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_play_input(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }

    match parts[0] {
        "q" | "quit" => ParseResult::Quit,
        "first" | "f" => ParseResult::Action(PlayInput::FirstBid),
        "reveal" | "r" => ParseResult::Action(PlayInput::Reveal),
        "help" | "h" | "?" => ParseResult::Action(PlayInput::Help),
        "bid" | "b" => {
            if parts.len() != 3 {
                return ParseResult::Invalid(
                    "Bid requires a quantity and a face (e.g., 'bid 3 5')".to_string(),
                );
            }
            parse_bid(parts[1], parts[2])
        }
        first if first.starts_with(|c: char| c.is_ascii_digit() || c == '-') => {
            if parts.len() != 2 {
                return ParseResult::Invalid(
                    "A bid is a quantity and a face (e.g., '3 5')".to_string(),
                );
            }
            parse_bid(parts[0], parts[1])
        }
        other => ParseResult::Invalid(format!(
            "Unrecognized input '{}'. Valid input: first, bid <quantity> <face>, reveal, help, q",
            other
        )),
    }
}

fn parse_bid(quantity: &str, face: &str) -> ParseResult {
    let quantity = match parse_quantity(quantity) {
        Ok(q) => q,
        Err(msg) => return ParseResult::Invalid(msg),
    };
    match parse_face(face) {
        Ok(face) => ParseResult::Action(PlayInput::Bid { quantity, face }),
        Err(msg) => ParseResult::Invalid(msg),
    }
}

/// Parse a bid quantity; it must be a positive whole number.
pub fn parse_quantity(s: &str) -> Result<u32, String> {
    match s.trim().parse::<i64>() {
        Ok(q) if q <= 0 => Err("Bid quantity must be positive".to_string()),
        Ok(q) => u32::try_from(q).map_err(|_| format!("Bid quantity {} is too large", q)),
        Err(_) => Err(format!("Invalid bid quantity '{}'", s)),
    }
}

/// Parse a face value from 1 to 6.
///
/// ```rust
/// # use liardice_cli::validation::parse_face;
/// use liardice_engine::dice::Face;
///
/// assert_eq!(parse_face("6"), Ok(Face::Six));
/// assert!(parse_face("7").is_err());
/// ```
pub fn parse_face(s: &str) -> Result<Face, String> {
    s.trim()
        .parse::<u8>()
        .ok()
        .and_then(Face::from_u8)
        .ok_or_else(|| format!("Invalid face '{}': expected 1-6", s.trim()))
}

/// Convert raw face values into faces, rejecting anything outside 1-6.
pub fn faces_from_values(values: &[u8]) -> Result<Vec<Face>, String> {
    values
        .iter()
        .map(|&v| Face::from_u8(v).ok_or_else(|| format!("Invalid face '{}': expected 1-6", v)))
        .collect()
}

/// Answer to "did the computer lose a die?" after a reveal. `Some(true)` means
/// the computer gives up a die.
pub fn parse_reveal_answer(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "lose" | "l" | "y" | "yes" => Some(true),
        "keep" | "k" | "n" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_parse_case_insensitively() {
        assert_eq!(
            parse_play_input("FIRST"),
            ParseResult::Action(PlayInput::FirstBid)
        );
        assert_eq!(
            parse_play_input("  Reveal "),
            ParseResult::Action(PlayInput::Reveal)
        );
        assert_eq!(parse_play_input("?"), ParseResult::Action(PlayInput::Help));
        assert_eq!(parse_play_input("QUIT"), ParseResult::Quit);
    }

    #[test]
    fn bids_parse_with_and_without_keyword() {
        let expected = ParseResult::Action(PlayInput::Bid {
            quantity: 12,
            face: Face::Two,
        });
        assert_eq!(parse_play_input("bid 12 2"), expected);
        assert_eq!(parse_play_input("b 12 2"), expected);
        assert_eq!(parse_play_input("12 2"), expected);
    }

    #[test]
    fn malformed_bids_explain_the_problem() {
        let cases = [
            ("bid", "quantity and a face"),
            ("bid 3", "quantity and a face"),
            ("bid -1 4", "positive"),
            ("bid 0 4", "positive"),
            ("bid x 4", "Invalid bid quantity"),
            ("bid 3 9", "expected 1-6"),
            ("3", "quantity and a face"),
            ("dance", "Unrecognized"),
            ("", "Empty"),
        ];
        for (input, needle) in cases {
            match parse_play_input(input) {
                ParseResult::Invalid(msg) => {
                    assert!(msg.contains(needle), "{:?} -> {}", input, msg)
                }
                other => panic!("{:?} should be invalid, got {:?}", input, other),
            }
        }
    }

    #[test]
    fn quantity_bounds() {
        assert_eq!(parse_quantity("1"), Ok(1));
        assert!(parse_quantity("99999999999").is_err());
    }

    #[test]
    fn faces_from_values_rejects_out_of_range() {
        assert_eq!(
            faces_from_values(&[1, 6]),
            Ok(vec![Face::One, Face::Six])
        );
        assert!(faces_from_values(&[0]).is_err());
    }

    #[test]
    fn reveal_answers() {
        assert_eq!(parse_reveal_answer("lose"), Some(true));
        assert_eq!(parse_reveal_answer("Y"), Some(true));
        assert_eq!(parse_reveal_answer("keep"), Some(false));
        assert_eq!(parse_reveal_answer("no"), Some(false));
        assert_eq!(parse_reveal_answer("maybe"), None);
    }
}

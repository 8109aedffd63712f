//! Dice, bid and table formatters for terminal display.
//!
//! Faces are drawn with the Unicode die symbols (⚀ ⚁ ⚂ ⚃ ⚄ ⚅) where the
//! terminal is known to render them, and as plain digits otherwise.
//!
//! ## Example
//!
//! ```rust
//! use liardice_engine::bid::{Bid, Decision};
//! use liardice_engine::dice::Face;
//! use liardice_cli::formatters::{format_bid, format_decision};
//!
//! assert_eq!(format_bid(&Bid::new(3, Face::Five)), "3 x 5");
//! assert_eq!(format_decision(&Decision::CallLie), "calls liar");
//! ```

use liardice_engine::bid::{Bid, Decision};
use liardice_engine::dice::{all_faces, Face, FaceCounts};
use liardice_engine::table::BidTable;

/// Check if the terminal supports Unicode die symbols.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals
/// (TERM_PROGRAM) or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes
/// Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

fn die_symbol(face: Face) -> char {
    match face {
        Face::One => '⚀',
        Face::Two => '⚁',
        Face::Three => '⚂',
        Face::Four => '⚃',
        Face::Five => '⚄',
        Face::Six => '⚅',
    }
}

/// A single face, as a die symbol or its digit.
pub fn format_face(face: Face) -> String {
    if supports_unicode() {
        die_symbol(face).to_string()
    } else {
        face.to_string()
    }
}

/// Faces as digits in brackets, e.g. `[1 2 2 5 6]`.
pub fn format_dice(faces: &[Face]) -> String {
    let shown: Vec<String> = faces.iter().map(|f| f.to_string()).collect();
    format!("[{}]", shown.join(" "))
}

/// Faces as die symbols with the digits alongside, for the reveal.
pub fn format_dice_symbols(faces: &[Face]) -> String {
    let shown: Vec<String> = faces.iter().map(|&f| format_face(f)).collect();
    format!("{} {}", shown.join(" "), format_dice(faces))
}

/// Per-face tally, e.g. `1:1 2:2 3:0 4:0 5:1 6:1`.
pub fn format_face_counts(counts: &FaceCounts) -> String {
    all_faces()
        .iter()
        .map(|f| format!("{}:{}", f, counts[f.index()]))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn format_bid(bid: &Bid) -> String {
    format!("{} x {}", bid.quantity, bid.face)
}

pub fn format_decision(decision: &Decision) -> String {
    match decision {
        Decision::CallLie => "calls liar".to_string(),
        Decision::Raise(bid) => format!("bids {}", format_bid(bid)),
    }
}

pub fn format_probability(p: f64) -> String {
    format!("{:.4}", p)
}

/// One line per table entry: the lie entry first, then the raise on each face.
pub fn format_table(table: &BidTable) -> Vec<String> {
    let mut lines = vec![format!(
        "  liar       p={}",
        format_probability(table.lie().probability)
    )];
    for face in all_faces() {
        let entry = table.raise(face);
        lines.push(format!(
            "  {:>3} x {}    p={}",
            entry.quantity,
            face,
            format_probability(entry.probability)
        ));
    }
    lines
}

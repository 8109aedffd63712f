//! UI helper functions for terminal output formatting.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

pub fn write_play_help(out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(out, "  first            let the computer open the round")?;
    writeln!(out, "  bid Q F | Q F    bid Q dice showing face F (ones are wild)")?;
    writeln!(out, "  reveal           show the computer's dice and settle the round")?;
    writeln!(out, "  help             show this list")?;
    writeln!(out, "  q                quit")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes() {
        let mut err = Vec::new();
        write_error(&mut err, "bad").unwrap();
        display_warning(&mut err, "careful").unwrap();
        assert_eq!(String::from_utf8(err).unwrap(), "Error: bad\nWARNING: careful\n");
    }

    #[test]
    fn help_lists_every_move() {
        let mut out = Vec::new();
        write_play_help(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        for word in ["first", "bid", "reveal", "help", "quit"] {
            assert!(text.contains(word), "missing {}", word);
        }
    }
}

use std::io::Write;

use crossterm::queue;
use crossterm::style::{Color as TermColor, Print, ResetColor, SetBackgroundColor};
use placefix_core::{Color, MismatchSet, Suggestion};

const SWATCH: &str = "      ";

/// One progress line: how many cared-about pixels are already right.
pub fn write_progress(out: &mut impl Write, set: &MismatchSet) -> std::io::Result<()> {
    writeln!(
        out,
        "{}/{} pixels correct ({:.1}%)",
        set.satisfied(),
        set.cared(),
        set.completion() * 100.0
    )
}

/// Print the suggestion, or the all-good message when there is none.
pub fn write_suggestion(out: &mut impl Write, suggestion: &Suggestion, swatch: bool) -> std::io::Result<()> {
    match suggestion {
        Some(entry) => {
            writeln!(out, "To help out, target the following pixel:")?;
            writeln!(out, "{entry}")?;
            if swatch {
                write_swatch(out, entry.required)?;
            }
        }
        None => writeln!(out, "The image is looking good right now!")?,
    }
    Ok(())
}

/// Every mismatch, one per line.
pub fn write_all(out: &mut impl Write, set: &MismatchSet) -> std::io::Result<()> {
    for entry in set {
        writeln!(out, "{}\t{}\t{}", entry.pixel.x, entry.pixel.y, entry.required.to_hex())?;
    }
    Ok(())
}

/// Two rows of truecolor background showing the required color.
fn write_swatch(out: &mut impl Write, color: Color) -> std::io::Result<()> {
    let bg = TermColor::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    };
    for _ in 0..2 {
        queue!(out, SetBackgroundColor(bg), Print(SWATCH), ResetColor, Print("\n"))?;
    }
    out.flush()
}

use crate::cli::Show;
use crate::workflow::KeygenOutcome;
use std::io::{self, Write};

pub fn write_outcome<W: Write>(
    out: &mut W,
    outcome: &KeygenOutcome,
    show: Show,
) -> io::Result<()> {
    writeln!(out, "=== KEY PAIR '{}' ===", outcome.key_name)?;
    for artifact in outcome.keys.artifacts() {
        writeln!(out, "{}: {}", artifact.label(), artifact.path.display())?;
    }

    if show.sql() {
        writeln!(out, "\n=== SQL FOR USER {} (PUBLIC) ===", outcome.target_user)?;
        writeln!(out, "{}", outcome.grant_sql)?;
    }
    if show.secret() {
        writeln!(out, "\n=== SECRET JSON (PEM, PRIVATE) ===")?;
        writeln!(out, "{}", outcome.secret_json)?;
    }
    if show.pkcs8() {
        writeln!(out, "\n=== SECRET JSON (PKCS8, PRIVATE) ===")?;
        writeln!(out, "{}", outcome.pkcs8_json)?;
    }

    out.flush()
}

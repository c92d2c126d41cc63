use std::io::{self, Read, Write};

use anyhow::{Context, Result};

use extract_haskell_blocks::extract_haskell_blocks;

fn main() -> Result<()> {
    let mut content = String::new();
    io::stdin()
        .read_to_string(&mut content)
        .context("Error reading standard input")?;

    let extracted = extract_haskell_blocks(&content);

    io::stdout()
        .write_all(extracted.as_bytes())
        .context("Error writing to standard output")?;
    Ok(())
}

use std::fs;
use std::path::Path;

use anyhow::{Context, bail};
use minesweep_core::{Board, load_from_str};

/// Reads a `.swp` board file. The board is checked for structure only.
pub fn load_from_path(path: &Path) -> anyhow::Result<Board> {
    if path.extension().and_then(|ext| ext.to_str()) != Some("swp") {
        bail!("file must end in a .swp extension");
    }

    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read board file {}", path.display()))?;
    let board = load_from_str(&text)
        .with_context(|| format!("invalid board in {}", path.display()))?;
    log::info!(
        "Loaded {}x{} board from {}",
        board.dimension(),
        board.dimension(),
        path.display()
    );

    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_board(name: &str, text: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("minesweep-{}-{name}", std::process::id()));
        fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn loads_swp_file() {
        let path = temp_board("ok.swp", "_*\n__\n");

        let board = load_from_path(&path).unwrap();

        assert_eq!(board.dimension(), 2);
        assert_eq!(board.to_string(), "_ *\n_ _");
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn rejects_other_extensions() {
        let err = load_from_path(Path::new("board.txt")).unwrap_err();

        assert_eq!(err.to_string(), "file must end in a .swp extension");
    }

    #[test]
    fn reports_missing_files_with_the_path() {
        let path = std::env::temp_dir().join("minesweep-does-not-exist.swp");

        let err = load_from_path(&path).unwrap_err();

        assert!(err.to_string().contains("minesweep-does-not-exist.swp"));
    }

    #[test]
    fn keeps_build_errors_in_the_chain() {
        let path = temp_board("bad.swp", "_a\n__\n");

        let err = load_from_path(&path).unwrap_err();

        assert_eq!(err.root_cause().to_string(), "unrecognized cell: a");
        fs::remove_file(path).unwrap();
    }
}

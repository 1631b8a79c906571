use crate::*;

/// A built-in board, numbered for selection from the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SampleBoard {
    pub num: u32,
    pub text: &'static str,
}

pub const SAMPLE_BOARDS: &[SampleBoard] = &[
    SampleBoard {
        num: 1,
        text: "__*_\n__*_\n____\n____\n",
    },
    SampleBoard {
        num: 2,
        text: "*__\n___\n__*\n",
    },
    SampleBoard {
        num: 3,
        text: "_____\n_*___\n___*_\n_____\n*___*\n",
    },
];

impl SampleBoard {
    pub fn first() -> Self {
        SAMPLE_BOARDS[0]
    }

    pub fn find(num: u32) -> Option<Self> {
        SAMPLE_BOARDS.iter().copied().find(|sample| sample.num == num)
    }

    pub fn board(&self) -> Board {
        load_from_str(self.text).expect("sample boards are well-formed")
    }
}

/// Parses the board text format: one row per line, one character per cell.
///
/// Line endings may be `\n` or `\r\n` and empty lines at the end are ignored. Any other
/// character, whitespace included, is a cell, and a blank line in the middle is an empty row.
/// Only structure is checked, uncovered counts that disagree with the mines around them are
/// loaded as they are.
pub fn load_from_str(text: &str) -> Result<Board> {
    let board = text
        .trim_end_matches(['\r', '\n'])
        .lines()
        .fold(BoardBuilder::new(), |builder, line| builder.row_text(line))
        .build()?;
    Ok(board)
}

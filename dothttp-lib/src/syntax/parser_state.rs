use serde::Serialize;

/// Position of the line scanner within the request grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[repr(u8)]
pub enum ParserState {
    /// Between requests: separators, comments, variables, request lines.
    #[default]
    Start = 0,
    InHeaders = 1,
    InBody = 2,
}

impl ParserState {
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn from_ordinal(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Start),
            1 => Some(Self::InHeaders),
            2 => Some(Self::InBody),
            _ => None,
        }
    }
}

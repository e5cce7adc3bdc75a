use crate::model::DotHttpFile;

/// Cursor over the lines of one file while it is being parsed.
///
/// The context owns the file under construction and borrows the lines for the
/// duration of the parse. `line_index` may be set to anything; only
/// [`ParseContext::current_line`] checks bounds.
pub struct ParseContext<'a> {
    file: DotHttpFile,
    lines: &'a [&'a str],
    pub line_index: usize,
}

impl<'a> ParseContext<'a> {
    pub fn new(file: DotHttpFile, lines: &'a [&'a str]) -> Self {
        Self {
            file,
            lines,
            line_index: 0,
        }
    }

    /// 1-based line number of the cursor.
    pub fn line_number(&self) -> usize {
        self.line_index + 1
    }

    pub fn file(&self) -> &DotHttpFile {
        &self.file
    }

    pub fn file_mut(&mut self) -> &mut DotHttpFile {
        &mut self.file
    }

    pub fn lines(&self) -> &'a [&'a str] {
        self.lines
    }

    pub fn current_line(&self) -> Option<&'a str> {
        self.lines.get(self.line_index).copied()
    }

    pub fn is_end(&self) -> bool {
        self.line_index >= self.lines.len()
    }

    pub fn advance(&mut self) {
        self.line_index += 1;
    }

    pub fn into_file(self) -> DotHttpFile {
        self.file
    }
}

// src/models/document.rs

/// How one line of a document ended in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    CrLf,
    /// Last line of a file with no final newline.
    Missing,
}

impl LineEnding {
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
            Self::Missing => "",
        }
    }
}

/// Raw lines of one markdown file, each paired with its own line ending so
/// untouched lines are written back byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
    endings: Vec<LineEnding>,
}

impl Document {
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut lines = Vec::new();
        let mut endings = Vec::new();
        for chunk in content.split_inclusive('\n') {
            let (text, ending) = if let Some(text) = chunk.strip_suffix("\r\n") {
                (text, LineEnding::CrLf)
            } else if let Some(text) = chunk.strip_suffix('\n') {
                (text, LineEnding::Lf)
            } else {
                (chunk, LineEnding::Missing)
            };
            lines.push(text.to_owned());
            endings.push(ending);
        }
        Self { lines, endings }
    }

    #[inline]
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[inline]
    #[must_use]
    pub fn endings(&self) -> &[LineEnding] {
        &self.endings
    }

    /// Replaces the lines in `start..end` with `inserted`.
    ///
    /// Lines outside the range keep their endings. Inserted lines take the
    /// ending of the line at `start`, falling back to the line before it and
    /// then to `\n`. When the range is not empty the last inserted line takes
    /// over the ending of the last replaced line, so a missing final newline
    /// stays missing. Returns `None` if the range lies outside the document.
    #[must_use]
    pub fn splice(&self, start: usize, end: usize, inserted: &[String]) -> Option<Self> {
        if start > end || end > self.lines.len() {
            return None;
        }

        let newline = |index: Option<usize>| {
            index
                .and_then(|i| self.endings.get(i).copied())
                .filter(|e| *e != LineEnding::Missing)
        };
        let fill = newline(Some(start))
            .or_else(|| newline(start.checked_sub(1)))
            .unwrap_or(LineEnding::Lf);

        let mut new_endings = vec![fill; inserted.len()];
        if start < end {
            let replaced = end.checked_sub(1).and_then(|i| self.endings.get(i));
            if let (Some(last), Some(replaced)) = (new_endings.last_mut(), replaced) {
                *last = *replaced;
            }
        }

        let mut lines = Vec::with_capacity(self.lines.len().saturating_add(inserted.len()));
        lines.extend_from_slice(self.lines.get(..start)?);
        lines.extend(inserted.iter().cloned());
        lines.extend_from_slice(self.lines.get(end..)?);

        let mut endings = Vec::with_capacity(lines.len());
        endings.extend_from_slice(self.endings.get(..start)?);
        endings.extend(new_endings);
        endings.extend_from_slice(self.endings.get(end..)?);

        // Only the final line may lack a newline.
        let last = endings.len().saturating_sub(1);
        for ending in endings.iter_mut().take(last) {
            if *ending == LineEnding::Missing {
                *ending = fill;
            }
        }

        Some(Self { lines, endings })
    }

    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (line, ending) in self.lines.iter().zip(&self.endings) {
            out.push_str(line);
            out.push_str(ending.as_str());
        }
        out
    }
}

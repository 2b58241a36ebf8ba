//! Indentation helpers for assembling generated source text.

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation (generated C++ glue).
    pub const CPP: Self = Self::Spaces(4);

    /// Tab indentation (generated Luau definitions).
    pub const LUAU: Self = Self::Tab;

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(2) => "  ",
            Self::Spaces(4) => "    ",
            Self::Spaces(8) => "        ",
            // Fallback to 4 whitespaces
            Self::Spaces(_) => "    ",
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::CPP
    }
}

/// Indent a block of text by `level` indent units.
///
/// Every non-empty line gets the prefix; empty lines stay empty so the
/// output never carries trailing whitespace.
pub fn indent_block(level: usize, text: &str, indent: Indent) -> String {
    let prefix = indent.as_str().repeat(level);

    text.split('\n')
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{}{}", prefix, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Accumulates indented blocks and joins them into one source text.
#[derive(Debug, Clone, Default)]
pub struct SourceBuffer {
    indent: Indent,
    blocks: Vec<String>,
}

impl SourceBuffer {
    /// Create an empty buffer using the given indentation unit.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent,
            blocks: Vec::new(),
        }
    }

    /// Append a block (possibly spanning several lines) at `level`.
    pub fn append(&mut self, level: usize, text: &str) -> &mut Self {
        self.blocks.push(indent_block(level, text, self.indent));
        self
    }

    /// Append an empty line.
    pub fn blank(&mut self) -> &mut Self {
        self.blocks.push(String::new());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Join all blocks with newlines.
    pub fn finish(&self) -> String {
        self.blocks.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_as_str() {
        assert_eq!(Indent::Spaces(2).as_str(), "  ");
        assert_eq!(Indent::Spaces(4).as_str(), "    ");
        assert_eq!(Indent::Spaces(3).as_str(), "    ");
        assert_eq!(Indent::Tab.as_str(), "\t");
    }

    #[test]
    fn test_default() {
        assert_eq!(Indent::default(), Indent::Spaces(4));
    }

    #[test]
    fn test_indent_block_single_line() {
        assert_eq!(indent_block(2, "return 1", Indent::CPP), "        return 1");
        assert_eq!(indent_block(0, "return 1", Indent::CPP), "return 1");
    }

    #[test]
    fn test_indent_block_keeps_empty_lines_bare() {
        let out = indent_block(1, "local a = 1\n\nlocal b = 2", Indent::LUAU);
        assert_eq!(out, "\tlocal a = 1\n\n\tlocal b = 2");
    }

    #[test]
    fn test_source_buffer() {
        let mut buf = SourceBuffer::new(Indent::Spaces(2));
        assert!(buf.is_empty());

        buf.append(0, "if x then")
            .append(1, "a()\nb()")
            .append(0, "end")
            .blank();

        assert_eq!(buf.finish(), "if x then\n  a()\n  b()\nend\n");
    }
}

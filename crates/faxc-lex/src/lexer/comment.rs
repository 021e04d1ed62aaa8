//! Comment skipping.
//!
//! C block comments do not nest: `/* a /* b */ c */` ends at the first `*/`,
//! leaving `c */` as trailing source. This matches the reference lexer's
//! `text.find("*/", ...)` scan rather than the depth-counting scheme a
//! nesting-comment language would use.

use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips a block comment starting at the current `/*`. Reports an
    /// error and returns `true` if no closing `*/` is found before EOF,
    /// so the caller can yield an error token instead of quietly
    /// continuing as if the comment had closed.
    pub fn skip_block_comment(&mut self) -> bool {
        self.cursor.advance();
        self.cursor.advance();

        loop {
            if self.cursor.is_at_end() {
                self.report_error("unterminated block comment".to_string());
                return true;
            }
            if self.cursor.current_char() == '*' && self.cursor.peek_char(1) == '/' {
                self.cursor.advance();
                self.cursor.advance();
                return false;
            }
            self.cursor.advance();
        }
    }

    /// Skips whitespace and comments, stripping a leading BOM once.
    /// Returns `true` if an unterminated block comment was hit; the
    /// caller must then yield an error token for the comment's span
    /// rather than treating the run as ordinary skipped trivia.
    pub fn skip_whitespace_and_comments(&mut self) -> bool {
        if !self.bom_checked {
            self.bom_checked = true;
            if self.cursor.remaining().starts_with('\u{FEFF}') {
                self.cursor.advance();
            }
        }

        loop {
            if self.cursor.is_at_end() {
                return false;
            }

            match self.cursor.current_char() {
                ' ' | '\t' | '\r' | '\n' | '\u{0c}' | '\u{0b}' => {
                    self.cursor.advance();
                }
                '/' => {
                    let next = self.cursor.peek_char(1);
                    if next == '/' {
                        self.skip_line_comment();
                    } else if next == '*' {
                        if self.skip_block_comment() {
                            return true;
                        }
                    } else {
                        return false;
                    }
                }
                _ => return false,
            }
        }
    }

    fn skip_line_comment(&mut self) {
        self.cursor.advance();
        self.cursor.advance();
        while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
            self.cursor.advance();
        }
    }
}

//! Single-pass scanner that drives the whole compilation.
//!
//! The template is consumed byte-by-byte with one byte of lookahead.
//! Literal bytes are escaped into the pending buffer; `<%` hands control to
//! the directive reader. One instance is built per template and consumed by
//! `scan`, which returns the accumulated [`Unit`] for the emitter.
//
//  Newline rules (these decide where generated statements end):
//
//    * a newline in literal text is escaped into the buffer like any other
//      byte, but additionally flushes + closes the open statement when the
//      line contained a directive (inline flag false);
//    * newlines directly after `%>` are swallowed, so a directive sitting on
//      its own line leaves no trace in the rendered output.

use std::iter::Peekable;
use std::str::Bytes;

use super::chain::{ACCUMULATOR, OutputChain};
use super::directive::{Directive, DirectiveKind, classify};
use super::{Unit, preprocessor};

pub struct Scanner<'a> {
    bytes: Peekable<Bytes<'a>>,
    line: u32,
    /// True while the current source line has held only literal text.
    inline: bool,
    chain: OutputChain,
    unit: Unit,
}

impl<'a> Scanner<'a> {
    pub fn new(class_name: &str, src: &'a str) -> Self {
        Self {
            bytes: src.bytes().peekable(),
            line: 1,
            inline: true,
            chain: OutputChain::new(),
            unit: Unit::new(class_name),
        }
    }

    fn next_byte(&mut self) -> Option<u8> {
        self.bytes.next()
    }

    fn peek_byte(&mut self) -> Option<u8> {
        self.bytes.peek().copied()
    }

    /// Run the pass to end of input and hand back the accumulated state.
    pub fn scan(mut self) -> Result<Unit, String> {
        while let Some(b) = self.next_byte() {
            if b == b'<' && self.peek_byte() == Some(b'%') {
                self.next_byte();
                let directive = self.read_directive()?;
                self.dispatch(directive)?;
                continue;
            }

            if b == b'\n' {
                self.line += 1;
                self.chain.push(b'\n');
                // a pure-literal line keeps accumulating; a line that saw a
                // directive ends its statement here
                if !self.inline {
                    self.chain.flush(&mut self.unit.body);
                    self.chain.close(&mut self.unit.body);
                }
                self.inline = true;
            } else {
                self.chain.push(b);
            }
        }

        // final cleanup
        self.chain.flush(&mut self.unit.body);
        self.chain.close(&mut self.unit.body);
        Ok(self.unit)
    }

    /// Called with `<%` already consumed; reads up to and past `%>`.
    fn read_directive(&mut self) -> Result<Directive, String> {
        let open_line = self.line;
        let mut raw = Vec::new();
        loop {
            match self.next_byte() {
                None => {
                    return Err(format!(
                        "line {open_line}: directive not closed before end of template"
                    ));
                }
                Some(b'%') if self.peek_byte() == Some(b'>') => {
                    self.next_byte();
                    break;
                }
                Some(b) => {
                    if b == b'\n' {
                        self.line += 1;
                    }
                    raw.push(b);
                }
            }
        }

        // a directive on its own line must not also output that line break
        while self.peek_byte() == Some(b'\n') {
            self.next_byte();
            self.line += 1;
        }

        self.inline = false;
        Ok(classify(&String::from_utf8_lossy(&raw)))
    }

    fn dispatch(&mut self, directive: Directive) -> Result<(), String> {
        match directive.kind {
            DirectiveKind::Escaped => self.append_expr(&format!("escape({})", directive.content)),
            DirectiveKind::Raw => self.append_expr(&directive.content),
            DirectiveKind::Preprocessor => {
                preprocessor::interpret(&directive.content, &mut self.unit)
                    .map_err(|e| format!("line {}: {e}", self.line))?;
            }
            DirectiveKind::Statement => {
                self.chain.flush(&mut self.unit.body);
                self.chain.close(&mut self.unit.body);
                self.unit.body.push_str(&directive.content);
                self.unit.body.push('\n');
            }
        }
        Ok(())
    }

    /// Expression directives either continue the open chain or stand alone
    /// as an immediately terminated statement.
    fn append_expr(&mut self, expr: &str) {
        if self.chain.flush(&mut self.unit.body) {
            self.unit.body.push_str(&format!(" << {expr}"));
        } else {
            self.unit.body.push_str(&format!("{ACCUMULATOR} << {expr};\n"));
        }
    }
}

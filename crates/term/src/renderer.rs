//! TextRenderer: writes a framebuffer as lines of text.
//!
//! Output is line-oriented (no raw mode, no alternate screen), so the map
//! scrolls with the command prompt. Styling is optional and only adds
//! crossterm colour/attribute sequences; the characters are identical.

use std::io::Write;

use anyhow::Result;

use crossterm::{
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    tty::IsTty,
    QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// When to emit colour sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Colour only when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }

    /// Decide whether to style output written to stdout.
    pub fn styled(self) -> bool {
        match self {
            ColorMode::Auto => std::io::stdout().is_tty(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

pub struct TextRenderer {
    styled: bool,
    buf: Vec<u8>,
}

impl TextRenderer {
    pub fn new(styled: bool) -> Self {
        Self {
            styled,
            buf: Vec::with_capacity(4 * 1024),
        }
    }

    pub fn styled(&self) -> bool {
        self.styled
    }

    /// Write every row of `fb` to `out`, one line per row.
    pub fn draw<W: Write>(&mut self, fb: &FrameBuffer, out: &mut W) -> Result<()> {
        self.buf.clear();
        if self.styled {
            encode_styled_into(fb, &mut self.buf)?;
        } else {
            encode_plain_into(fb, &mut self.buf);
        }
        out.write_all(&self.buf)?;
        Ok(())
    }
}

/// Encode the framebuffer as plain text lines into `out`.
pub fn encode_plain_into(fb: &FrameBuffer, out: &mut Vec<u8>) {
    let mut utf8 = [0u8; 4];
    for y in 0..fb.height() {
        for cell in fb.row(y) {
            out.extend_from_slice(cell.ch.encode_utf8(&mut utf8).as_bytes());
        }
        out.push(b'\n');
    }
}

/// Encode the framebuffer as styled lines into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
/// Styles are reset at the end of every line.
pub fn encode_styled_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    for y in 0..fb.height() {
        let mut current_style: Option<CellStyle> = None;
        for cell in fb.row(y) {
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
        out.queue(Print('\n'))?;
    }
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::Cell;

    fn sample() -> FrameBuffer {
        let mut fb = FrameBuffer::new(3, 2);
        let style = CellStyle::default();
        fb.set(0, 0, Cell { ch: 'o', style });
        fb.set(1, 0, Cell { ch: '?', style });
        fb.set(2, 1, Cell { ch: '*', style: style.bold() });
        fb
    }

    #[test]
    fn plain_output_keeps_trailing_blanks() {
        let mut out = Vec::new();
        encode_plain_into(&sample(), &mut out);
        assert_eq!(String::from_utf8(out).unwrap(), "o? \n  *\n");
    }

    #[test]
    fn styled_output_contains_same_glyphs() {
        let mut out = Vec::new();
        encode_styled_into(&sample(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains('\u{1b}'));
        assert_eq!(text.matches('\n').count(), 2);
        assert!(text.contains('o') && text.contains('?') && text.contains('*'));
    }

    #[test]
    fn renderer_honours_style_flag() {
        let mut plain = TextRenderer::new(false);
        let mut out = Vec::new();
        plain.draw(&sample(), &mut out).unwrap();
        assert!(!out.contains(&0x1b));
        assert!(!plain.styled());
    }

    #[test]
    fn color_mode_parsing() {
        assert_eq!(ColorMode::from_str("Always"), Some(ColorMode::Always));
        assert_eq!(ColorMode::from_str("never"), Some(ColorMode::Never));
        assert_eq!(ColorMode::from_str("auto"), Some(ColorMode::Auto));
        assert_eq!(ColorMode::from_str("sometimes"), None);
        assert!(ColorMode::Always.styled());
        assert!(!ColorMode::Never.styled());
    }
}

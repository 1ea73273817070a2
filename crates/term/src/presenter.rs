//! Presenter: everything the session prints, in one place.

use std::io::Write;

use anyhow::Result;

use crate::core::GameSnapshot;
use crate::fb::FrameBuffer;
use crate::game_view::GameView;
use crate::observe::write_observation;
use crate::renderer::TextRenderer;

/// How each turn is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Energy on one line, then the revealed map.
    #[default]
    Text,
    /// One JSON observation per line.
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

pub struct Presenter<W: Write> {
    out: W,
    format: OutputFormat,
    view: GameView,
    renderer: TextRenderer,
    fb: FrameBuffer,
}

impl<W: Write> Presenter<W> {
    pub fn new(out: W, format: OutputFormat, styled: bool) -> Self {
        Self {
            out,
            format,
            view: GameView::default(),
            renderer: TextRenderer::new(styled),
            fb: FrameBuffer::new(0, 0),
        }
    }

    /// Print the state after a turn (or at the start of the session).
    pub fn turn(&mut self, snap: &GameSnapshot) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                writeln!(self.out, "{}", snap.energy)?;
                self.view.render_into(snap, &mut self.fb)?;
                self.renderer.draw(&self.fb, &mut self.out)?;
            }
            OutputFormat::Json => write_observation(snap, &mut self.out)?,
        }
        self.out.flush()?;
        Ok(())
    }

    /// Print a one-line message (win/lose, invalid input).
    pub fn message(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

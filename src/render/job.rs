use std::path::{Path, PathBuf};

use tracing::info;

use super::{RasterCanvas, RenderBoard, RenderOptions, RenderSummary};
use crate::error::Result;
use crate::topology::{NodeIdTable, Topology};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Board {
    Base,
    Mini,
}

/// Renders one built-in board, with its node labels, to a PNG file.
#[derive(Debug, Clone)]
pub struct BoardJob {
    board: Board,
    output: PathBuf,
    options: RenderOptions,
}

impl BoardJob {
    /// The standard board, written to `base_board.png`.
    #[must_use]
    pub fn base() -> Self {
        Self {
            board: Board::Base,
            output: PathBuf::from("base_board.png"),
            options: RenderOptions::default()
                .with_hex_size(0.5)
                .with_title("Base Map - Hexagonal Structure with Node IDs"),
        }
    }

    /// The mini board, written to `mini_board.png`.
    #[must_use]
    pub fn mini() -> Self {
        Self {
            board: Board::Mini,
            output: PathBuf::from("mini_board.png"),
            options: RenderOptions::default()
                .with_hex_size(0.6)
                .with_title("Mini Map - Hexagonal Structure with Node IDs"),
        }
    }

    /// Every built-in board.
    #[must_use]
    pub fn all() -> Vec<Self> {
        vec![Self::base(), Self::mini()]
    }

    /// Writes to `output` instead of the default path.
    #[must_use]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    #[must_use]
    pub fn output(&self) -> &Path {
        &self.output
    }

    #[must_use]
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Loads the board tables, renders them and writes the image.
    ///
    /// # Errors
    ///
    /// Returns an error if the tables fail to load, rendering fails, or the
    /// image cannot be written.
    pub fn run(&self) -> Result<RenderSummary> {
        let (topology, node_ids) = match self.board {
            Board::Base => (Topology::base()?, NodeIdTable::base()?),
            Board::Mini => (Topology::mini()?, NodeIdTable::mini()?),
        };
        let mut canvas = RasterCanvas::new(&self.output, self.options.pixels_per_unit)?;
        let summary = RenderBoard::new(&topology, &self.options)
            .with_node_ids(&node_ids)
            .execute(&mut canvas)?;
        info!(
            board = topology.name(),
            tiles = summary.counts.total(),
            nodes = summary.node_labels,
            ports = summary.ports,
            "board rendered"
        );
        Ok(summary)
    }
}

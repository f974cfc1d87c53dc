use std::collections::HashMap;

use tracing::{debug, info, warn};

use super::options::RenderOptions;
use super::style::{Color, LegendEntry, ShapeStyle, TextStyle};
use super::{Canvas, NodePositions};
use crate::error::{RenderError, Result, TopologyError};
use crate::geometry::{center_of, corners_of, node_position, NodeDirection};
use crate::math::{Bounds2, Point2, Vector2};
use crate::topology::{NodeId, NodeIdTable, TileCounts, TileKind, Topology};

const TILE_OUTLINE_WIDTH: f64 = 1.5;
const NODE_OUTLINE_WIDTH: f64 = 1.5;
const LABEL_SCALE: u32 = 2;
/// Dock labels sit this far below their node, in multiples of `hex_size`.
const DOCK_LABEL_OFFSET: f64 = 0.3;
/// Trade labels sit this far above the dock midpoint, in multiples of `hex_size`.
const TRADE_LABEL_OFFSET: f64 = 0.35;

/// What a rendering pass drew.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSummary {
    /// Tiles per kind in the rendered topology.
    pub counts: TileCounts,
    /// Hexagons handed to the canvas.
    pub hexagons: usize,
    /// Node labels handed to the canvas.
    pub node_labels: usize,
    /// Ports annotated with dock and trade labels.
    pub ports: usize,
    /// Visible world region, padding included.
    pub bounds: Bounds2,
}

/// Draws one topology onto a [`Canvas`].
///
/// Every tile becomes a hexagon colored by kind. When a node table is given,
/// each mapped corner contributes its position to that node, and every node
/// is labeled once at the mean of its positions. Corners absent from the
/// table are skipped. Ports whose two dock nodes are labeled get a `P{id}`
/// tag under each dock node and their trade rate between them.
pub struct RenderBoard<'a> {
    topology: &'a Topology,
    node_ids: Option<&'a NodeIdTable>,
    options: &'a RenderOptions,
}

impl<'a> RenderBoard<'a> {
    /// Creates a new `RenderBoard` operation without node labels.
    #[must_use]
    pub fn new(topology: &'a Topology, options: &'a RenderOptions) -> Self {
        Self {
            topology,
            node_ids: None,
            options,
        }
    }

    /// Labels nodes using `node_ids`.
    #[must_use]
    pub fn with_node_ids(mut self, node_ids: &'a NodeIdTable) -> Self {
        self.node_ids = Some(node_ids);
        self
    }

    /// Executes the rendering pass and finishes the canvas.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid, the topology is empty,
    /// or the canvas fails; the first canvas error aborts the pass.
    pub fn execute<C: Canvas + ?Sized>(&self, canvas: &mut C) -> Result<RenderSummary> {
        self.options.validate()?;
        if self.topology.is_empty() {
            return Err(TopologyError::Empty(self.topology.name().to_owned()).into());
        }

        let size = self.options.hex_size;
        let tiles: Vec<(TileKind, Point2, [Point2; 6])> = self
            .topology
            .tiles()
            .iter()
            .map(|&(coord, kind)| {
                let center = center_of(coord, size);
                (kind, center, corners_of(center, size))
            })
            .collect();

        let bounds = Bounds2::from_points(tiles.iter().flat_map(|(_, _, corners)| corners))
            .ok_or(RenderError::EmptyBounds)?
            .padded(self.options.padding());
        canvas.set_bounds(bounds)?;

        let label_style = TextStyle::new(Color::BLACK, LABEL_SCALE);
        let mut land_seq = 0_usize;
        let mut port_seq = 0_usize;
        let mut nodes = NodePositions::new();

        for (&(coord, _), (kind, center, corners)) in self.topology.tiles().iter().zip(&tiles) {
            let fill = self
                .options
                .palette
                .color_for(*kind)
                .with_alpha(self.options.tile_alpha);
            let style = ShapeStyle::filled(fill).stroked(Color::BLACK, TILE_OUTLINE_WIDTH);
            canvas.fill_polygon(corners, &style)?;

            let label = match kind {
                TileKind::Land => {
                    land_seq += 1;
                    Some((land_seq - 1).to_string())
                }
                TileKind::Port => {
                    port_seq += 1;
                    Some(format!("P{}", port_seq - 1))
                }
                TileKind::Water => None,
            };
            if let Some(label) = label.filter(|_| self.options.tile_labels) {
                canvas.text(*center, &label, &label_style)?;
            }

            if let Some(table) = self.node_ids {
                for dir in NodeDirection::ALL {
                    if let Some(id) = table.get(coord, dir) {
                        nodes.push(id, node_position(*center, size, dir));
                    }
                }
            }
        }
        debug!(
            topology = self.topology.name(),
            hexagons = tiles.len(),
            "tiles drawn"
        );

        if let Some(table) = self.node_ids {
            let stray = table
                .coordinates()
                .into_iter()
                .filter(|c| self.topology.kind_at(*c).is_none())
                .count();
            if stray > 0 {
                warn!(
                    topology = self.topology.name(),
                    stray,
                    "node table references tiles outside the topology"
                );
            }
        }

        let centroids = nodes.centroids();
        let marker = ShapeStyle::filled(Color::WHITE).stroked(Color::BLACK, NODE_OUTLINE_WIDTH);
        let radius = self.options.node_marker_radius();
        for (id, position) in &centroids {
            canvas.fill_circle(*position, radius, &marker)?;
            canvas.text(*position, &id.to_string(), &label_style)?;
        }
        debug!(
            topology = self.topology.name(),
            nodes = centroids.len(),
            "node labels drawn"
        );

        let ports = match self.node_ids {
            Some(table) => self.draw_ports(canvas, table, &centroids)?,
            None => 0,
        };

        if let Some(title) = &self.options.title {
            canvas.title(title)?;
        }
        let legend: Vec<LegendEntry> = TileKind::ALL
            .iter()
            .map(|&kind| LegendEntry {
                label: kind.label().to_owned(),
                color: self
                    .options
                    .palette
                    .color_for(kind)
                    .with_alpha(self.options.tile_alpha),
            })
            .collect();
        canvas.legend(&legend)?;

        let counts = self.topology.counts();
        canvas.annotation(&[
            format!("Total Tiles: {}", counts.total()),
            format!(
                "Land: {} | Water: {} | Ports: {}",
                counts.land, counts.water, counts.port
            ),
            format!("Nodes: {}", centroids.len()),
        ])?;
        canvas.finish()?;

        Ok(RenderSummary {
            counts,
            hexagons: tiles.len(),
            node_labels: centroids.len(),
            ports,
            bounds,
        })
    }

    /// Tags the dock nodes of every port and prints its trade rate.
    fn draw_ports<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        table: &NodeIdTable,
        centroids: &[(NodeId, Point2)],
    ) -> Result<usize> {
        let size = self.options.hex_size;
        let positions: HashMap<NodeId, Point2> = centroids.iter().copied().collect();
        let style = TextStyle::new(Color::BLACK, LABEL_SCALE);
        let below = Vector2::new(0.0, size * DOCK_LABEL_OFFSET);
        let above = Vector2::new(0.0, -size * TRADE_LABEL_OFFSET);

        let mut annotated = 0;
        for port in self.topology.ports() {
            let docks: Vec<(NodeId, Point2)> = port
                .dock_corners()
                .into_iter()
                .filter_map(|corner| table.get(port.coord, corner))
                .filter_map(|id| Some((id, *positions.get(&id)?)))
                .collect();
            let &[(a, pa), (b, pb)] = docks.as_slice() else {
                continue;
            };

            let tag = format!("P{}", port.id);
            canvas.text(pa + below, &tag, &style)?;
            canvas.text(pb + below, &tag, &style)?;
            let trade = port.trade_label();
            canvas.text(nalgebra::center(&pa, &pb) + above, &trade, &style)?;
            info!(port = port.id, trade = %trade, nodes = ?[a, b], "port annotated");
            annotated += 1;
        }
        Ok(annotated)
    }
}

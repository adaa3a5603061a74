//! Automatic tiling of every open window.
//!
//! The layout depends only on how many windows are open and on each window's
//! rank in open order. Application identity never influences placement, so the
//! same `(count, order)` input always yields the same geometries.

use crate::constants::{GUTTER, MASTER_PERCENT, SINGLE_WINDOW_INSET, TOP_OFFSET};
use crate::geometry::{Geometry, Viewport};

/// Shape of the layout chosen for a given window count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileArrangement {
    /// One window, inset on every side.
    Single,
    /// Two equal columns.
    Columns,
    /// A master window on the left with two stacked windows on the right.
    MasterStack,
    /// A near-square grid filled row by row.
    Grid { columns: usize, rows: usize },
}

impl TileArrangement {
    /// Pick the arrangement for `count` windows. `None` when nothing is open.
    pub fn for_count(count: usize) -> Option<Self> {
        match count {
            0 => None,
            1 => Some(Self::Single),
            2 => Some(Self::Columns),
            3 => Some(Self::MasterStack),
            n => {
                let columns = ceil_sqrt(n);
                Some(Self::Grid {
                    columns,
                    rows: n.div_ceil(columns),
                })
            }
        }
    }
}

fn ceil_sqrt(n: usize) -> usize {
    let mut root = 1;
    while root * root < n {
        root += 1;
    }
    root
}

/// Geometry of the window at 0-indexed `rank` when `count` windows are open.
///
/// The viewport is raised to the tiling floor first, and the result is never
/// smaller than the minimum window size.
pub fn tile_slot(rank: usize, count: usize, viewport: Viewport) -> Option<Geometry> {
    let arrangement = TileArrangement::for_count(count)?;
    if rank >= count {
        return None;
    }
    let viewport = viewport.clamped_for_tiling();
    let width = viewport.width;
    let usable_height = viewport.usable_height();
    // Height shared by the single, column and master-stack layouts.
    let band_height = usable_height - 2 * TOP_OFFSET;

    let geometry = match arrangement {
        TileArrangement::Single => Geometry::new(
            SINGLE_WINDOW_INSET,
            TOP_OFFSET,
            width - 2 * SINGLE_WINDOW_INSET,
            band_height,
        ),
        TileArrangement::Columns => {
            let column_width = (width - 3 * GUTTER) / 2;
            let x = GUTTER + rank as i32 * (column_width + GUTTER);
            Geometry::new(x, TOP_OFFSET, column_width, band_height)
        }
        TileArrangement::MasterStack => {
            let inner = width - 3 * GUTTER;
            let master_width = inner * MASTER_PERCENT / 100;
            let stack_width = inner - master_width;
            let stack_height = (band_height - GUTTER) / 2;
            let stack_x = GUTTER + master_width + GUTTER;
            match rank {
                0 => Geometry::new(GUTTER, TOP_OFFSET, master_width, band_height),
                1 => Geometry::new(stack_x, TOP_OFFSET, stack_width, stack_height),
                _ => Geometry::new(
                    stack_x,
                    TOP_OFFSET + stack_height + GUTTER,
                    stack_width,
                    stack_height,
                ),
            }
        }
        TileArrangement::Grid { columns, rows } => {
            let cols = columns as i32;
            let rows = rows as i32;
            let cell_width = (width - GUTTER * (cols + 1)) / cols;
            let cell_height = (usable_height - GUTTER * (rows + 1)) / rows;
            let column = (rank % columns) as i32;
            let row = (rank / columns) as i32;
            Geometry::new(
                GUTTER + column * (cell_width + GUTTER),
                GUTTER + row * (cell_height + GUTTER),
                cell_width,
                cell_height,
            )
        }
    };
    Some(geometry.with_min_size())
}

/// Lay out every window in `ids`, which must be in open order.
///
/// Returns one `(id, geometry)` pair per input, in the same order.
pub fn tile_windows<Id: Copy>(ids: &[Id], viewport: Viewport) -> Vec<(Id, Geometry)> {
    let count = ids.len();
    ids.iter()
        .enumerate()
        .filter_map(|(rank, id)| tile_slot(rank, count, viewport).map(|g| (*id, g)))
        .collect()
}

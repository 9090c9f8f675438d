//! Text renderings of a ring, given its identifiers in ring order.
//! Nothing here touches a running election.
use std::f64::consts::PI;

use crate::NodeId;

/// `id 3 -> id 7 -> id 2`
pub fn render_chain(ids: &[NodeId]) -> String {
    ids.iter()
        .map(|id| format!("id {}", id))
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Lays the identifiers out on a circle of characters, clockwise from the right.
pub fn render_circle(ids: &[NodeId]) -> String {
    match ids {
        [] => String::new(),
        [only] => format!(" {}\n", only),
        [first, second] => format!(" {} <---> {}\n", first, second),
        _ => render_grid(ids),
    }
}

fn render_grid(ids: &[NodeId]) -> String {
    let size = ids.len();
    let radius = size / 2;
    let side = 2 * radius + 1;
    let width = ids.iter().map(|id| id.to_string().len()).max().unwrap_or(1).max(2) + 1;
    let angle_step = 2.0 * PI / size as f64;

    let mut grid = vec![vec![None; side]; side];
    for (index, id) in ids.iter().enumerate() {
        let angle = index as f64 * angle_step;
        let (row, column) = (cell(radius, angle.sin()), cell(radius, angle.cos()));

        grid[row][column] = Some(*id);
    }

    grid.iter()
        .map(|row| {
            let line: String = row
                .iter()
                .map(|slot| match slot {
                    Some(id) => format!("{:^width$}", id, width = width),
                    None => " ".repeat(width),
                })
                .collect();

            format!("{}\n", line.trim_end())
        })
        .collect()
}

fn cell(radius: usize, offset: f64) -> usize {
    let radius = radius as f64;

    (radius + radius * offset).round().clamp(0.0, 2.0 * radius) as usize
}

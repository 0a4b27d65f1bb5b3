//! Parametric interlacement matrix generators
//!
//! Every generator is a pure function of the cell coordinates `(x, y)` inside
//! the repeat, where `x` indexes warp ends (columns) and `y` weft picks (rows).
//! A `true` cell means the warp is on the face.

use ndarray::Array2;

/// Build a `repeat_y` × `repeat_x` matrix from a cell predicate
pub fn from_fn(
    repeat_x: usize,
    repeat_y: usize,
    cell: impl Fn(usize, usize) -> bool,
) -> Array2<bool> {
    Array2::from_shape_fn((repeat_y, repeat_x), |(y, x)| cell(x, y))
}

/// One-over-one plain weave
pub fn plain() -> Array2<bool> {
    from_fn(2, 2, |x, y| (x + y) % 2 == 0)
}

/// Basket weave with `block` ends and picks working together
pub fn basket(block: usize) -> Array2<bool> {
    let block = block.max(1);
    from_fn(block * 2, block * 2, |x, y| (x / block + y / block) % 2 == 0)
}

/// Plain weave with a warp-faced grid line every `repeat` ends and picks
pub fn ripstop(repeat: usize) -> Array2<bool> {
    from_fn(repeat, repeat, |x, y| {
        x % repeat == 0 || y % repeat == 0 || (x + y) % 2 == 0
    })
}

/// Twill whose line advances `x_step` ends per pick
///
/// A cell is warp-faced when `(x·x_step + y·y_step) mod repeat < over`.
/// `x_step = y_step = 1` gives a regular 45° left-hand twill; a larger
/// `y_step` steepens the line.
pub fn twill(repeat: usize, over: usize, x_step: usize, y_step: usize) -> Array2<bool> {
    from_fn(repeat, repeat, |x, y| (x * x_step + y * y_step) % repeat < over)
}

/// Right-hand twill with `over` warp floats in a `repeat`-end repeat
pub fn right_hand_twill(repeat: usize, over: usize) -> Array2<bool> {
    from_fn(repeat, repeat, |x, y| (x + repeat - y % repeat) % repeat < over)
}

/// Twill whose direction reverses every `section` ends
pub fn broken_twill(section: usize) -> Array2<bool> {
    from_fn(section * 2, section, |x, y| {
        let half = section / 2;
        if (x / section) % 2 == 0 {
            (x + y) % section < half
        } else {
            (x + section - y % section) % section < half
        }
    })
}

/// Herringbone: a twill mirrored every `period` ends
pub fn herringbone(period: usize) -> Array2<bool> {
    let width = period * 2;
    from_fn(width, width, |x, y| {
        let x_mod = x % width;
        let offset = if x_mod < period {
            x_mod
        } else {
            width - 1 - x_mod
        };
        (y + offset) % 4 < 2
    })
}

/// Warp-faced satin: one warp point per pick, moved `step` ends each pick
pub fn satin(shafts: usize, step: usize) -> Array2<bool> {
    from_fn(shafts, shafts, |x, y| (x + y * step) % shafts == 0)
}

/// Weft-faced satin (sateen) built on the transposed step rule
pub fn sateen(shafts: usize, step: usize) -> Array2<bool> {
    from_fn(shafts, shafts, |x, y| (y + x * step) % shafts == 0)
}

fn diamond_cell(x: usize, y: usize, center: f64, radius: f64) -> bool {
    (x as f64 - center).abs() + (y as f64 - center).abs() < radius
}

/// Diamond figure of Manhattan radius `radius` centred in the repeat
pub fn diamond(repeat: usize, radius: f64) -> Array2<bool> {
    let center = (repeat as f64 - 1.0) / 2.0;
    from_fn(repeat, repeat, |x, y| diamond_cell(x, y, center, radius))
}

/// Large diamond over a grid of single warp dots, a simplified damask
pub fn damask(repeat: usize, radius: f64, dot_spacing: usize) -> Array2<bool> {
    let center = (repeat as f64 - 1.0) / 2.0;
    let spacing = dot_spacing.max(1);
    from_fn(repeat, repeat, |x, y| {
        diamond_cell(x, y, center, radius) || (x % spacing == 0 && y % spacing == 0)
    })
}

/// Square warp dot covering cells `from..=to` on both axes
pub fn dot(repeat: usize, from: usize, to: usize) -> Array2<bool> {
    from_fn(repeat, repeat, |x, y| {
        (from..=to).contains(&(x % repeat)) && (from..=to).contains(&(y % repeat))
    })
}

/// Warp-faced rows on every other pick
pub fn rows(repeat_x: usize, repeat_y: usize) -> Array2<bool> {
    from_fn(repeat_x, repeat_y, |_, y| y % 2 == 0)
}

/// Warp-faced columns on every other end
pub fn columns(repeat_x: usize, repeat_y: usize) -> Array2<bool> {
    from_fn(repeat_x, repeat_y, |x, _| x % 2 == 0)
}

/// Entirely warp-faced repeat
pub fn solid(repeat_x: usize, repeat_y: usize) -> Array2<bool> {
    from_fn(repeat_x, repeat_y, |_, _| true)
}

/// Warp-faced stripes following a fixed end pattern
pub fn stripe_mask(pattern: &[bool], repeat_y: usize) -> Array2<bool> {
    let len = pattern.len().max(1);
    from_fn(pattern.len(), repeat_y, |x, _| {
        pattern.get(x % len).copied().unwrap_or(true)
    })
}

/// Waffle: alternating cell quadrants of `block` ends
pub fn waffle(block: usize) -> Array2<bool> {
    let half = block / 2;
    from_fn(block * 2, block * 2, |x, y| {
        let zone = (x / block + y / block) % 2;
        if zone == 0 {
            (x % block < half) == (y % block < half)
        } else {
            (x % block >= half) == (y % block >= half)
        }
    })
}

/// Houndstooth built from `block`-sized checks with notched corners
pub fn houndstooth(block: usize) -> Array2<bool> {
    let half = block / 2;
    from_fn(block * 2, block * 2, |x, y| {
        let lx = x % block;
        let ly = y % block;
        if (x / block + y / block) % 2 == 0 {
            lx < half || ly < half
        } else {
            lx >= half && ly >= half
        }
    })
}

/// Corded pile: a warp-faced band `band` ends wide, every other pick
pub fn cords(repeat_x: usize, repeat_y: usize, band: usize) -> Array2<bool> {
    from_fn(repeat_x, repeat_y, |x, y| x % repeat_x < band && y % 2 == 0)
}

/// Two plain layers in antiphase, stacked every `layer` picks
pub fn double_cloth(repeat: usize, layer: usize) -> Array2<bool> {
    let layer = layer.max(1);
    from_fn(repeat, repeat, |x, y| {
        if y / layer == 0 {
            (x + y) % 2 == 0
        } else {
            (x + y) % 2 == 1
        }
    })
}

/// Irregular crepe texture from an interference of two sinusoids
pub fn crepe(repeat: usize) -> Array2<bool> {
    from_fn(repeat, repeat, |x, y| {
        (x as f64 * 3.7).sin() * (y as f64 * 2.3).cos() > 0.0
    })
}

/// Seersucker: plain zones alternating with ribbed zones every `zone` ends
pub fn seersucker(zone: usize, repeat_y: usize) -> Array2<bool> {
    let zone = zone.max(1);
    from_fn(zone * 2, repeat_y, |x, y| {
        if (x / zone) % 2 == 0 {
            (x + y) % 2 == 0
        } else {
            y % 2 == 0
        }
    })
}

/// Ottoman rib: warp-faced for the first `rib` picks of the repeat
pub fn ottoman(repeat_x: usize, repeat_y: usize, rib: usize) -> Array2<bool> {
    from_fn(repeat_x, repeat_y, |_, y| y < rib)
}

/// Honeycomb cells of size `cell`, offset by half a cell every other band
pub fn honeycomb(cell: usize) -> Array2<bool> {
    let cell = cell.max(2);
    let half = cell / 2;
    from_fn(cell * 2, cell * 2, |x, y| {
        let hy = y % cell;
        let offset = if (y / cell) % 2 == 0 { 0 } else { half };
        let ax = (x + offset) % cell;
        let open = |v: usize| v == half - 1 || v == half;
        !(open(ax) && open(hy))
    })
}

/// Mock leno: weft-faced holes at the middle of every `cell` square
pub fn mock_leno(repeat: usize, cell: usize) -> Array2<bool> {
    let cell = cell.max(1);
    let middle = cell / 2;
    from_fn(repeat, repeat, |x, y| !(x % cell == middle && y % cell == middle))
}

/// Teardrop figure whose radius swings with twice the polar angle
pub fn paisley(repeat: usize, radius: f64, swing: f64) -> Array2<bool> {
    let center = (repeat / 2) as f64;
    from_fn(repeat, repeat, |x, y| {
        let cx = x as f64 - center;
        let cy = y as f64 - center;
        let angle = cy.atan2(cx);
        cx.hypot(cy) < swing.mul_add((angle * 2.0).sin(), radius)
    })
}

/// Floral lobes from a product of sinusoids over a sparse diagonal ground
pub fn brocade(repeat: usize) -> Array2<bool> {
    from_fn(repeat, repeat, |x, y| {
        let floral = (x as f64 * 0.8).sin() * (y as f64 * 0.8).cos() > 0.3;
        floral || (x + y) % 3 == 0
    })
}

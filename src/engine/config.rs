use super::shape::Shape;

pub const BOARD_SIZE: usize = 12;
pub const NUM_SHAPES: usize = 10;
/// Number of preview slots dealt per round.
pub const QUEUE_LEN: usize = 3;

/// Placement score awarded per row a candidate placement would complete.
pub const ROW_COMPLETION_POINTS: u32 = 100;

/// Default host tick period.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 2000;
/// Default delay between choosing a placement and committing it.
pub const DEFAULT_PLACEMENT_DELAY_MS: u64 = 500;

pub const SINGLE: Shape = Shape::new("Single", &[0b1]);
pub const DUO: Shape = Shape::new("Duo", &[0b11]);
pub const TRIO: Shape = Shape::new("Trio", &[0b111]);
pub const QUAD: Shape = Shape::new("Quad", &[0b1111]);
pub const OCTO: Shape = Shape::new("Octo", &[0b1111_1111]);
pub const SQUARE: Shape = Shape::new("Square", &[0b11, 0b11]);
pub const RECTANGLE: Shape = Shape::new("Rectangle", &[0b1111, 0b1111]);
/// ```text
/// ■
/// ■
/// ■■■
/// ```
pub const L_SHAPE: Shape = Shape::new("L", &[0b001, 0b001, 0b111]);
/// ```text
/// ■■■
///  ■
/// ```
pub const T_SHAPE: Shape = Shape::new("T", &[0b111, 0b010]);
pub const VERTICAL_QUAD: Shape = Shape::new("VerticalQuad", &[0b1, 0b1, 0b1, 0b1]);

pub const SHAPES: [Shape; NUM_SHAPES] = [
    SINGLE,
    DUO,
    TRIO,
    QUAD,
    OCTO,
    SQUARE,
    RECTANGLE,
    L_SHAPE,
    T_SHAPE,
    VERTICAL_QUAD,
];

/// Look up a catalog shape by name, ignoring ASCII case.
pub fn shape_by_name(name: &str) -> Option<Shape> {
    SHAPES
        .iter()
        .copied()
        .find(|s| s.name().eq_ignore_ascii_case(name))
}

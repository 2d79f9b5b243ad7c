use std::fmt;

const PALETTE: [Color; 10] = [
    Color::Blue,
    Color::Purple,
    Color::Orange,
    Color::Pink,
    Color::Yellow,
    Color::Green,
    Color::Red,
    Color::Khaki,
    Color::PaleRed,
    Color::PaleBlue,
];

/// Categorical color for the `index`-th label; the palette repeats.
pub fn pick_color(index: usize) -> Color {
    PALETTE[index % PALETTE.len()].clone()
}

#[derive(Debug, PartialEq, Clone)]
pub enum Color {
    Purple,
    Blue,
    Orange,
    Gray,
    Black,
    Green,
    Pink,
    Yellow,
    Red,
    Khaki,
    PaleRed,
    PaleBlue,
    Grad(f64),
}

impl fmt::Display for Color {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Color::Purple => write!(formatter, "#814ED1"),
            Color::Blue => write!(formatter, "#1383C6"),
            Color::Orange => write!(formatter, "#E16A2C"),
            Color::Gray => write!(formatter, "#BABABA"),
            Color::Black => write!(formatter, "#000000"),
            Color::Pink => write!(formatter, "#ED3981"),
            Color::Yellow => write!(formatter, "#EFCD17"),
            Color::Green => write!(formatter, "#009D4E"),
            Color::Red => write!(formatter, "#E3371E"),
            Color::Khaki => write!(formatter, "#F0E68C"),
            Color::PaleRed => write!(formatter, "#FF4858"),
            Color::PaleBlue => write!(formatter, "#46B2E8"),
            Color::Grad(value) => write!(formatter, "{}", get_gradient(*value)),
        }
    }
}

/// Blue-to-red blend; `value` is clamped to `[0, 1]`.
fn get_gradient(value: f64) -> String {
    let value = if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) };
    let blue: (u8, u8, u8) = (0, 73, 255);
    let red: (u8, u8, u8) = (255, 0, 0);
    let mix_red = (blue.0 as f64 * (1.0 - value) + red.0 as f64 * value).round() as u8;
    let mix_green = (blue.1 as f64 * (1.0 - value) + red.1 as f64 * value).round() as u8;
    let mix_blue = (blue.2 as f64 * (1.0 - value) + red.2 as f64 * value).round() as u8;

    format!("#{:02X}{:02X}{:02X}", mix_red, mix_green, mix_blue)
}

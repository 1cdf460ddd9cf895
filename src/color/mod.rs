mod palette;
mod utils;

pub use palette::{COLOR_COUNT, COLOR_TABLE, NamedColor};
use smart_leds::RGB8;
pub use utils::{BLACK, blend_colors, fill, rgb_from_u32, scale_color, wheel};

pub type Rgb = RGB8;

//! Fixed-point conversion and gradient utilities.

mod gradient;
mod q16;

pub use gradient::gradient_at;
pub use q16::{
    convert_signal, from_q16, q16_from_f32, q16_to_f32, to_q16, Q16_HALF, Q16_ONE, Q16_SHIFT,
};

/// ANSI color helper utilities for terminal output.
use crate::models::ConfigurableOption;
use ansi_term::Colour;

const GREY: Colour = Colour::Fixed(8);

/// Parse `#rrggbb` or `#rgb` into an RGB colour.
pub fn hex_to_colour(hex: &str) -> Option<Colour> {
    let h = hex.trim().strip_prefix('#')?;
    if !h.is_ascii() {
        return None;
    }
    let expand = |c: u8| c * 17;

    match h.len() {
        6 => {
            let r = u8::from_str_radix(&h[0..2], 16).ok()?;
            let g = u8::from_str_radix(&h[2..4], 16).ok()?;
            let b = u8::from_str_radix(&h[4..6], 16).ok()?;
            Some(Colour::RGB(r, g, b))
        }
        3 => {
            let r = u8::from_str_radix(&h[0..1], 16).ok()?;
            let g = u8::from_str_radix(&h[1..2], 16).ok()?;
            let b = u8::from_str_radix(&h[2..3], 16).ok()?;
            Some(Colour::RGB(expand(r), expand(g), expand(b)))
        }
        _ => None,
    }
}

/// Paint `text` with the option's colour, grey when the option is disabled,
/// plain when it has no usable colour.
pub fn paint_option(text: &str, option: Option<&ConfigurableOption>) -> String {
    match option {
        Some(o) if o.disabled => GREY.paint(text).to_string(),
        Some(o) => match o.color.as_deref().and_then(hex_to_colour) {
            Some(c) => c.paint(text).to_string(),
            None => text.to_string(),
        },
        // values missing from the taxonomy render as unknown
        None => Colour::Fixed(244).italic().paint(text).to_string(),
    }
}

/// Days outside the focused month are dimmed.
pub fn dim_if(text: &str, dim: bool) -> String {
    if dim {
        GREY.paint(text).to_string()
    } else {
        text.to_string()
    }
}

pub fn highlight_today(text: &str) -> String {
    Colour::Black.on(Colour::Cyan).bold().paint(text).to_string()
}

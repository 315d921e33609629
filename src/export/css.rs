//! CSS custom-property export.

use std::fmt::Write as _;

use crate::models::Color;

/// Renders colors as a `:root` block of CSS custom properties.
///
/// Each color contributes `--color-{n}` (hex) and `--color-{n}-rgb` (comma
/// separated channels, usable inside `rgba()`), numbered from 1 in strip
/// order.
///
/// # Examples
///
/// ```
/// use lazypalette::export::export_as_css;
/// use lazypalette::models::Color;
///
/// let red = Color::from_hex("#FF0000", "red").unwrap();
/// assert_eq!(
///     export_as_css(&[red]),
///     ":root {\n  --color-1: #FF0000;\n  --color-1-rgb: 255, 0, 0;\n}"
/// );
/// ```
pub fn export_as_css(colors: &[Color]) -> String {
    let mut output = String::from(":root {\n");

    for (index, color) in colors.iter().enumerate() {
        let n = index + 1;
        let rgb = color.rgb();
        let _ = writeln!(output, "  --color-{n}: {};", color.hex());
        let _ = writeln!(output, "  --color-{n}-rgb: {}, {}, {};", rgb.r, rgb.g, rgb.b);
    }

    if colors.is_empty() {
        output.push('\n');
    }
    output.push('}');
    output
}

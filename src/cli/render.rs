//! Terminal rendering of color strips.
//!
//! On a terminal each slot gets a swatch painted in its own color with the
//! contrast text color on top. When stdout is piped the same lines are written
//! without escape codes.

use crossterm::style::{StyledContent, Stylize};
use std::io::IsTerminal;

use crate::config::ThemeMode;
use crate::models::{Color, HarmonyMode};

/// Rendering options resolved from configuration.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Emit ANSI colors
    pub styled: bool,
    /// Chrome tuned for a dark terminal background
    pub dark: bool,
    /// Print the overlay text color for each slot
    pub show_contrast: bool,
}

impl RenderOptions {
    /// Options for stdout, colored only when it is a terminal.
    ///
    /// The OS theme is only queried for styled output.
    #[must_use]
    pub fn for_stdout(theme: ThemeMode, show_contrast: bool) -> Self {
        let styled = std::io::stdout().is_terminal();
        Self {
            styled,
            dark: styled && theme.is_dark(),
            show_contrast,
        }
    }

    fn dim(&self, text: String) -> StyledContent<String> {
        if self.dark {
            text.dark_grey()
        } else {
            text.grey()
        }
    }

    fn maybe<T: std::fmt::Display>(&self, styled: StyledContent<T>) -> String {
        if self.styled {
            styled.to_string()
        } else {
            styled.content().to_string()
        }
    }
}

/// Renders one line for a slot, numbered from 1.
#[must_use]
pub fn render_color_line(slot: usize, color: &Color, options: RenderOptions) -> String {
    let contrast = color.contrast_color();
    let swatch = format!("  {}  ", color.hex())
        .on(color.rgb().to_crossterm_color())
        .with(contrast.rgb().to_crossterm_color());

    let mut line = format!(
        "{:>2} {} {:<18} {:<20}",
        slot,
        options.maybe(swatch),
        color.rgb().to_css(),
        color.hsl().to_string(),
    );

    if options.show_contrast {
        line.push_str(&options.maybe(options.dim(format!(" text: {contrast}"))));
    }

    if color.is_locked() {
        line.push_str(&options.maybe("  [locked]".to_string().bold()));
    }

    line.trim_end().to_string()
}

/// Renders a full strip with a mode header.
#[must_use]
pub fn render_strip(mode: HarmonyMode, colors: &[Color], options: RenderOptions) -> String {
    let header = options.maybe(format!("{} palette", mode.display_name()).bold());
    let mut lines = vec![header];
    lines.extend(
        colors
            .iter()
            .enumerate()
            .map(|(i, color)| render_color_line(i + 1, color, options)),
    );
    lines.join("\n")
}

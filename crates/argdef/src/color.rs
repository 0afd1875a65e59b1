//! Optional ANSI coloring for rendered text

use anstyle::AnsiColor;
use anstyle::Style;

/// Names in the fixed palette
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// ANSI black
    Black,
    /// ANSI red
    Red,
    /// ANSI green
    Green,
    /// ANSI yellow
    Yellow,
    /// ANSI blue
    Blue,
    /// ANSI magenta
    Magenta,
    /// ANSI cyan
    Cyan,
    /// ANSI white
    White,
    /// Bright black
    Gray,
    /// Bold, without changing the color
    Bold,
}

impl Color {
    /// Every name, in declaration order
    pub const ALL: [Color; 10] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
        Self::Gray,
        Self::Bold,
    ];

    /// Lowercase name, as accepted by `FromStr`
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
            Self::Gray => "gray",
            Self::Bold => "bold",
        }
    }

    fn style(self) -> Style {
        let fg = |c: AnsiColor| Style::new().fg_color(Some(anstyle::Color::Ansi(c)));
        match self {
            Self::Black => fg(AnsiColor::Black),
            Self::Red => fg(AnsiColor::Red),
            Self::Green => fg(AnsiColor::Green),
            Self::Yellow => fg(AnsiColor::Yellow),
            Self::Blue => fg(AnsiColor::Blue),
            Self::Magenta => fg(AnsiColor::Magenta),
            Self::Cyan => fg(AnsiColor::Cyan),
            Self::White => fg(AnsiColor::White),
            Self::Gray => fg(AnsiColor::BrightBlack),
            Self::Bold => Style::new().bold(),
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Color {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownColor(s.to_owned()))
    }
}

/// A name outside the palette
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownColor(String);

impl std::fmt::Display for UnknownColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown color `{}`", self.0)
    }
}

impl std::error::Error for UnknownColor {}

/// Wraps text in color escapes, or leaves it alone when disabled
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    /// `Some(_)` forces the choice; `None` colors only when stdout and stderr are terminals
    pub fn new(colors: Option<bool>) -> Self {
        let enabled = colors.unwrap_or_else(detect);
        Self { enabled }
    }

    /// Never colors
    pub const fn plain() -> Self {
        Self { enabled: false }
    }

    /// Whether [`Palette::paint`] adds escapes
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// `text` wrapped in `color`, or unchanged when disabled
    pub fn paint(&self, color: Color, text: &str) -> String {
        if self.enabled {
            let style = color.style();
            format!("{}{text}{}", style.render(), style.render_reset())
        } else {
            text.to_owned()
        }
    }
}

/// Both streams must accept color, as judged by `anstream` (`NO_COLOR`, `CLICOLOR`, TTY)
fn detect() -> bool {
    let stdout = anstream::AutoStream::choice(&std::io::stdout());
    let stderr = anstream::AutoStream::choice(&std::io::stderr());
    let enabled =
        stdout != anstream::ColorChoice::Never && stderr != anstream::ColorChoice::Never;
    tracing::debug!(?stdout, ?stderr, enabled, "detected color support");
    enabled
}

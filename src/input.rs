use crate::carousel::Carousel;
use crate::error::CarouselError;

/// A user request against the experience slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Next,
    Previous,
    GoTo(usize),
    Quit,
}

impl Input {
    /// Parses one command line: `next`, `prev`, `goto <n>` or `quit`.
    ///
    /// Arrow-key names are accepted as aliases of `next` and `prev`.
    pub fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let command = words.next()?.to_ascii_lowercase();
        let input = match command.as_str() {
            "next" | "n" | "right" => Input::Next,
            "prev" | "previous" | "p" | "left" => Input::Previous,
            "goto" | "g" => Input::GoTo(words.next()?.parse().ok()?),
            "quit" | "q" | "exit" => Input::Quit,
            _ => return None,
        };
        // Trailing words make the line ambiguous.
        match words.next() {
            Some(_) => None,
            None => Some(input),
        }
    }

    /// Applies the request to a frame-driven carousel.
    ///
    /// `Quit` is left to the caller and changes nothing.
    pub fn apply<T>(self, carousel: &mut Carousel<T>) -> Result<Option<usize>, CarouselError> {
        match self {
            Input::Next => Ok(carousel.next()),
            Input::Previous => Ok(carousel.previous()),
            Input::GoTo(index) => carousel.go_to(index),
            Input::Quit => Ok(None),
        }
    }
}

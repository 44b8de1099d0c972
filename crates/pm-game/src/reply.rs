//! Text returned to the player after each input.

/// How a piece of text should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Ordinary output.
    Plain,
    /// Story beats meant to be revealed slowly and highlighted.
    Dramatic,
}

/// One block of output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Presentation of the block.
    pub tone: Tone,
    /// The text itself.
    pub text: String,
}

/// The game's answer to one line of input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    segments: Vec<Segment>,
}

impl Reply {
    /// An empty reply.
    pub fn new() -> Self {
        Self::default()
    }

    /// A reply holding a single plain block.
    pub fn plain(text: impl Into<String>) -> Self {
        let mut reply = Self::new();
        reply.say(text);
        reply
    }

    /// Append a plain block. Empty text is skipped.
    pub fn say(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Tone::Plain, text.into())
    }

    /// Append a dramatic block. Empty text is skipped.
    pub fn announce(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Tone::Dramatic, text.into())
    }

    fn push(&mut self, tone: Tone, text: String) -> &mut Self {
        if !text.is_empty() {
            self.segments.push(Segment { tone, text });
        }
        self
    }

    /// Append every block of another reply.
    pub fn extend(&mut self, other: Reply) -> &mut Self {
        self.segments.extend(other.segments);
        self
    }

    /// All blocks in order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Whether there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Every block joined with newlines, ignoring tone.
    pub fn text(&self) -> String {
        self.segments
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl std::fmt::Display for Reply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text())
    }
}

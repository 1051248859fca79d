/// Which annotation wins when a field is both nullable and carries an
/// explicit default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DefaultPrecedence {
    /// The captured default is kept; `default: null` is only emitted for
    /// nullable fields without one.
    #[default]
    ExplicitDefault,
    /// Nullability always forces `default: null`, discarding the captured
    /// default.
    NullDefault,
}

/// Options for [`convert_object_with_options`](crate::convert_object_with_options)
/// and friends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConvertOptions {
    pub default_precedence: DefaultPrecedence,
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_precedence(mut self, precedence: DefaultPrecedence) -> Self {
        self.default_precedence = precedence;
        self
    }
}

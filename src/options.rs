//! Game configuration options.

/// Configuration options for the round engine.
///
/// ```
/// use bjround::GameOptions;
///
/// let options = GameOptions::default().with_dealer_draw_limit(16);
/// assert_eq!(options.dealer_draw_limit, 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// The dealer draws while its full total is at or below this value.
    ///
    /// Soft totals count: a soft 16 draws, a soft 17 stands.
    pub dealer_draw_limit: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            dealer_draw_limit: 16,
        }
    }
}

impl GameOptions {
    /// Sets the dealer draw limit.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_draw_limit(15);
    /// assert_eq!(options.dealer_draw_limit, 15);
    /// ```
    #[must_use]
    pub const fn with_dealer_draw_limit(mut self, limit: u8) -> Self {
        self.dealer_draw_limit = limit;
        self
    }

    /// Returns whether the dealer must draw at `total`.
    #[must_use]
    pub const fn dealer_must_draw(&self, total: u16) -> bool {
        total <= self.dealer_draw_limit as u16
    }
}

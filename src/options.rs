//! Game configuration options.

/// Configuration options for a high-card game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use highcard::GameOptions;
///
/// let options = GameOptions::default()
///     .with_staged_reveal(false)
///     .with_auto_deal_interval_ms(800);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Whether a dealt round stays in flight until the front-end settles it.
    ///
    /// When disabled, every deal settles immediately.
    pub staged_reveal: bool,
    /// Whether a won round passes through the celebrating phase.
    pub celebrate_wins: bool,
    /// Period of the auto-deal timer in milliseconds.
    pub auto_deal_interval_ms: u32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            staged_reveal: true,
            celebrate_wins: true,
            auto_deal_interval_ms: 1100,
        }
    }
}

impl GameOptions {
    /// Sets whether dealt rounds wait for the front-end to settle them.
    ///
    /// # Example
    ///
    /// ```
    /// use highcard::GameOptions;
    ///
    /// let options = GameOptions::default().with_staged_reveal(false);
    /// assert_eq!(options.staged_reveal, false);
    /// ```
    #[must_use]
    pub const fn with_staged_reveal(mut self, staged: bool) -> Self {
        self.staged_reveal = staged;
        self
    }

    /// Sets whether won rounds pass through the celebrating phase.
    ///
    /// # Example
    ///
    /// ```
    /// use highcard::GameOptions;
    ///
    /// let options = GameOptions::default().with_celebrate_wins(false);
    /// assert_eq!(options.celebrate_wins, false);
    /// ```
    #[must_use]
    pub const fn with_celebrate_wins(mut self, celebrate: bool) -> Self {
        self.celebrate_wins = celebrate;
        self
    }

    /// Sets the auto-deal timer period.
    ///
    /// # Example
    ///
    /// ```
    /// use highcard::GameOptions;
    ///
    /// let options = GameOptions::default().with_auto_deal_interval_ms(500);
    /// assert_eq!(options.auto_deal_interval_ms, 500);
    /// ```
    #[must_use]
    pub const fn with_auto_deal_interval_ms(mut self, interval_ms: u32) -> Self {
        self.auto_deal_interval_ms = interval_ms;
        self
    }
}

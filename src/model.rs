//! Data model for the nucleotide count viewer.
//!
//! This module contains all data structures for representing:
//! - Nucleotide symbols and their counts
//! - Application state (input buffer, cursor, mode)
//!
//! The count result is an explicit enumerated symbol type plus an ordered
//! set of per-symbol tallies, so display order never depends on map
//! insertion order.

/// One of the four DNA bases, in fixed display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nucleotide {
    A,
    T,
    G,
    C,
}

impl Nucleotide {
    /// All four bases in display order: A, T, G, C.
    pub const ALL: [Nucleotide; 4] = [
        Nucleotide::A,
        Nucleotide::T,
        Nucleotide::G,
        Nucleotide::C,
    ];

    /// The single-character symbol for this base.
    pub fn symbol(self) -> char {
        match self {
            Nucleotide::A => 'A',
            Nucleotide::T => 'T',
            Nucleotide::G => 'G',
            Nucleotide::C => 'C',
        }
    }

    /// The symbol as a static string (for table rows and bar labels).
    pub fn symbol_str(self) -> &'static str {
        match self {
            Nucleotide::A => "A",
            Nucleotide::T => "T",
            Nucleotide::G => "G",
            Nucleotide::C => "C",
        }
    }

    /// The full chemical name of this base.
    pub fn full_name(self) -> &'static str {
        match self {
            Nucleotide::A => "adenine",
            Nucleotide::T => "thymine",
            Nucleotide::G => "guanine",
            Nucleotide::C => "cytosine",
        }
    }

    /// Maps an exact (case-sensitive) symbol to its base.
    ///
    /// Lowercase letters and anything outside {A, T, G, C} return `None`;
    /// the counter treats them as absent rather than rejecting them.
    pub fn from_symbol(c: char) -> Option<Nucleotide> {
        match c {
            'A' => Some(Nucleotide::A),
            'T' => Some(Nucleotide::T),
            'G' => Some(Nucleotide::G),
            'C' => Some(Nucleotide::C),
            _ => None,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Occurrence counts for the four bases of one sequence.
///
/// Created fresh on every render pass and immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NucleotideCounts {
    counts: [u64; 4],
}

impl NucleotideCounts {
    /// Counts the four base symbols in a sequence with a single pass.
    ///
    /// Counting is case-sensitive and never fails: characters outside
    /// {A, T, G, C} simply do not contribute to any tally.
    pub fn tally(sequence: &str) -> Self {
        let mut counts = [0u64; 4];
        for c in sequence.chars() {
            if let Some(base) = Nucleotide::from_symbol(c) {
                counts[base.index()] += 1;
            }
        }
        Self { counts }
    }

    /// Returns the count for one base.
    pub fn get(&self, base: Nucleotide) -> u64 {
        self.counts[base.index()]
    }

    /// Iterates over (base, count) pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Nucleotide, u64)> + '_ {
        Nucleotide::ALL.into_iter().map(|base| (base, self.get(base)))
    }

    /// Sum of the four counts (at most the sequence length; equal exactly
    /// when every character is a valid base symbol).
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

/// Application mode for handling different input states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Normal navigation mode
    #[default]
    Normal,
    /// Insert mode: keystrokes edit the query text
    Insert,
}

/// The complete application state.
///
/// Only the raw query text persists between render passes; the extracted
/// sequence, counts, and adapter views are recomputed on every draw.
#[derive(Debug)]
pub struct AppState {
    /// The raw query text shown in the input panel
    pub input: String,
    /// Cursor position as a character index into `input`
    pub cursor: usize,
    /// Current application mode
    pub mode: AppMode,
    /// Whether the help overlay is visible
    pub show_help: bool,
    /// Whether the application should quit
    pub should_quit: bool,
    /// Status message to display
    pub status_message: Option<String>,
}

impl AppState {
    /// Creates a new application state seeded with the given query text.
    pub fn new(input: String) -> Self {
        let cursor = input.chars().count();
        Self {
            input,
            cursor,
            mode: AppMode::Normal,
            show_help: false,
            should_quit: false,
            status_message: None,
        }
    }

    /// Byte offset of the cursor within the input buffer.
    fn byte_index(&self) -> usize {
        self.input
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }

    /// Enters insert mode.
    pub fn enter_insert_mode(&mut self) {
        self.mode = AppMode::Insert;
        self.status_message = None;
    }

    /// Leaves insert mode and returns to normal mode.
    pub fn leave_insert_mode(&mut self) {
        self.mode = AppMode::Normal;
    }

    /// Inserts a character at the cursor (insert mode).
    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index();
        self.input.insert(at, c);
        self.cursor += 1;
    }

    /// Inserts a line break at the cursor (insert mode).
    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// Deletes the character before the cursor (insert mode).
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index();
        self.input.remove(at);
    }

    /// Moves the cursor one character left.
    pub fn move_cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Moves the cursor one character right.
    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.input.chars().count() {
            self.cursor += 1;
        }
    }

    /// Replaces the input with the given query and puts the cursor at the end.
    pub fn reset_input(&mut self, query: &str) {
        self.input = query.to_string();
        self.cursor = self.input.chars().count();
        self.status_message = Some("Input reset to default query".to_string());
    }

    /// Shows the help overlay.
    pub fn open_help(&mut self) {
        self.show_help = true;
    }

    /// Dismisses the help overlay.
    pub fn dismiss_help(&mut self) {
        self.show_help = false;
    }

    /// Requests application shutdown.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_order() {
        let symbols: Vec<char> = Nucleotide::ALL.iter().map(|b| b.symbol()).collect();
        assert_eq!(symbols, vec!['A', 'T', 'G', 'C']);
    }

    #[test]
    fn test_full_names() {
        assert_eq!(Nucleotide::A.full_name(), "adenine");
        assert_eq!(Nucleotide::T.full_name(), "thymine");
        assert_eq!(Nucleotide::G.full_name(), "guanine");
        assert_eq!(Nucleotide::C.full_name(), "cytosine");
    }

    #[test]
    fn test_from_symbol_case_sensitive() {
        assert_eq!(Nucleotide::from_symbol('A'), Some(Nucleotide::A));
        assert_eq!(Nucleotide::from_symbol('a'), None);
        assert_eq!(Nucleotide::from_symbol('N'), None);
        assert_eq!(Nucleotide::from_symbol('-'), None);
    }

    #[test]
    fn test_tally_example() {
        let counts = NucleotideCounts::tally("GAACACGT");
        assert_eq!(counts.get(Nucleotide::A), 3);
        assert_eq!(counts.get(Nucleotide::T), 1);
        assert_eq!(counts.get(Nucleotide::G), 2);
        assert_eq!(counts.get(Nucleotide::C), 2);
        assert_eq!(counts.total(), 8);
    }

    #[test]
    fn test_tally_empty() {
        let counts = NucleotideCounts::tally("");
        for (_, count) in counts.iter() {
            assert_eq!(count, 0);
        }
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn test_tally_ignores_foreign_symbols() {
        let counts = NucleotideCounts::tally("XYZ");
        assert_eq!(counts.total(), 0);

        // Lowercase never matches
        let counts = NucleotideCounts::tally("acgt");
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn test_tally_total_bounded_by_length() {
        let seq = "GA-AC ACGTn";
        let counts = NucleotideCounts::tally(seq);
        assert!(counts.total() <= seq.len() as u64);

        // Equality iff every character is a valid symbol
        let pure = "GAACACGT";
        assert_eq!(NucleotideCounts::tally(pure).total(), pure.len() as u64);
    }

    #[test]
    fn test_tally_order_independent() {
        // Counting is a multiset operation: reordering characters does
        // not change the result.
        assert_eq!(
            NucleotideCounts::tally("GAACACGT"),
            NucleotideCounts::tally("TGCAACAG")
        );
    }

    #[test]
    fn test_tally_idempotent() {
        let seq = "GAACACGT";
        assert_eq!(NucleotideCounts::tally(seq), NucleotideCounts::tally(seq));
    }

    #[test]
    fn test_iter_display_order() {
        let counts = NucleotideCounts::tally("GAACACGT");
        let rows: Vec<(char, u64)> = counts.iter().map(|(b, n)| (b.symbol(), n)).collect();
        assert_eq!(rows, vec![('A', 3), ('T', 1), ('G', 2), ('C', 2)]);
    }

    #[test]
    fn test_insert_and_backspace() {
        let mut state = AppState::new("AC".to_string());
        assert_eq!(state.cursor, 2);

        state.insert_char('G');
        assert_eq!(state.input, "ACG");
        assert_eq!(state.cursor, 3);

        state.backspace();
        assert_eq!(state.input, "AC");
        assert_eq!(state.cursor, 2);

        // Backspace at the start is a no-op
        state.cursor = 0;
        state.backspace();
        assert_eq!(state.input, "AC");
    }

    #[test]
    fn test_insert_mid_buffer() {
        let mut state = AppState::new("AT".to_string());
        state.cursor = 1;
        state.insert_char('G');
        assert_eq!(state.input, "AGT");
        assert_eq!(state.cursor, 2);
    }

    #[test]
    fn test_cursor_movement_bounds() {
        let mut state = AppState::new("AC".to_string());

        state.move_cursor_right();
        assert_eq!(state.cursor, 2);

        state.move_cursor_left();
        state.move_cursor_left();
        assert_eq!(state.cursor, 0);
        state.move_cursor_left();
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_reset_input() {
        let mut state = AppState::new("ACGT".to_string());
        state.cursor = 1;
        state.reset_input(">q\nGG");
        assert_eq!(state.input, ">q\nGG");
        assert_eq!(state.cursor, 5);
        assert!(state.status_message.is_some());
    }

    #[test]
    fn test_mode_transitions() {
        let mut state = AppState::new(String::new());
        assert_eq!(state.mode, AppMode::Normal);

        state.enter_insert_mode();
        assert_eq!(state.mode, AppMode::Insert);

        state.leave_insert_mode();
        assert_eq!(state.mode, AppMode::Normal);
    }
}

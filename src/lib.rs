//! # basecount - Terminal DNA Nucleotide Composition Viewer
//!
//! An interactive terminal page that counts the nucleotide composition of
//! a query DNA sequence using ratatui.
//!
//! ## Architecture
//!
//! The application follows an event-driven architecture with clear separation:
//! - `model`: Nucleotide symbols, counts, and application state
//! - `sequence`: Query text extraction and file loading
//! - `report`: Presentation adapter (sentences, table, bar chart, reports)
//! - `event`: Keyboard event handling (normal/insert modes)
//! - `ui`: TUI rendering with ratatui
//! - `controller`: Orchestration of the main loop
//!
//! ## Pipeline
//!
//! Raw query text flows through extract -> tally -> adapt on every render
//! pass; counting is a pure function and nothing derived from the input
//! is cached between passes. Malformed input never fails: missing sequence
//! lines yield an empty sequence, and characters outside {A, T, G, C}
//! are silently ignored.

pub mod controller;
pub mod event;
pub mod model;
pub mod report;
pub mod sequence;
pub mod ui;

/*!
 * # slokwai - verse corpus annotation and rendering
 *
 * Batch tools over a directory of verse records (one JSON file per verse,
 * holding the verse text, commentary and metadata).
 *
 * ## Features
 *
 * - Detect the speaker of a verse from its opening phrase and store it
 *   immediately before the verse text
 * - Recompute speakers across the corpus by carry-forward in numeric verse order
 * - Repair records that lack a trailing newline
 * - Render the corpus as a Markdown list or a chat-style HTML page that groups
 *   consecutive verses with equivalent commentary
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `verse_record`: Order-preserving verse records and verse identity
 * - `corpus`: Corpus directory listing and commentary loading
 * - `speakers`: Prefix table, detection and presentation roles
 * - `annotator`: Per-record speaker annotation
 * - `normalizer`: Corpus-wide speaker recomputation
 * - `grouping`: Commentary normalization, similarity and verse grouping
 * - `render`: Markdown and HTML renderers
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod file_utils;
pub mod verse_record;
pub mod corpus;
pub mod speakers;
pub mod annotator;
pub mod normalizer;
pub mod grouping;
pub mod render;
pub mod app_controller;
pub mod errors;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use verse_record::{VerseId, VerseRecord};
pub use corpus::{VerseEntry, VerseFile};
pub use grouping::{group_verses, GroupedMessage, TextEquivalence};
pub use speakers::{detect_speaker, SpeakerRole};
pub use errors::{AppError, CorpusError, RecordError};

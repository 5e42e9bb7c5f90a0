// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Procedural secondary motion for a single anchored bone tip.
//!
//! Given the per-frame pose of an anchor (a parent joint) and optional grab
//! input, jiggle computes a trailing tip position and orientation with
//! overshoot and decaying bounce, without keyframes.
//!
//! # Key entry points
//!
//! - [`bone::JiggleBone`] - one simulated tip; attach once, step per frame
//! - [`options::Options`] - tunables with TOML preset support
//! - [`host`] - collaborator traits (pose, grab, debug sink) and [`host::tick`]
//! - [`scenario`] - scripted inputs for demos and tests
//!
//! # Architecture
//!
//! Every frame runs a fixed pipeline (see [`motion`]): motion
//! classification → travel tracking → bounce decay → target blending →
//! tip pose. The only state carried between frames is owned by the bone
//! instance itself; chains are built by feeding one bone's tip into the
//! next bone's anchor.

pub mod bone;
pub mod error;
pub mod host;
pub mod motion;
pub mod options;
pub mod scenario;
pub mod util;
